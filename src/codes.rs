// SPDX-License-Identifier: MIT

use serde::Serialize;

/// Type codes commonly seen in Garmin lookup tables, used as probes into
/// the unknown layout. Kept small on purpose; this is an existence check,
/// not a classification table.
pub const KNOWN_TYPE_CODES: [(u16, &str); 8] = [
    (0x2f01, "POI - Misc"),
    (0x2f02, "POI - Parking"),
    (0x2f03, "POI - Restaurant"),
    (0x2f04, "POI - Gas Station"),
    (0x2f05, "POI - Hotel"),
    (0x2f06, "POI - Waypoint"),
    (0x6400, "City - Large"),
    (0x6401, "City - Medium"),
];

const CONTEXT_BEFORE: usize = 8;
const CONTEXT_AFTER: usize = 20;

/// First occurrence of a known type code, with surrounding raw bytes.
#[derive(Clone, Debug, Serialize)]
pub struct TypeCodeMatch {
    pub offset: usize,
    pub code: u16,
    pub name: &'static str,
    /// Up to 8 bytes before and 20 after the match, clamped to the buffer.
    pub context: Vec<u8>,
}

/// Scan for the first occurrence of each known type code.
///
/// Every 2-byte window is decoded as a little-endian u16 and compared
/// against the catalog; scanning for a code stops at its first hit. This
/// first-match-only policy is the documented behavior of the probe, traded
/// for speed over an exhaustive occurrence index. Matches come back sorted
/// by offset.
pub fn scan(data: &[u8]) -> Vec<TypeCodeMatch> {
    let mut found = Vec::new();

    for &(code, name) in KNOWN_TYPE_CODES.iter() {
        let hit = data
            .windows(2)
            .position(|w| u16::from_le_bytes([w[0], w[1]]) == code);
        if let Some(offset) = hit {
            tracing::debug!("type code 0x{code:04x} ({name}) first at offset 0x{offset:04x}");
            let start = offset.saturating_sub(CONTEXT_BEFORE);
            let end = (offset + CONTEXT_AFTER).min(data.len());
            found.push(TypeCodeMatch {
                offset,
                code,
                name,
                context: data[start..end].to_vec(),
            });
        }
    }

    found.sort_by_key(|m| m.offset);
    found
}
