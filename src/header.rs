// SPDX-License-Identifier: MIT

use serde::Serialize;
use zerocopy::{FromBytes, Unaligned};

/// ASCII signature found at offset 0x02 of known TYP files.
pub const SIGNATURE: &[u8] = b"GARMIN TYP";

const SIGNATURE_START: usize = 0x02;
const SIGNATURE_END: usize = 0x0c;

/// Fixed 0x14-byte header layout.
///
/// Only the signature and the little-endian layout are certain; the four
/// trailing fields are decoded but their meaning beyond 0x0C (probably a
/// version) is unconfirmed.
#[derive(FromBytes, Unaligned, Clone, Copy)]
#[repr(packed)]
pub struct RawHeader {
    /// 0x00: leading 16-bit field, meaning unknown
    pub leading: u16,
    /// 0x02: "GARMIN TYP"
    pub signature: [u8; 10],
    /// 0x0C: likely a format version
    pub version: u16,
    /// 0x0E
    pub unknown_0e: u16,
    /// 0x10
    pub unknown_10: u16,
    /// 0x12
    pub unknown_12: u16,
}

/// The four 16-bit fields gated by the signature check.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct VersionFields {
    pub version: u16,
    pub unknown_0e: u16,
    pub unknown_10: u16,
    pub unknown_12: u16,
}

/// Header fields as far as the buffer allowed them to be decoded.
#[derive(Clone, Debug, Serialize)]
pub struct HeaderInfo {
    pub leading: u16,
    pub has_signature: bool,
    pub versions: Option<VersionFields>,
}

/// Decode the fixed header fields.
///
/// A buffer shorter than 2 bytes cannot hold even the leading field and is
/// rejected. Everything past that is best effort: the signature check needs
/// 12 bytes, the version fields need the full 0x14, and whatever the buffer
/// cannot satisfy is omitted without error. Partial and malformed files are
/// expected inputs for this format.
pub fn decode(data: &[u8]) -> Result<HeaderInfo, String> {
    if data.len() < 2 {
        return Err(format!(
            "file too short for a TYP header: {} bytes",
            data.len()
        ));
    }

    let leading = u16::from_le_bytes([data[0], data[1]]);
    let has_signature =
        data.len() >= SIGNATURE_END && &data[SIGNATURE_START..SIGNATURE_END] == SIGNATURE;

    // read_from_prefix is None when the buffer stops short of 0x14 bytes,
    // which is exactly the silent-omission case.
    let versions = if has_signature {
        RawHeader::read_from_prefix(data).map(|h| VersionFields {
            version: u16::from_le(h.version),
            unknown_0e: u16::from_le(h.unknown_0e),
            unknown_10: u16::from_le(h.unknown_10),
            unknown_12: u16::from_le(h.unknown_12),
        })
    } else {
        None
    };

    Ok(HeaderInfo {
        leading,
        has_signature,
        versions,
    })
}
