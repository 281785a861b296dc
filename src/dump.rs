// SPDX-License-Identifier: MIT

use std::fmt::Write;

use crate::strings::is_printable;

/// Bytes covered by the report's leading dump.
pub const DUMP_LEN: usize = 128;

const ROW_LEN: usize = 16;

/// Render up to `max` bytes as hex rows with a parallel ASCII column.
///
/// 16 bytes per row; non-printable bytes show as `.` in the ASCII column.
pub fn hex_dump(data: &[u8], max: usize) -> String {
    let mut out = String::new();
    let data = &data[..data.len().min(max)];

    for (row, chunk) in data.chunks(ROW_LEN).enumerate() {
        let mut hex = String::new();
        let mut ascii = String::new();
        for (i, &b) in chunk.iter().enumerate() {
            if i > 0 {
                hex.push(' ');
            }
            let _ = write!(hex, "{b:02x}");
            ascii.push(if is_printable(b) { b as char } else { '.' });
        }
        let _ = writeln!(out, "  {:04x}: {hex:48} | {ascii}", row * ROW_LEN);
    }

    out
}
