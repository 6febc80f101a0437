// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Text helpers shared by the prettifiers.

use std::fmt::Write;

use itertools::Itertools;

/// Convert a space- or null-padded ASCII field to a `String`.
///
/// Stops at the first NUL byte, replaces non-printable bytes with `.`, and
/// trims surrounding whitespace.
pub fn c_to_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    bytes[..end]
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                char::from(b)
            } else {
                '.'
            }
        })
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Render `bytes` as a hex dump that fits in `columns` characters per line.
///
/// Each line holds an offset, the bytes in hex and their printable ASCII
/// form. Lines carry a multiple of 8 bytes whenever the width allows it.
pub fn to_hex_string(bytes: &[u8], columns: usize) -> String {
    // "00000000  " + "xx " per byte + " " + one char per byte
    let mut per_line = (columns.saturating_sub(11) / 4).max(1);
    if per_line >= 8 {
        per_line -= per_line % 8;
    }

    let mut out = String::new();
    for (line, chunk) in bytes.chunks(per_line).enumerate() {
        let hex = chunk.iter().map(|b| format!("{b:02x}")).join(" ");
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    char::from(b)
                } else {
                    '.'
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "{:08x}  {:<width$} {}",
            line * per_line,
            hex,
            ascii,
            width = per_line * 3 - 1
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_to_string() {
        assert_eq!(c_to_string(b"SEAGATE "), "SEAGATE");
        assert_eq!(c_to_string(b"  ab\0cd"), "ab");
        assert_eq!(c_to_string(&[b'a', 0x07, b'b']), "a.b");
        assert_eq!(c_to_string(b""), "");
    }

    #[test]
    fn test_hex_string() {
        let dump = to_hex_string(b"0123456789abcdefXY", 80);
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("00000000  30 31 32"));
        assert!(lines[0].ends_with("0123456789abcdef"));
        assert!(lines[1].starts_with("00000010  58 59"));
        assert!(lines[1].ends_with("XY"));
    }

    #[test]
    fn test_hex_string_narrow() {
        let dump = to_hex_string(&[0xde, 0xad], 0);
        assert_eq!(dump.lines().count(), 2);
    }
}
