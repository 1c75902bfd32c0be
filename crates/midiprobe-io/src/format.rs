//! Text renderings of raw bytes for logs and tooltips.
//!
//! Rows line up when stacked: every value takes a nine character column and
//! the radix label is padded to a fixed width.

use std::fmt::Write;

const LABEL_WIDTH: usize = 12;
const COLUMN_WIDTH: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Hexadecimal,
    Decimal,
    Binary,
    /// Printable ASCII, `.` otherwise.
    Character,
}

impl Radix {
    pub const fn name(self) -> &'static str {
        match self {
            Radix::Hexadecimal => "Hexadecimal",
            Radix::Decimal => "Decimal",
            Radix::Binary => "Binary",
            Radix::Character => "Character",
        }
    }

    /// Digits per value, zero padded.
    pub const fn digits(self) -> usize {
        match self {
            Radix::Hexadecimal => 2,
            Radix::Decimal => 3,
            Radix::Binary => 8,
            Radix::Character => 1,
        }
    }
}

pub fn format_value(value: u8, radix: Radix) -> String {
    match radix {
        Radix::Hexadecimal => format!("{:02X}", value),
        Radix::Decimal => format!("{:03}", value),
        Radix::Binary => format!("{:08b}", value),
        Radix::Character => {
            let c = value as char;
            if c.is_ascii_graphic() || c == ' ' {
                c.to_string()
            } else {
                ".".to_string()
            }
        }
    }
}

/// `Hexadecimal:        90       3C       64`
pub fn format_row(values: &[u8], radix: Radix) -> String {
    let mut row = format!("{}:", radix.name());
    let _ = write!(row, "{:width$}", "", width = LABEL_WIDTH - radix.name().len());
    for &value in values {
        let _ = write!(
            row,
            "{:>width$}",
            format_value(value, radix),
            width = COLUMN_WIDTH
        );
    }
    row.truncate(row.trim_end().len());
    row
}

/// Space separated uppercase hex, e.g. `90 3C 64`.
pub fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02X}", byte);
    }
    out
}

/// Title followed by hexadecimal, decimal and binary rows.
pub fn conversion_table(title: &str, values: &[u8]) -> String {
    if values.is_empty() {
        return title.to_string();
    }
    [
        title.to_string(),
        String::new(),
        format_row(values, Radix::Hexadecimal),
        format_row(values, Radix::Decimal),
        format_row(values, Radix::Binary),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0x0A, Radix::Hexadecimal), "0A");
        assert_eq!(format_value(7, Radix::Decimal), "007");
        assert_eq!(format_value(5, Radix::Binary), "00000101");
        assert_eq!(format_value(b'A', Radix::Character), "A");
        assert_eq!(format_value(0x00, Radix::Character), ".");
        assert_eq!(format_value(0xF0, Radix::Character), ".");
    }

    #[test]
    fn test_rows_align() {
        let bytes = [0x90, 60, 100];
        let rows = [
            format_row(&bytes, Radix::Hexadecimal),
            format_row(&bytes, Radix::Decimal),
            format_row(&bytes, Radix::Binary),
        ];
        for row in &rows {
            assert_eq!(row.len(), LABEL_WIDTH + 1 + 3 * COLUMN_WIDTH);
        }
        assert_eq!(rows[0], "Hexadecimal:        90       3C       64");
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(format_row(&[], Radix::Decimal), "Decimal:");
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(hex_string(&[0xF0, 0x7E, 0x7F, 0xF7]), "F0 7E 7F F7");
        assert_eq!(hex_string(&[]), "");
    }

    #[test]
    fn test_conversion_table() {
        insta::assert_snapshot!(conversion_table("Note On", &[0x90, 60, 100]), @r"
        Note On

        Hexadecimal:        90       3C       64
        Decimal:           144      060      100
        Binary:       10010000 00111100 01100100
        ");
        assert_eq!(conversion_table("Tune Request", &[]), "Tune Request");
    }
}
