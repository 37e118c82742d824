//! Human readable rendering of decode events.
//!
//! A character line lists the units in binary, right-aligned so that the
//! arrows of consecutive lines line up, followed by the code point and the
//! quoted character:
//!
//! ```text
//!                            01000001 -> U+41('A')
//!                   11000011 10101001 -> U+E9('é')
//!          11100010 10000010 10101100 -> U+20AC('€')
//! ```

use core::fmt;

use crate::{
    decoder::{DecodeEvent, DecodedChar},
    error::InvalidUnit,
    unit::CodeUnit,
};

/// One report line. Does not include the trailing newline.
#[derive(Debug, Clone, Copy)]
pub enum Line<'a, U> {
    /// A decoded character.
    Char(&'a DecodedChar<U>),
    /// An invalid unit diagnostic.
    Invalid(&'a InvalidUnit),
}

/// Returns the report line for `event`, or `None` for events that are not
/// reported (discarded units).
#[must_use]
pub fn line<U: CodeUnit>(event: &DecodeEvent<U>) -> Option<Line<'_, U>> {
    match event {
        DecodeEvent::Char(ch) => Some(Line::Char(ch)),
        DecodeEvent::Invalid(invalid) => Some(Line::Invalid(invalid)),
        DecodeEvent::Dropped { .. } => None,
    }
}

/// Writes one line per reported event, each terminated by `\n`.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_events<'a, W, U, I>(out: &mut W, events: I) -> fmt::Result
where
    W: fmt::Write,
    U: CodeUnit + 'a,
    I: IntoIterator<Item = &'a DecodeEvent<U>>,
{
    for reported in events.into_iter().filter_map(line) {
        writeln!(out, "{reported}")?;
    }
    Ok(())
}

impl<U: CodeUnit> fmt::Display for Line<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Char(ch) => {
                write!(f, "{}-> U+{:X}({})", Units(&ch.units), ch.scalar, Quoted(ch.scalar))
            }
            Line::Invalid(invalid) => {
                let noun = if U::BYTES == 1 { "byte" } else { "unit" };
                write!(f, "Invalid {noun}: {:0width$b}", invalid.unit, width = U::BITS)
            }
        }
    }
}

/// Units in binary, each followed by a space, right-aligned to the width of
/// the longest possible sequence.
#[derive(Debug, Clone, Copy)]
pub struct Units<'a, U>(pub &'a [U]);

impl<U: CodeUnit> fmt::Display for Units<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = U::BITS + 1;
        let column = U::MAX_SEQUENCE * cell;
        let used = self.0.len() * cell;
        for _ in used..column {
            f.write_str(" ")?;
        }
        for unit in self.0 {
            write!(f, "{unit:0width$b} ", width = U::BITS)?;
        }
        Ok(())
    }
}

/// A scalar value as a quoted character literal.
///
/// Non-printable characters are escaped; a value that is not a Unicode scalar
/// is shown as the replacement character.
#[derive(Debug, Clone, Copy)]
pub struct Quoted(pub u32);

impl fmt::Display for Quoted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = char::from_u32(self.0).unwrap_or(char::REPLACEMENT_CHARACTER);
        write!(f, "'{}'", ch.escape_debug())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String, vec};

    use rstest::rstest;

    use super::*;

    fn char_line<U: CodeUnit>(units: &[U], scalar: u32) -> String {
        let ch = DecodedChar {
            units: units.to_vec(),
            scalar,
            offset: 0,
        };
        format!("{}", Line::Char(&ch))
    }

    #[test]
    fn ascii_line() {
        assert_eq!(
            char_line(&[0x41_u8], 0x41),
            "                           01000001 -> U+41('A')"
        );
    }

    #[test]
    fn four_byte_line_fills_column() {
        assert_eq!(
            char_line(&[0xF0_u8, 0x9F, 0x98, 0x80], 0x1F600),
            "11110000 10011111 10011000 10000000 -> U+1F600('😀')"
        );
    }

    #[test]
    fn utf16_pair_line() {
        assert_eq!(
            char_line(&[0xD83D_u16, 0xDE00], 0x1F600),
            "1101100000111101 1101111000000000 -> U+1F600('😀')"
        );
        assert_eq!(
            char_line(&[0x0041_u16], 0x41),
            "                 0000000001000001 -> U+41('A')"
        );
    }

    #[rstest]
    #[case(0x41, "'A'")]
    #[case(0xE9, "'é'")]
    #[case(0x0A, "'\\n'")]
    #[case(0x00, "'\\0'")]
    #[case(0x27, "'\\''")]
    #[case(0x01, "'\\u{1}'")]
    #[case(0xD800, "'\u{FFFD}'")]
    #[case(0x11_0000, "'\u{FFFD}'")]
    fn quoting(#[case] scalar: u32, #[case] expected: &str) {
        assert_eq!(format!("{}", Quoted(scalar)), expected);
    }

    #[test]
    fn invalid_line() {
        let invalid = InvalidUnit {
            encoding: "utf8",
            unit: 0xFF,
            offset: 3,
        };
        assert_eq!(
            format!("{}", Line::<u8>::Invalid(&invalid)),
            "Invalid byte: 11111111"
        );
    }

    #[test]
    fn dropped_events_are_not_reported() {
        let events = vec![
            DecodeEvent::Dropped {
                units: vec![0x80_u8],
                offset: 0,
            },
            DecodeEvent::Char(DecodedChar {
                units: vec![0x41],
                scalar: 0x41,
                offset: 1,
            }),
        ];
        let mut out = String::new();
        write_events(&mut out, &events).unwrap();
        assert_eq!(out, "                           01000001 -> U+41('A')\n");
    }
}
