//! Classifier and scalar resolver for 8-bit code units.

use crate::encoding::{Disposition, Encoding};

/// Role of a single byte in a UTF-8 stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Utf8Role {
    /// A zero byte. Skipped, and flushes anything pending.
    Filler,
    /// `0xxxxxxx`: a complete one-byte character.
    Single,
    /// `110xxxxx`: lead of a two-byte sequence.
    Lead2,
    /// `1110xxxx`: lead of a three-byte sequence.
    Lead3,
    /// `11110xxx`: lead of a four-byte sequence.
    Lead4,
    /// `10xxxxxx`: only valid as a trailing byte.
    Continuation,
    /// `11111xxx`: cannot start or continue anything.
    Invalid,
}

impl Utf8Role {
    /// Number of bytes in the sequence this role starts, if it starts one.
    #[must_use]
    pub const fn sequence_len(self) -> Option<usize> {
        match self {
            Utf8Role::Single => Some(1),
            Utf8Role::Lead2 => Some(2),
            Utf8Role::Lead3 => Some(3),
            Utf8Role::Lead4 => Some(4),
            Utf8Role::Filler | Utf8Role::Continuation | Utf8Role::Invalid => None,
        }
    }

    /// Mask selecting the value bits of a lead byte with this role.
    const fn value_mask(self) -> u8 {
        match self {
            Utf8Role::Single => 0x7F,
            Utf8Role::Lead2 => 0x1F,
            Utf8Role::Lead3 => 0x0F,
            Utf8Role::Lead4 => 0x07,
            Utf8Role::Filler | Utf8Role::Continuation | Utf8Role::Invalid => 0,
        }
    }
}

/// Classifies one byte. Rules are checked in order and the first match wins,
/// so `0x00` is a filler even though its top bit is clear.
#[must_use]
pub const fn classify(byte: u8) -> Utf8Role {
    if byte == 0 {
        Utf8Role::Filler
    } else if byte >> 7 == 0 {
        Utf8Role::Single
    } else if byte >> 5 == 0b110 {
        Utf8Role::Lead2
    } else if byte >> 4 == 0b1110 {
        Utf8Role::Lead3
    } else if byte >> 3 == 0b1_1110 {
        Utf8Role::Lead4
    } else if byte >> 6 == 0b10 {
        Utf8Role::Continuation
    } else {
        Utf8Role::Invalid
    }
}

/// Resolves the bytes of one character to a scalar value.
///
/// The first byte selects how many of its bits carry value and how many
/// bytes the character spans; each of the following bytes it calls for
/// contributes its low six bits, most significant first. Bytes past that
/// length are ignored, and trailing bytes are not checked against the
/// continuation pattern. Returns 0 for an empty slice or one that does not
/// begin with a lead or single byte.
#[must_use]
pub fn resolve(units: &[u8]) -> u32 {
    let Some((&lead, rest)) = units.split_first() else {
        return 0;
    };
    let role = classify(lead);
    let Some(len) = role.sequence_len() else {
        return 0;
    };
    rest.iter()
        .take(len - 1)
        .fold(u32::from(lead & role.value_mask()), |acc, &b| {
            (acc << 6) | u32::from(b & 0x3F)
        })
}

/// The 8-bit transformation format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Encoding for Utf8 {
    type Unit = u8;
    type Role = Utf8Role;

    const NAME: &'static str = "utf8";

    #[inline]
    fn classify(unit: u8) -> Utf8Role {
        classify(unit)
    }

    fn disposition(role: Utf8Role) -> Disposition {
        match role {
            Utf8Role::Filler => Disposition::Skip,
            Utf8Role::Invalid => Disposition::Reject,
            Utf8Role::Continuation => Disposition::Orphan,
            Utf8Role::Single | Utf8Role::Lead2 | Utf8Role::Lead3 | Utf8Role::Lead4 => {
                Disposition::Start(role.sequence_len().unwrap_or(1))
            }
        }
    }

    #[inline]
    fn resolve(units: &[u8]) -> u32 {
        resolve(units)
    }
}
