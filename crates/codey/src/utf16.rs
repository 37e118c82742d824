//! Classifier and scalar resolver for big-endian 16-bit code units.

use crate::encoding::{Disposition, Encoding};

const SURROGATE_START: u16 = 0xD800;
const SURROGATE_END: u16 = 0xDFFF;
const LOW_SURROGATE_START: u32 = 0xDC00;

/// Role of a 16-bit unit.
///
/// High and low surrogate halves are not told apart: the first surrogate seen
/// is taken as the high half and the unit right after it as the low half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Utf16Role {
    /// Any unit outside the surrogate range; a complete character.
    Normal,
    /// A unit in `0xD800..=0xDFFF`.
    Surrogate,
}

/// Classifies one 16-bit unit.
#[must_use]
pub const fn classify(unit: u16) -> Utf16Role {
    if unit >= SURROGATE_START && unit <= SURROGATE_END {
        Utf16Role::Surrogate
    } else {
        Utf16Role::Normal
    }
}

/// Resolves the units of one character to a scalar value.
///
/// The first unit decides the rule. A normal unit is its own scalar value and
/// anything after it is ignored. A surrogate is combined with the unit right
/// after it as `0x10000 + (high - 0xD800) * 0x400 + (low - 0xDC00)`, with no
/// check that the second unit is a low surrogate. Returns 0 for an empty slice
/// or a surrogate with nothing after it.
#[must_use]
pub fn resolve(units: &[u16]) -> u32 {
    let Some(&first) = units.first() else {
        return 0;
    };
    match (classify(first), units.get(1)) {
        (Utf16Role::Normal, _) => u32::from(first),
        (Utf16Role::Surrogate, Some(&low)) => {
            let high = u32::from(first - SURROGATE_START);
            // Smallest result is `0x10000 - 0xDC00`, so unsigned math never wraps.
            0x10000 - LOW_SURROGATE_START + (high << 10) + u32::from(low)
        }
        (Utf16Role::Surrogate, None) => 0,
    }
}

/// The 16-bit transformation format, big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16;

impl Encoding for Utf16 {
    type Unit = u16;
    type Role = Utf16Role;

    const NAME: &'static str = "utf16";

    #[inline]
    fn classify(unit: u16) -> Utf16Role {
        classify(unit)
    }

    fn disposition(role: Utf16Role) -> Disposition {
        match role {
            Utf16Role::Normal => Disposition::Start(1),
            Utf16Role::Surrogate => Disposition::Start(2),
        }
    }

    #[inline]
    fn resolve(units: &[u16]) -> u32 {
        resolve(units)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rstest::rstest;

    use super::*;

    #[test]
    fn surrogate_range_is_exact() {
        for unit in 0..=u16::MAX {
            let expected = if (0xD800..=0xDFFF).contains(&unit) {
                Utf16Role::Surrogate
            } else {
                Utf16Role::Normal
            };
            assert_eq!(classify(unit), expected, "unit {unit:#06x}");
        }
    }

    #[rstest]
    #[case(&[0x0041], 0x41)]
    #[case(&[0xFFFF], 0xFFFF)]
    #[case(&[0xD83D, 0xDE00], 0x1F600)]
    #[case(&[0xD800, 0xDC00], 0x10000)]
    #[case(&[0xDBFF, 0xDFFF], 0x10_FFFF)]
    #[case(&[], 0)]
    #[case(&[0x0041, 0x0042], 0x41)]
    #[case(&[0xFFFF, 0xD800], 0xFFFF)]
    #[case(&[0xD800], 0)]
    #[case(&[0xD83D, 0xDE00, 0x0041], 0x1F600)]
    fn resolve_units(#[case] units: &[u16], #[case] scalar: u32) {
        assert_eq!(resolve(units), scalar);
    }

    #[test]
    fn resolve_does_not_validate_low_half() {
        // A normal unit in the low position still goes through the formula.
        assert_eq!(resolve(&[0xD800, 0x0041]), 0x10000 + 0x41 - 0xDC00);
    }

    #[quickcheck_macros::quickcheck]
    fn resolves_std_encoding(ch: char) -> bool {
        let mut buf = [0_u16; 2];
        let units: Vec<u16> = ch.encode_utf16(&mut buf).to_vec();
        resolve(&units) == u32::from(ch)
    }

    #[quickcheck_macros::quickcheck]
    fn normal_first_unit_is_the_scalar(first: u16, rest: Vec<u16>) -> bool {
        let mut units = Vec::with_capacity(rest.len() + 1);
        units.push(first);
        units.extend(rest);
        classify(first) == Utf16Role::Surrogate || resolve(&units) == u32::from(first)
    }
}
