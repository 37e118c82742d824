//! The seam between a concrete transformation format and the generic
//! accumulator in [`crate::decoder`].

use core::fmt;

use crate::unit::CodeUnit;

/// What the accumulator does with a unit, derived from its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Drop any pending content and move on.
    Skip,
    /// Report the unit as invalid and drop any pending content.
    Reject,
    /// Append the unit to the pending sequence without starting a character.
    Orphan,
    /// A character of the given number of units starts with this unit. The
    /// remaining units are taken from the stream as they are, without being
    /// classified.
    Start(usize),
}

/// A variable-width transformation format.
pub trait Encoding {
    /// The code unit type.
    type Unit: CodeUnit;
    /// The classification result for one unit.
    type Role: Copy + Eq + fmt::Debug;

    /// Human readable name, used in diagnostics.
    const NAME: &'static str;

    /// Classifies a single unit.
    fn classify(unit: Self::Unit) -> Self::Role;

    /// Maps a role to the accumulator action.
    fn disposition(role: Self::Role) -> Disposition;

    /// Resolves a complete unit sequence to its scalar value.
    fn resolve(units: &[Self::Unit]) -> u32;
}
