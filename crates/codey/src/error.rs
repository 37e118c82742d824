use thiserror::Error;

/// A unit that can neither start nor continue a character.
///
/// This is a diagnostic rather than a failure: the decoder reports it and
/// resumes with the next unit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("invalid {encoding} code unit {unit:#x} at byte offset {offset}")]
pub struct InvalidUnit {
    /// Name of the encoding the unit was read as.
    pub encoding: &'static str,
    /// The offending unit.
    pub unit: u32,
    /// Byte offset of the unit in the stream.
    pub offset: u64,
}
