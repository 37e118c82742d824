use core::fmt;

/// A fixed-width integer read from the byte stream.
///
/// Multi-byte units are assembled big-endian: the first byte read is the most
/// significant.
pub trait CodeUnit: Copy + Eq + fmt::Debug + fmt::Binary + Into<u32> {
    /// Number of bytes one unit occupies in the stream.
    const BYTES: usize;

    /// Number of binary digits used when the unit is reported.
    const BITS: usize = Self::BYTES * 8;

    /// Most units a single character occupies in the format built on this
    /// unit.
    const MAX_SEQUENCE: usize;

    /// Assembles a unit from exactly [`Self::BYTES`] bytes.
    fn from_be_slice(bytes: &[u8]) -> Self;
}

impl CodeUnit for u8 {
    const BYTES: usize = 1;
    const MAX_SEQUENCE: usize = 4;

    #[inline]
    fn from_be_slice(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl CodeUnit for u16 {
    const BYTES: usize = 2;
    const MAX_SEQUENCE: usize = 2;

    #[inline]
    fn from_be_slice(bytes: &[u8]) -> Self {
        u16::from_be_bytes([bytes[0], bytes[1]])
    }
}
