/// Configuration options for [`StreamDecoder`](crate::StreamDecoder).
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Whether to forget partial state at the end of every fed chunk.
    ///
    /// By default a character whose units straddle two chunks is assembled
    /// across the feeds, so the output does not depend on how the input was
    /// split. When `true`, each chunk is decoded on its own: a pending
    /// sequence or half of a 16-bit unit left at the end of a chunk is
    /// dropped, and the next chunk starts from a clean state. Feeding
    /// `[0xC3]` then `[0xA9]` in this mode yields an orphan continuation
    /// instead of `U+E9`.
    ///
    /// # Default
    ///
    /// `false`
    pub reset_at_chunk_boundary: bool,
}
