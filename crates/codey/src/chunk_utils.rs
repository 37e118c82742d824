//! Helpers for feeding byte payloads in pieces.

use alloc::vec::Vec;

/// Split `payload` into `parts` chunks of roughly equal size.
///
/// Unlike text chunking this deliberately ignores character boundaries: the
/// point is to cut multi-unit sequences apart.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Split `payload` at the given cut points. Each split is reduced modulo the
/// remaining length, so arbitrary values (e.g. from a fuzzer) are accepted.
#[must_use]
pub fn split_at_points<'a>(payload: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::with_capacity(splits.len() + 1);
    let mut rest = payload;
    for &split in splits {
        if rest.is_empty() {
            break;
        }
        let size = 1 + split % rest.len();
        let (head, tail) = rest.split_at(size);
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn produce_chunks_cuts_through_sequences() {
        let payload = "a€b".as_bytes();
        let chunks = produce_chunks(payload, 3);
        assert_eq!(
            chunks,
            vec![&[0x61, 0xE2][..], &[0x82, 0xAC][..], &[0x62][..]]
        );
        assert_eq!(chunks.concat(), payload);
    }

    #[test]
    fn split_points_wrap_around_remaining_length() {
        let payload = [1, 2, 3, 4, 5];
        let chunks = split_at_points(&payload, &[0, 1, 100]);
        assert_eq!(chunks, vec![&[1][..], &[2, 3][..], &[4][..], &[5][..]]);
        assert!(split_at_points(&[], &[3]).is_empty());
    }
}
