use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::test_count;
use crate::{
    DecodeEvent, DecoderOptions, Utf8Decoder, Utf16Decoder,
    chunk_utils::{produce_chunks, split_at_points},
};

fn decode_chunked_utf8(chunks: &[&[u8]]) -> Vec<DecodeEvent<u8>> {
    let mut decoder = Utf8Decoder::default();
    let mut events = Vec::new();
    for chunk in chunks {
        events.extend(decoder.feed(chunk));
    }
    events.extend(decoder.finish());
    events
}

fn decode_chunked_utf16(chunks: &[&[u8]]) -> Vec<DecodeEvent<u16>> {
    let mut decoder = Utf16Decoder::default();
    let mut events = Vec::new();
    for chunk in chunks {
        events.extend(decoder.feed(chunk));
    }
    events.extend(decoder.finish());
    events
}

/// Property: feeding arbitrary bytes in arbitrary chunk sizes yields exactly
/// the events of a single feed.
#[test]
fn partition_invariance_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, splits: Vec<usize>) -> bool {
        let chunks = split_at_points(&bytes, &splits);
        decode_chunked_utf8(&chunks) == Utf8Decoder::decode_all(DecoderOptions::default(), &bytes)
            && decode_chunked_utf16(&chunks)
                == Utf16Decoder::decode_all(DecoderOptions::default(), &bytes)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, Vec<usize>) -> bool);
}

/// Every way of cutting mixed text into equal parts decodes the same.
#[test]
fn equal_parts_decode_the_same() {
    let text = "héllo wörld €5 😀\n";
    let utf8 = text.as_bytes();
    let utf16: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
    let expected8 = Utf8Decoder::decode_all(DecoderOptions::default(), utf8);
    let expected16 = Utf16Decoder::decode_all(DecoderOptions::default(), &utf16);

    for parts in 1..=utf8.len() {
        assert_eq!(decode_chunked_utf8(&produce_chunks(utf8, parts)), expected8, "{parts} parts");
    }
    for parts in 1..=utf16.len() {
        assert_eq!(
            decode_chunked_utf16(&produce_chunks(&utf16, parts)),
            expected16,
            "{parts} parts"
        );
    }
}

/// Property: a zero byte never shows up in any reported line.
#[test]
fn zero_byte_never_reported_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let events = Utf8Decoder::decode_all(DecoderOptions::default(), &bytes);
        // Zero bytes are only ever taken as trailing bytes of a sequence.
        events.iter().all(|event| match event {
            DecodeEvent::Char(ch) => ch.units[0] != 0,
            DecodeEvent::Invalid(invalid) => invalid.unit != 0,
            DecodeEvent::Dropped { .. } => true,
        })
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
