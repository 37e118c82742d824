#![no_main]

use arbitrary::Arbitrary;
use codey::{
    DecodeEvent, DecoderOptions, Encoding, StreamDecoder, Utf8, Utf16, chunk_utils::split_at_points,
    report,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    splits: Vec<usize>,
    reset_at_chunk_boundary: bool,
}

fn decode_chunked<E: Encoding>(chunks: &[&[u8]], options: DecoderOptions) -> Vec<DecodeEvent<E::Unit>> {
    let mut decoder = StreamDecoder::<E>::new(options);
    let mut events = Vec::new();
    for chunk in chunks {
        events.extend(decoder.feed(chunk));
    }
    events.extend(decoder.finish());
    events
}

fn check<E: Encoding>(input: &Input) {
    let chunks = split_at_points(&input.bytes, &input.splits);
    let options = DecoderOptions {
        reset_at_chunk_boundary: input.reset_at_chunk_boundary,
    };
    let events = decode_chunked::<E>(&chunks, options);

    // Events never claim more bytes than were fed; zero fillers claim none.
    let accounted: usize = events
        .iter()
        .map(|event| match event {
            DecodeEvent::Char(ch) => ch.units.len(),
            DecodeEvent::Invalid(_) => 1,
            DecodeEvent::Dropped { units, .. } => units.len(),
        })
        .sum::<usize>()
        * size_of::<E::Unit>();
    assert!(accounted <= input.bytes.len());

    if !input.reset_at_chunk_boundary {
        let whole = StreamDecoder::<E>::decode_all(options, &input.bytes);
        assert_eq!(events, whole);
    }

    let mut out = String::new();
    report::write_events(&mut out, &events).unwrap();
}

fuzz_target!(|input: Input| {
    check::<Utf8>(&input);
    check::<Utf16>(&input);
});
