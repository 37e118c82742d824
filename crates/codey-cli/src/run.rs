use std::{
    fs::File,
    io::{self, Read, Write},
    num::NonZeroUsize,
};

use codey::{DecodeEvent, DecoderOptions, Encoding, StreamDecoder, report};
use tracing::{debug, info, trace};

use crate::{cli::DecodeArgs, error::CliError};

/// Counters collected over one run, logged when it ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Bytes read from the input.
    pub bytes: u64,
    /// Characters reported.
    pub chars: u64,
    /// Invalid units reported.
    pub invalid: u64,
    /// Units discarded without a report line.
    pub dropped: u64,
}

impl Summary {
    fn record<U>(&mut self, event: &DecodeEvent<U>) {
        match event {
            DecodeEvent::Char(_) => self.chars += 1,
            DecodeEvent::Invalid(_) => self.invalid += 1,
            DecodeEvent::Dropped { units, .. } => self.dropped += units.len() as u64,
        }
    }
}

/// Opens the file named in `args` and decodes it with encoding `E`.
///
/// # Errors
///
/// Fails if the file cannot be opened or read, or if writing to `out` fails.
pub fn decode_file<E: Encoding>(args: &DecodeArgs, out: &mut impl Write) -> Result<Summary, CliError> {
    let file = File::open(&args.file).map_err(|source| CliError::Open {
        path: args.file.clone(),
        source,
    })?;
    info!(path = %args.file.display(), encoding = E::NAME, "decoding");
    decode_stream::<E>(file, args.chunk_size, args.decoder_options(), out)
}

/// Reads `reader` in chunks of `chunk_size` bytes, feeding each chunk to the
/// decoder and writing one report line per reported event.
///
/// # Errors
///
/// Fails on the first read or write error; the report written so far is
/// flushed only on success.
pub fn decode_stream<E: Encoding>(
    mut reader: impl Read,
    chunk_size: NonZeroUsize,
    options: DecoderOptions,
    out: &mut impl Write,
) -> Result<Summary, CliError> {
    let mut decoder = StreamDecoder::<E>::new(options);
    debug!(
        chunk_size = chunk_size.get(),
        reset_per_chunk = decoder.options().reset_at_chunk_boundary,
        "decoder ready"
    );
    let mut summary = Summary::default();
    let mut buf = vec![0_u8; chunk_size.get()];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(CliError::Read {
                    offset: summary.bytes,
                    source,
                });
            }
        };
        trace!(len = n, offset = summary.bytes, "read chunk");
        summary.bytes += n as u64;
        for event in decoder.feed(&buf[..n]) {
            emit(&event, &mut summary, out)?;
        }
    }

    for event in decoder.finish() {
        emit(&event, &mut summary, out)?;
    }
    out.flush()?;

    info!(
        bytes = summary.bytes,
        chars = summary.chars,
        invalid = summary.invalid,
        dropped = summary.dropped,
        "done"
    );
    Ok(summary)
}

fn emit<U: codey::CodeUnit>(
    event: &DecodeEvent<U>,
    summary: &mut Summary,
    out: &mut impl Write,
) -> Result<(), CliError> {
    summary.record(event);
    if let DecodeEvent::Dropped { units, offset } = event {
        debug!(offset, ?units, "discarded units without a character");
    }
    if let Some(line) = report::line(event) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
