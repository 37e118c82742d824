use std::{num::NonZeroUsize, path::PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use codey::DecoderOptions;
use tracing::Level;

/// Bytes requested from the input per read.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(4096).unwrap();

/// Walk a file code unit by code unit and show how each character is encoded.
#[derive(Debug, Parser)]
#[command(name = "codey", version)]
pub struct Cli {
    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Decoding mode.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode file as UTF-8
    Utf8(DecodeArgs),
    /// Decode file as big-endian UTF-16
    Utf16(DecodeArgs),
}

/// Arguments shared by both decoding modes.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// File to decode
    pub file: PathBuf,

    /// Bytes read from the file at a time
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: NonZeroUsize,

    /// Forget partially read characters at every chunk boundary
    #[arg(long)]
    pub reset_per_chunk: bool,
}

impl Cli {
    /// Maximum level for the stderr log subscriber.
    #[must_use]
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

impl DecodeArgs {
    /// Decoder options selected by the flags.
    #[must_use]
    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions {
            reset_at_chunk_boundary: self.reset_per_chunk,
        }
    }
}
