use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that abort a decode run.
#[derive(Error, Debug)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// The path given on the command line.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Reading from the input failed part way through.
    #[error("read failed after {offset} bytes: {source}")]
    Read {
        /// Bytes successfully read before the failure.
        offset: u64,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Writing the report failed.
    #[error("cannot write report: {0}")]
    Write(#[from] io::Error),
}
