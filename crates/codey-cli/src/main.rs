//! `codey`: decode a file as UTF-8 or UTF-16 and print every character with
//! the code units it is made of.

mod cli;
mod error;
mod run;

use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use clap::Parser;
use codey::{Utf8, Utf16};
use tracing::error;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut out = BufWriter::new(io::stdout().lock());
    let result = match &cli.command {
        Command::Utf8(args) => run::decode_file::<Utf8>(args, &mut out),
        Command::Utf16(args) => run::decode_file::<Utf16>(args, &mut out),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
