//! Streaming decoder for UTF-8 and big-endian UTF-16 byte streams.
//!
//! The decoder walks raw bytes one code unit at a time, classifies each unit,
//! collects the units that make up one character and resolves them to a
//! scalar value. Every resolved character is reported together with the
//! units it was built from, which makes the crate useful for inspecting how
//! text is laid out on disk.
//!
//! ```rust
//! use codey::{DecodeEvent, DecoderOptions, Utf8Decoder};
//!
//! let mut decoder = Utf8Decoder::new(DecoderOptions::default());
//! let events: Vec<_> = decoder.feed(&[0xE2, 0x82]).collect();
//! assert!(events.is_empty());
//!
//! let events: Vec<_> = decoder.feed(&[0xAC]).collect();
//! let DecodeEvent::Char(ch) = &events[0] else {
//!     panic!("expected a character");
//! };
//! assert_eq!(ch.scalar, 0x20AC);
//! assert_eq!(ch.units, [0xE2, 0x82, 0xAC]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod encoding;
mod error;
mod options;
pub mod report;
mod unit;
pub mod utf16;
pub mod utf8;

#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use decoder::{DecodeEvent, DecodedChar, Feed, Finished, StreamDecoder};
pub use encoding::{Disposition, Encoding};
pub use error::InvalidUnit;
pub use options::DecoderOptions;
pub use unit::CodeUnit;
pub use utf8::{Utf8, Utf8Role};
pub use utf16::{Utf16, Utf16Role};

/// A [`StreamDecoder`] over 8-bit code units.
pub type Utf8Decoder = StreamDecoder<Utf8>;

/// A [`StreamDecoder`] over big-endian 16-bit code units.
pub type Utf16Decoder = StreamDecoder<Utf16>;
