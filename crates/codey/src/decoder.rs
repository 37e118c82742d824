//! The accumulator: a streaming state machine that turns fed byte chunks into
//! decoded characters.
//!
//! State kept between units
//! - `pending`: the units of the character being assembled. It is either
//!   empty, a prefix of one multi-unit sequence, or a run of orphan
//!   continuation units seen while no sequence was active. It is cleared in
//!   place after every hand-off so its allocation is reused.
//! - `expected`: the total unit count of the active sequence, or 0 when no
//!   sequence is active. While it is non-zero, units are appended without
//!   being classified.
//! - `unread`: bytes that belong to the stream but have not been turned into
//!   units yet. This holds half of a 16-bit unit split across chunks, or the
//!   tail of a chunk whose iterator was dropped early.
//! - `ready`: events produced but not yet handed out.
//!
//! Chunk boundaries
//! - By default all of the above carries across `feed` calls, so splitting
//!   the input differently never changes the output.
//! - With [`DecoderOptions::reset_at_chunk_boundary`] the pending sequence
//!   and any partial unit are dropped once a chunk has been fully read or its
//!   iterator has been dropped.

use alloc::{
    collections::{VecDeque, vec_deque},
    vec::Vec,
};
use core::marker::PhantomData;

use crate::{
    encoding::{Disposition, Encoding},
    error::InvalidUnit,
    options::DecoderOptions,
    unit::CodeUnit,
};

/// One resolved character together with the units it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedChar<U> {
    /// The code units, in stream order.
    pub units: Vec<U>,
    /// The resolved scalar value. Not range checked.
    pub scalar: u32,
    /// Byte offset of the first unit in the stream.
    pub offset: u64,
}

impl<U> DecodedChar<U> {
    /// The scalar as a `char`, if it is a valid Unicode scalar value.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.scalar)
    }
}

/// An event produced while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum DecodeEvent<U> {
    /// A complete character.
    Char(DecodedChar<U>),
    /// A unit that cannot start or continue a character.
    Invalid(InvalidUnit),
    /// Pending units discarded without being resolved: orphan continuation
    /// units, or a sequence cut short by the end of the stream or a chunk
    /// boundary.
    Dropped {
        /// The discarded units.
        units: Vec<U>,
        /// Byte offset of the first discarded unit.
        offset: u64,
    },
}

/// Streaming decoder generic over the transformation format.
///
/// Feed it byte chunks with [`feed`](Self::feed) and drain the returned
/// iterator, then call [`finish`](Self::finish) to flush whatever is left.
#[derive(Debug)]
pub struct StreamDecoder<E: Encoding> {
    options: DecoderOptions,
    pending: Vec<E::Unit>,
    pending_offset: u64,
    expected: usize,
    unread: VecDeque<u8>,
    ready: VecDeque<DecodeEvent<E::Unit>>,
    position: u64,
    encoding: PhantomData<fn() -> E>,
}

impl<E: Encoding> Default for StreamDecoder<E> {
    fn default() -> Self {
        Self::new(DecoderOptions::default())
    }
}

impl<E: Encoding> StreamDecoder<E> {
    /// Creates a decoder at the start of a stream.
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self {
            options,
            pending: Vec::with_capacity(<E::Unit as CodeUnit>::MAX_SEQUENCE),
            pending_offset: 0,
            expected: 0,
            unread: VecDeque::new(),
            ready: VecDeque::new(),
            position: 0,
            encoding: PhantomData,
        }
    }

    /// Decodes a whole byte slice in one go.
    #[must_use]
    pub fn decode_all(options: DecoderOptions, bytes: &[u8]) -> Vec<DecodeEvent<E::Unit>> {
        let mut decoder = Self::new(options);
        let mut events: Vec<_> = decoder.feed(bytes).collect();
        events.extend(decoder.finish());
        events
    }

    /// The options this decoder was created with.
    #[must_use]
    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Number of stream bytes turned into units (or discarded) so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Feeds a chunk of input and iterates over the events it completes.
    ///
    /// Dropping the iterator early keeps the unread rest of the chunk; it is
    /// decoded first on the next call to `feed` or `finish`. In reset mode the
    /// rest is decoded when the iterator is dropped and the chunk boundary is
    /// applied right away; the events it produced are handed out by the next
    /// call to `feed` or `finish`.
    pub fn feed<'a>(&'a mut self, chunk: &'a [u8]) -> Feed<'a, E> {
        Feed {
            decoder: self,
            chunk,
            pos: 0,
            exhausted: false,
        }
    }

    /// Ends the stream.
    ///
    /// Unread bytes are decoded, then any pending units and any partial unit
    /// are discarded. Discarded units are reported as
    /// [`DecodeEvent::Dropped`]; a truncated sequence is never an error.
    #[must_use]
    pub fn finish(mut self) -> Finished<E::Unit> {
        let mut pos = 0;
        while let Some((unit, offset)) = self.take_unit(&[], &mut pos) {
            self.accept(unit, offset);
        }
        self.discard_partial_unit();
        self.drop_pending();
        Finished {
            events: self.ready.into_iter(),
        }
    }

    /// Reads the next whole unit from `unread` followed by `chunk[*pos..]`.
    fn take_unit(&mut self, chunk: &[u8], pos: &mut usize) -> Option<(E::Unit, u64)> {
        let width = <E::Unit as CodeUnit>::BYTES;
        let available = self.unread.len() + chunk.len().saturating_sub(*pos);
        if available < width {
            return None;
        }

        let mut bytes = [0_u8; 4];
        for slot in &mut bytes[..width] {
            *slot = match self.unread.pop_front() {
                Some(b) => b,
                None => {
                    let b = chunk[*pos];
                    *pos += 1;
                    b
                }
            };
        }

        let offset = self.position;
        self.position += width as u64;
        Some((E::Unit::from_be_slice(&bytes[..width]), offset))
    }

    /// Runs one unit through the state machine.
    fn accept(&mut self, unit: E::Unit, offset: u64) {
        if self.expected > 0 {
            self.pending.push(unit);
            if self.pending.len() >= self.expected {
                self.complete();
            }
            return;
        }

        match E::disposition(E::classify(unit)) {
            Disposition::Skip => self.drop_pending(),
            Disposition::Reject => {
                self.drop_pending();
                self.ready.push_back(DecodeEvent::Invalid(InvalidUnit {
                    encoding: E::NAME,
                    unit: unit.into(),
                    offset,
                }));
            }
            Disposition::Orphan => {
                if self.pending.is_empty() {
                    self.pending_offset = offset;
                }
                self.pending.push(unit);
            }
            Disposition::Start(len) => {
                self.drop_pending();
                self.pending_offset = offset;
                self.pending.push(unit);
                self.expected = len;
                if len <= 1 {
                    self.complete();
                }
            }
        }
    }

    /// Hands the pending sequence to the resolver and resets it.
    fn complete(&mut self) {
        let scalar = E::resolve(&self.pending);
        let units = self.pending.drain(..).collect();
        self.expected = 0;
        self.ready.push_back(DecodeEvent::Char(DecodedChar {
            units,
            scalar,
            offset: self.pending_offset,
        }));
    }

    fn drop_pending(&mut self) {
        self.expected = 0;
        if self.pending.is_empty() {
            return;
        }
        let units = self.pending.drain(..).collect();
        self.ready.push_back(DecodeEvent::Dropped {
            units,
            offset: self.pending_offset,
        });
    }

    fn discard_partial_unit(&mut self) {
        self.position += self.unread.len() as u64;
        self.unread.clear();
    }

    /// Called once a chunk has been read up to its last whole unit.
    fn end_of_chunk(&mut self, tail: &[u8]) {
        self.unread.extend(tail.iter().copied());
        if self.options.reset_at_chunk_boundary {
            self.discard_partial_unit();
            self.drop_pending();
        }
    }
}

/// Iterator over the events completed by one fed chunk.
///
/// Created by [`StreamDecoder::feed`].
#[derive(Debug)]
pub struct Feed<'a, E: Encoding> {
    decoder: &'a mut StreamDecoder<E>,
    chunk: &'a [u8],
    pos: usize,
    exhausted: bool,
}

impl<E: Encoding> Iterator for Feed<'_, E> {
    type Item = DecodeEvent<E::Unit>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.decoder.ready.pop_front() {
                return Some(event);
            }
            if self.exhausted {
                return None;
            }
            match self.decoder.take_unit(self.chunk, &mut self.pos) {
                Some((unit, offset)) => self.decoder.accept(unit, offset),
                None => {
                    self.exhausted = true;
                    let chunk = self.chunk;
                    let tail = chunk.get(self.pos..).unwrap_or_default();
                    self.pos = chunk.len();
                    self.decoder.end_of_chunk(tail);
                }
            }
        }
    }
}

impl<E: Encoding> Drop for Feed<'_, E> {
    fn drop(&mut self) {
        if self.exhausted {
            return;
        }
        if self.decoder.options.reset_at_chunk_boundary {
            // The boundary must still be applied, so the rest of the chunk is
            // decoded now and its events wait in the outbox.
            while let Some((unit, offset)) = self.decoder.take_unit(self.chunk, &mut self.pos) {
                self.decoder.accept(unit, offset);
            }
            let chunk = self.chunk;
            let tail = chunk.get(self.pos..).unwrap_or_default();
            self.decoder.end_of_chunk(tail);
        } else {
            let chunk = self.chunk;
            let tail = chunk.get(self.pos..).unwrap_or_default();
            self.decoder.unread.extend(tail.iter().copied());
        }
    }
}

/// Iterator over the events left when the stream ends.
///
/// Created by [`StreamDecoder::finish`].
#[derive(Debug)]
pub struct Finished<U> {
    events: vec_deque::IntoIter<DecodeEvent<U>>,
}

impl<U> Iterator for Finished<U> {
    type Item = DecodeEvent<U>;

    fn next(&mut self) -> Option<Self::Item> {
        self.events.next()
    }
}
