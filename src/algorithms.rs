//! Bit-packing engines shared by the codecs.
//!
//! Every engine is a set of free functions parameterized by an
//! [`AlphabetTable`](crate::alphabet::AlphabetTable): the Base64 engine serves
//! both Base64 alphabets and the Base32 engine both Base32 alphabets.
//!
//! Decoders never write to a buffer directly. They push bytes into a [`Sink`],
//! which lets decoding, validation and integer decoding share one code path
//! and therefore accept exactly the same inputs.

pub(crate) mod base16;
pub(crate) mod base32;
pub(crate) mod base64;
pub(crate) mod group;

use crate::errors::{Error, Result};
use zeroize::Zeroize;

/// Destination for decoded bytes.
pub trait Sink {
    /// Append one decoded byte.
    fn write(&mut self, byte: u8) -> Result<()>;
}

/// Writes decoded bytes into a caller-provided slice.
pub(crate) struct SliceSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceSink<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// The written prefix of the buffer.
    pub(crate) fn into_written(self) -> &'a [u8] {
        let buf: &'a [u8] = self.buf;
        &buf[..self.len]
    }

    /// Erase everything written so far.
    pub(crate) fn wipe(&mut self) {
        self.buf[..self.len].zeroize();
        self.len = 0;
    }
}

impl Sink for SliceSink<'_> {
    #[inline]
    fn write(&mut self, byte: u8) -> Result<()> {
        let slot = self.buf.get_mut(self.len).ok_or(Error::BufferTooSmall)?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }
}

/// Drops decoded bytes; used for validation.
pub(crate) struct Discard;

impl Sink for Discard {
    #[inline(always)]
    fn write(&mut self, _: u8) -> Result<()> {
        Ok(())
    }
}
