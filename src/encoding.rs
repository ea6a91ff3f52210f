//! Encoding trait.

use crate::{
    algorithms::{Discard, Sink, SliceSink},
    errors::{Error, Result},
    integer::{Accumulator, BigEndianBytes},
};
use core::str;

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Padding policy of the Base64 and Base32 encoders.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Padding {
    /// Complete the final group with `=`.
    Padded,

    /// Omit the padding of the final group.
    Unpadded,
}

/// Letter case of the Base16 encoder.
///
/// The decoder accepts both.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Case {
    /// `0-9a-f`
    Lower,

    /// `0-9A-F`
    Upper,
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Encoder/decoder functions for a particular RFC 4648 encoding.
///
/// Implemented by [`Base64`](crate::Base64), [`Base64Url`](crate::Base64Url),
/// [`Base32`](crate::Base32), [`Base32Hex`](crate::Base32Hex) and
/// [`Base16`](crate::Base16). This trait is sealed:
///
/// ```compile_fail
/// use rfc4648::{Encoding, Padding};
///
/// struct Mine;
///
/// impl Encoding for Mine {
///     type Options = Padding;
///     const DEFAULT_OPTIONS: Padding = Padding::Padded;
///
///     fn encoded_len_with(len: usize, _: Padding) -> usize {
///         len
///     }
///
///     fn decoded_len_max(len: usize) -> usize {
///         len
///     }
///
///     fn encode_into(src: &[u8], dst: &mut [u8], _: Padding) {
///         dst.copy_from_slice(src)
///     }
///
///     fn decode_into<S>(_: &[u8], _: &mut S) -> rfc4648::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Encoding: sealed::Sealed {
    /// Encoder options: [`Padding`] or, for Base16, [`Case`].
    type Options: Copy + core::fmt::Debug + Eq;

    /// Options used by the encoding functions without a `_with` suffix.
    const DEFAULT_OPTIONS: Self::Options;

    /// Get the exact length of the text produced by encoding `len` bytes.
    fn encoded_len_with(len: usize, options: Self::Options) -> usize;

    /// Get an upper bound on the number of bytes decoded from `len` bytes of
    /// encoded text.
    fn decoded_len_max(len: usize) -> usize;

    /// Encode `src` into `dst`, which must be exactly
    /// [`Encoding::encoded_len_with`] bytes long.
    #[doc(hidden)]
    fn encode_into(src: &[u8], dst: &mut [u8], options: Self::Options);

    /// Decode `src`, pushing every decoded byte into `out`.
    #[doc(hidden)]
    fn decode_into<S: Sink>(src: &[u8], out: &mut S) -> Result<()>;

    /// Get the length of the text produced by encoding the given bytes with
    /// the default options.
    fn encoded_len(bytes: &[u8]) -> usize {
        Self::encoded_len_with(bytes.len(), Self::DEFAULT_OPTIONS)
    }

    /// Encode the input byte slice with the default options.
    ///
    /// Writes the result into the provided destination slice, returning an
    /// ASCII-encoded string value.
    fn encode<'a>(src: &[u8], dst: &'a mut [u8]) -> Result<&'a str> {
        Self::encode_with(src, dst, Self::DEFAULT_OPTIONS)
    }

    /// Encode the input byte slice with the given options.
    fn encode_with<'a>(src: &[u8], dst: &'a mut [u8], options: Self::Options) -> Result<&'a str> {
        let elen = Self::encoded_len_with(src.len(), options);
        let dst = dst.get_mut(..elen).ok_or(Error::BufferTooSmall)?;

        Self::encode_into(src, dst, options);
        debug_assert!(dst.is_ascii());

        Ok(
            // SAFETY: `dst` is fully written and contains only valid one-byte UTF-8 chars
            #[allow(unsafe_code)]
            unsafe {
                str::from_utf8_unchecked(dst)
            },
        )
    }

    /// Encode input byte slice into a [`String`] with the default options.
    #[cfg(feature = "alloc")]
    fn encode_string(input: &[u8]) -> String {
        Self::encode_string_with(input, Self::DEFAULT_OPTIONS)
    }

    /// Encode input byte slice into a [`String`] with the given options.
    #[cfg(feature = "alloc")]
    fn encode_string_with(input: &[u8], options: Self::Options) -> String {
        let mut dst = vec![0u8; Self::encoded_len_with(input.len(), options)];
        Self::encode_into(input, &mut dst, options);
        debug_assert!(dst.is_ascii());

        // SAFETY: `dst` is fully written and contains only valid one-byte UTF-8 chars
        #[allow(unsafe_code)]
        unsafe {
            String::from_utf8_unchecked(dst)
        }
    }

    /// Decode encoded text into the provided output buffer, returning a slice
    /// containing the decoded data.
    ///
    /// On error nothing is returned and whatever was already written into
    /// `dst` is zeroed.
    fn decode(src: impl AsRef<[u8]>, dst: &mut [u8]) -> Result<&[u8]> {
        let mut sink = SliceSink::new(dst);

        match Self::decode_into(src.as_ref(), &mut sink) {
            Ok(()) => Ok(sink.into_written()),
            Err(err) => {
                sink.wipe();
                Err(err)
            }
        }
    }

    /// Decode encoded text into a byte vector.
    #[cfg(feature = "alloc")]
    fn decode_vec(input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let input = input.as_ref();
        let mut output = vec![0u8; Self::decoded_len_max(input.len())];
        let len = Self::decode(input, &mut output)?.len();
        output.truncate(len);
        Ok(output)
    }

    /// Check the input decodes, without producing any output.
    fn validate(input: impl AsRef<[u8]>) -> Result<()> {
        Self::decode_into(input.as_ref(), &mut Discard)
    }

    /// Does the input decode without error?
    fn is_valid(input: impl AsRef<[u8]>) -> bool {
        Self::validate(input).is_ok()
    }

    /// Encode the big-endian representation of an integer with the default
    /// options, writing into `dst`.
    fn encode_int<T: BigEndianBytes>(value: T, dst: &mut [u8]) -> Result<&str> {
        Self::encode_with(value.to_be_bytes().as_ref(), dst, Self::DEFAULT_OPTIONS)
    }

    /// Encode the big-endian representation of an integer into a [`String`]
    /// with the default options.
    #[cfg(feature = "alloc")]
    fn encode_int_string<T: BigEndianBytes>(value: T) -> String {
        Self::encode_int_string_with(value, Self::DEFAULT_OPTIONS)
    }

    /// Encode the big-endian representation of an integer into a [`String`]
    /// with the given options.
    #[cfg(feature = "alloc")]
    fn encode_int_string_with<T: BigEndianBytes>(value: T, options: Self::Options) -> String {
        Self::encode_string_with(value.to_be_bytes().as_ref(), options)
    }

    /// Decode encoded text directly into a fixed-width integer.
    ///
    /// The decoded payload must be exactly as wide as `T`: wider payloads fail
    /// with [`Error::Overflow`], narrower ones with [`Error::InvalidLength`].
    fn decode_int<T: BigEndianBytes>(input: impl AsRef<[u8]>) -> Result<T> {
        let mut acc = Accumulator::new(T::BYTES);
        Self::decode_into(input.as_ref(), &mut acc)?;
        acc.finish()
    }
}
