//! Fixed-width integer support.

use crate::{
    algorithms::Sink,
    errors::{Error, Result},
};

mod sealed {
    pub trait Sealed {}
}

/// Conversion between a fixed-width integer and its big-endian bytes.
///
/// Implemented for the primitive integers from `u8`/`i8` to `u128`/`i128`
/// and sealed against wider types:
///
/// ```compile_fail
/// use rfc4648::BigEndianBytes;
///
/// #[derive(Copy, Clone)]
/// struct U256([u8; 32]);
///
/// impl BigEndianBytes for U256 {
///     const BYTES: usize = 32;
///     type Bytes = [u8; 32];
///
///     fn to_be_bytes(self) -> [u8; 32] {
///         self.0
///     }
///
///     fn from_be_slice(bytes: &[u8]) -> Option<Self> {
///         bytes.try_into().ok().map(U256)
///     }
/// }
/// ```
pub trait BigEndianBytes: sealed::Sealed + Copy + Sized {
    /// Width of the integer in bytes.
    const BYTES: usize;

    /// Big-endian byte array.
    type Bytes: AsRef<[u8]>;

    /// Big-endian representation of `self`.
    fn to_be_bytes(self) -> Self::Bytes;

    /// Rebuild an integer from exactly [`BigEndianBytes::BYTES`] big-endian
    /// bytes.
    fn from_be_slice(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_big_endian_bytes {
    ($($int:ty),+) => {
        $(
            impl sealed::Sealed for $int {}

            impl BigEndianBytes for $int {
                const BYTES: usize = core::mem::size_of::<$int>();
                type Bytes = [u8; core::mem::size_of::<$int>()];

                #[inline]
                fn to_be_bytes(self) -> Self::Bytes {
                    <$int>::to_be_bytes(self)
                }

                #[inline]
                fn from_be_slice(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$int>::from_be_bytes)
                }
            }
        )+
    };
}

impl_big_endian_bytes!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// Widest supported integer, in bytes.
const MAX_BYTES: usize = 16;

/// Collects decoded bytes for an integer of `width` bytes.
pub(crate) struct Accumulator {
    buf: [u8; MAX_BYTES],
    len: usize,
    width: usize,
}

impl Accumulator {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            buf: [0u8; MAX_BYTES],
            len: 0,
            width,
        }
    }

    /// Convert the accumulated bytes, which must fill the whole width.
    pub(crate) fn finish<T: BigEndianBytes>(self) -> Result<T> {
        if self.len != self.width {
            return Err(Error::InvalidLength);
        }

        T::from_be_slice(&self.buf[..self.len]).ok_or(Error::InvalidLength)
    }
}

impl Sink for Accumulator {
    #[inline]
    fn write(&mut self, byte: u8) -> Result<()> {
        if self.len == self.width {
            return Err(Error::Overflow);
        }

        let slot = self.buf.get_mut(self.len).ok_or(Error::Overflow)?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }
}
