//! Error types.

use core::fmt;

/// Result type with the `rfc4648` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Encoding and decoding errors.
///
/// Every decoding failure is final: the same input always fails the same way,
/// and no partially decoded output is ever handed back.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A byte outside the alphabet which is neither whitespace nor padding.
    InvalidSymbol,

    /// A group with the wrong number of symbols.
    ///
    /// Covers odd hex digit counts, unpadded standard Base64 groups, Base32
    /// groups which cannot hold a whole number of bytes, and decoded payloads
    /// narrower than the target integer.
    InvalidLength,

    /// Misplaced padding: a padding-only group, data after padding, or a
    /// padding run which does not complete its group.
    InvalidPadding,

    /// Decoded payload is wider than the target integer.
    Overflow,

    /// The provided output buffer is too small.
    BufferTooSmall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSymbol => f.write_str("invalid symbol in encoded input"),
            Error::InvalidLength => f.write_str("invalid encoded group length"),
            Error::InvalidPadding => f.write_str("invalid padding"),
            Error::Overflow => f.write_str("decoded value overflows target integer"),
            Error::BufferTooSmall => f.write_str("output buffer too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> std::io::Error {
        let kind = match err {
            Error::BufferTooSmall => std::io::ErrorKind::Other,
            _ => std::io::ErrorKind::InvalidData,
        };

        std::io::Error::new(kind, err)
    }
}
