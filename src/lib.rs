#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![deny(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! # Supported encodings
//!
//! | type          | RFC 4648 | alphabet          | default encoding | decoder                     |
//! |---------------|----------|-------------------|------------------|-----------------------------|
//! | [`Base64`]    | §4       | `A-Za-z0-9+/`     | padded           | padding required            |
//! | [`Base64Url`] | §5       | `A-Za-z0-9-_`     | unpadded         | padding optional            |
//! | [`Base32`]    | §6       | `A-Z2-7`          | padded           | padding optional, any case  |
//! | [`Base32Hex`] | §7       | `0-9A-V`          | padded           | padding optional, any case  |
//! | [`Base16`]    | §8       | `0-9a-f`          | lower case       | any case, optional `0x`     |
//!
//! All decoders skip spaces, tabs, CR and LF between groups (Base16: anywhere).
//!
//! # Usage
//!
#![cfg_attr(feature = "alloc", doc = "```")]
#![cfg_attr(not(feature = "alloc"), doc = "```ignore")]
//! use rfc4648::{Base32, Base64Url, Encoding, Padding};
//!
//! let encoded = Base32::encode_string(b"foobar");
//! assert_eq!(encoded, "MZXW6YTBOI======");
//! assert_eq!(Base32::decode_vec("mzxw6ytboi").unwrap(), b"foobar");
//!
//! let token = Base64Url::encode_string_with(&[0xfb, 0xff], Padding::Padded);
//! assert_eq!(token, "-_8=");
//! assert!(Base64Url::is_valid("-_8"));
//! ```
//!
//! ## Without an allocator
//!
//! ```
//! use rfc4648::{Base16, Case, Encoding};
//!
//! let mut buf = [0u8; 8];
//! let hex = Base16::encode_with(&[0xca, 0xfe], &mut buf, Case::Upper).unwrap();
//! assert_eq!(hex, "CAFE");
//!
//! let mut out = [0u8; 4];
//! assert_eq!(Base16::decode("0xCa fE", &mut out).unwrap(), &[0xca, 0xfe]);
//! ```
//!
//! ## Integers
//!
//! ```
//! use rfc4648::{Base64, Encoding, Error};
//!
//! let mut buf = [0u8; 8];
//! let encoded = Base64::encode_int(0xdead_beef_u32, &mut buf).unwrap();
//! assert_eq!(encoded, "3q2+7w==");
//!
//! assert_eq!(Base64::decode_int::<u32>(encoded), Ok(0xdead_beef));
//! assert_eq!(Base64::decode_int::<u16>(encoded), Err(Error::Overflow));
//! ```

#[cfg(feature = "alloc")]
#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod algorithms;
pub mod alphabet;
mod codecs;
mod encoding;
pub mod errors;
mod integer;

#[cfg(feature = "serde")]
pub mod serde;

pub use crate::{
    codecs::{Base16, Base32, Base32Hex, Base64, Base64Url},
    encoding::{Case, Encoding, Padding},
    errors::{Error, Result},
    integer::BigEndianBytes,
};
