//! Serde support: byte buffers as encoded text.
//!
//! Each submodule is meant for `#[serde(with = "...")]` and uses its codec's
//! default options when serializing.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Session {
//!     #[serde(with = "rfc4648::serde::base64url")]
//!     token: Vec<u8>,
//!
//!     #[serde(with = "rfc4648::serde::base32")]
//!     secret: Vec<u8>,
//! }
//! ```

use crate::{Base16, Base32, Base32Hex, Base64, Base64Url, Encoding};
use ::serde::{de, Deserialize, Deserializer, Serializer};
use alloc::{string::String, vec::Vec};

fn serialize_with<E: Encoding, S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&E::encode_string(bytes))
}

fn deserialize_with<'de, E: Encoding, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    E::decode_vec(encoded).map_err(de::Error::custom)
}

macro_rules! codec_module {
    ($name:ident, $codec:ty, $doc:expr) => {
        #[doc = $doc]
        pub mod $name {
            use super::*;

            /// Serialize bytes as an encoded string.
            pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
            where
                T: AsRef<[u8]> + ?Sized,
                S: Serializer,
            {
                serialize_with::<$codec, S>(value.as_ref(), serializer)
            }

            /// Deserialize bytes from an encoded string.
            pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserialize_with::<$codec, D>(deserializer)
            }
        }
    };
}

codec_module!(base64, Base64, "Padded standard Base64.");
codec_module!(base64url, Base64Url, "Unpadded URL-safe Base64.");
codec_module!(base32, Base32, "Padded standard Base32.");
codec_module!(base32hex, Base32Hex, "Padded Base32 with the Extended Hex alphabet.");
codec_module!(base16, Base16, "Lower case Base16.");
