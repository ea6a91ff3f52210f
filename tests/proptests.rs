//! Property-based tests.

#![cfg(feature = "alloc")]

use proptest::{collection::vec, prelude::*, sample::select};
use rfc4648::{Base16, Base32, Base32Hex, Base64, Base64Url, Case, Encoding, Padding};

/// Interleave whitespace between the groups of `encoded`.
fn with_whitespace(encoded: &str, group: usize, separators: &[&str]) -> String {
    let mut out = String::new();

    for (i, chunk) in encoded.as_bytes().chunks(group).enumerate() {
        out.push_str(separators[i % separators.len()]);
        out.push_str(core::str::from_utf8(chunk).unwrap());
    }

    out.push_str(separators[0]);
    out
}

fn whitespace() -> impl Strategy<Value = Vec<&'static str>> {
    vec(select(vec!["", " ", "\t", "\r\n", "\n", "  \n\t"]), 1..8)
}

fn equal_length_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (0usize..48).prop_flat_map(|n| (vec(any::<u8>(), n), vec(any::<u8>(), n)))
}

proptest! {
    #[test]
    fn round_trip(bytes in any::<Vec<u8>>()) {
        prop_assert_eq!(Base64::decode_vec(Base64::encode_string(&bytes)), Ok(bytes.clone()));
        prop_assert_eq!(Base64Url::decode_vec(Base64Url::encode_string(&bytes)), Ok(bytes.clone()));
        prop_assert_eq!(Base32::decode_vec(Base32::encode_string(&bytes)), Ok(bytes.clone()));
        prop_assert_eq!(Base32Hex::decode_vec(Base32Hex::encode_string(&bytes)), Ok(bytes.clone()));
        prop_assert_eq!(Base16::decode_vec(Base16::encode_string(&bytes)), Ok(bytes));
    }

    #[test]
    fn padding_equivalence(bytes in any::<Vec<u8>>()) {
        for padding in [Padding::Padded, Padding::Unpadded] {
            prop_assert_eq!(
                Base64Url::decode_vec(Base64Url::encode_string_with(&bytes, padding)),
                Ok(bytes.clone())
            );
            prop_assert_eq!(
                Base32::decode_vec(Base32::encode_string_with(&bytes, padding)),
                Ok(bytes.clone())
            );
            prop_assert_eq!(
                Base32Hex::decode_vec(Base32Hex::encode_string_with(&bytes, padding)),
                Ok(bytes.clone())
            );
        }
    }

    #[test]
    fn encoded_len_is_exact(bytes in any::<Vec<u8>>()) {
        prop_assert_eq!(Base64::encode_string(&bytes).len(), Base64::encoded_len(&bytes));
        prop_assert_eq!(Base32::encode_string(&bytes).len(), Base32::encoded_len(&bytes));
        prop_assert_eq!(Base16::encode_string(&bytes).len(), Base16::encoded_len(&bytes));
        prop_assert_eq!(Base64::encoded_len(&bytes), bytes.len().div_ceil(3) * 4);
        prop_assert_eq!(Base32::encoded_len(&bytes), bytes.len().div_ceil(5) * 8);
        prop_assert_eq!(Base16::encoded_len(&bytes), bytes.len() * 2);
    }

    #[test]
    fn case_insensitive_decoders(bytes in any::<Vec<u8>>()) {
        let base32 = Base32::encode_string(&bytes);
        let base32hex = Base32Hex::encode_string(&bytes);
        let base16 = Base16::encode_string_with(&bytes, Case::Upper);

        for encoded in [base32.to_ascii_lowercase(), base32.to_ascii_uppercase()] {
            prop_assert_eq!(Base32::decode_vec(encoded), Ok(bytes.clone()));
        }
        for encoded in [base32hex.to_ascii_lowercase(), base32hex.to_ascii_uppercase()] {
            prop_assert_eq!(Base32Hex::decode_vec(encoded), Ok(bytes.clone()));
        }
        for encoded in [base16.to_ascii_lowercase(), base16.to_ascii_uppercase()] {
            prop_assert_eq!(Base16::decode_vec(encoded), Ok(bytes.clone()));
        }
    }

    #[test]
    fn base64_is_case_sensitive(bytes in vec(any::<u8>(), 3..64)) {
        let encoded = Base64::encode_string(&bytes);
        let swapped: String = encoded
            .chars()
            .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
            .collect();

        if swapped != encoded {
            prop_assert_ne!(Base64::decode_vec(&swapped), Ok(bytes.clone()));
            prop_assert_ne!(Base64Url::decode_vec(&swapped), Ok(bytes));
        }
    }

    #[test]
    fn whitespace_between_groups(bytes in any::<Vec<u8>>(), separators in whitespace()) {
        let base64 = with_whitespace(&Base64::encode_string(&bytes), 4, &separators);
        let base32 = with_whitespace(&Base32::encode_string(&bytes), 8, &separators);
        let base32hex = with_whitespace(&Base32Hex::encode_string(&bytes), 8, &separators);
        let base16 = with_whitespace(&Base16::encode_string(&bytes), 1, &separators);

        prop_assert_eq!(Base64::decode_vec(base64), Ok(bytes.clone()));
        prop_assert_eq!(Base32::decode_vec(base32), Ok(bytes.clone()));
        prop_assert_eq!(Base32Hex::decode_vec(base32hex), Ok(bytes.clone()));
        prop_assert_eq!(Base16::decode_vec(base16), Ok(bytes));
    }

    #[test]
    fn base32hex_preserves_order((x, y) in equal_length_pair()) {
        let ex = Base32Hex::encode_string_with(&x, Padding::Unpadded);
        let ey = Base32Hex::encode_string_with(&y, Padding::Unpadded);
        prop_assert_eq!(x.cmp(&y), ex.cmp(&ey));
    }

    #[test]
    fn validation_agrees_with_decoding(text in "[A-Za-z0-9+/=_\\- \n]{0,24}") {
        prop_assert_eq!(Base64::is_valid(&text), Base64::decode_vec(&text).is_ok());
        prop_assert_eq!(Base64Url::is_valid(&text), Base64Url::decode_vec(&text).is_ok());
        prop_assert_eq!(Base32::is_valid(&text), Base32::decode_vec(&text).is_ok());
        prop_assert_eq!(Base32Hex::is_valid(&text), Base32Hex::decode_vec(&text).is_ok());
        prop_assert_eq!(Base16::is_valid(&text), Base16::decode_vec(&text).is_ok());
    }

    #[test]
    fn decode_never_panics(text in any::<Vec<u8>>()) {
        let _ = Base64::decode_vec(&text);
        let _ = Base64Url::decode_vec(&text);
        let _ = Base32::decode_vec(&text);
        let _ = Base32Hex::decode_vec(&text);
        let _ = Base16::decode_vec(&text);
        let _ = Base64::decode_int::<u64>(&text);
    }

    #[test]
    fn integer_round_trip(value in any::<u64>(), signed in any::<i32>()) {
        prop_assert_eq!(Base64::decode_int::<u64>(Base64::encode_int_string(value)), Ok(value));
        prop_assert_eq!(Base32Hex::decode_int::<u64>(Base32Hex::encode_int_string(value)), Ok(value));
        prop_assert_eq!(Base16::decode_int::<i32>(Base16::encode_int_string(signed)), Ok(signed));
        prop_assert_eq!(
            Base16::decode_vec(Base16::encode_int_string(value)),
            Ok(value.to_be_bytes().to_vec())
        );
    }
}

/// Equivalence with reference implementations.
mod equivalence {
    use super::*;
    use base64ct::{Base64 as Base64Ct, Base64UrlUnpadded as Base64UrlCt, Encoding as _};

    const RFC4648_PADDED: base32::Alphabet = base32::Alphabet::RFC4648 { padding: true };
    const RFC4648_UNPADDED: base32::Alphabet = base32::Alphabet::RFC4648 { padding: false };

    proptest! {
        /// Ensure standard Base64 matches `base64ct`.
        #[test]
        fn base64_equiv(bytes in any::<Vec<u8>>()) {
            let expected = Base64Ct::encode_string(&bytes);
            prop_assert_eq!(&Base64::encode_string(&bytes), &expected);
            prop_assert_eq!(Base64::decode_vec(&expected), Ok(bytes));
        }

        /// Ensure unpadded URL-safe Base64 matches `base64ct`.
        #[test]
        fn base64url_equiv(bytes in any::<Vec<u8>>()) {
            let expected = Base64UrlCt::encode_string(&bytes);
            prop_assert_eq!(&Base64Url::encode_string(&bytes), &expected);
            prop_assert_eq!(Base64Url::decode_vec(&expected), Ok(bytes));
        }

        /// Ensure Base32 matches the `base32` crate, padded and unpadded.
        #[test]
        fn base32_equiv(bytes in any::<Vec<u8>>()) {
            let padded = base32::encode(RFC4648_PADDED, &bytes);
            let unpadded = base32::encode(RFC4648_UNPADDED, &bytes);

            prop_assert_eq!(&Base32::encode_string(&bytes), &padded);
            prop_assert_eq!(&Base32::encode_string_with(&bytes, Padding::Unpadded), &unpadded);
            prop_assert_eq!(Base32::decode_vec(&padded), Ok(bytes.clone()));
            prop_assert_eq!(Base32::decode_vec(unpadded.to_lowercase()), Ok(bytes));
        }
    }
}
