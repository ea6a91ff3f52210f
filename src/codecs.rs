//! RFC 4648 codecs.

use crate::{
    algorithms::{base16, base32, base64, group::PaddingPolicy, Sink},
    alphabet::{BASE16_LOWER, BASE16_UPPER, BASE32_HEX, BASE32_STANDARD, BASE64_STANDARD, BASE64_URL},
    encoding::sealed::Sealed,
    errors::Result,
    Case, Encoding, Padding,
};

/// Standard Base64 (RFC 4648 Section 4).
///
/// Encodes with `=` padding by default. The decoder is strict: every group,
/// including the last, must be four symbols long counting padding.
///
/// ```text
/// [A-Z]      [a-z]      [0-9]      +     /
/// 0x41-0x5a, 0x61-0x7a, 0x30-0x39, 0x2b, 0x2f
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base64;

impl Sealed for Base64 {}

impl Encoding for Base64 {
    type Options = Padding;
    const DEFAULT_OPTIONS: Padding = Padding::Padded;

    fn encoded_len_with(len: usize, padding: Padding) -> usize {
        base64::encoded_len(len, padding)
    }

    fn encode_into(src: &[u8], dst: &mut [u8], padding: Padding) {
        base64::encode(&BASE64_STANDARD, src, dst, padding)
    }

    fn decode_into<S: Sink>(src: &[u8], out: &mut S) -> Result<()> {
        base64::decode(&BASE64_STANDARD, src, out, PaddingPolicy::Required)
    }

    fn decoded_len_max(len: usize) -> usize {
        base64::decoded_len_max(len)
    }
}

/// URL and filename safe Base64 (RFC 4648 Section 5).
///
/// Encodes *without* padding by default. The decoder accepts a final group of
/// two or three symbols with or without its padding.
///
/// ```text
/// [A-Z]      [a-z]      [0-9]      -     _
/// 0x41-0x5a, 0x61-0x7a, 0x30-0x39, 0x2d, 0x5f
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base64Url;

impl Sealed for Base64Url {}

impl Encoding for Base64Url {
    type Options = Padding;
    const DEFAULT_OPTIONS: Padding = Padding::Unpadded;

    fn encoded_len_with(len: usize, padding: Padding) -> usize {
        base64::encoded_len(len, padding)
    }

    fn encode_into(src: &[u8], dst: &mut [u8], padding: Padding) {
        base64::encode(&BASE64_URL, src, dst, padding)
    }

    fn decode_into<S: Sink>(src: &[u8], out: &mut S) -> Result<()> {
        base64::decode(&BASE64_URL, src, out, PaddingPolicy::Optional)
    }

    fn decoded_len_max(len: usize) -> usize {
        base64::decoded_len_max(len)
    }
}

/// Standard Base32 (RFC 4648 Section 6).
///
/// Encodes upper case with `=` padding by default; decodes either case, with
/// or without padding.
///
/// ```text
/// [A-Z]      [2-7]
/// 0x41-0x5a, 0x32-0x37
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base32;

impl Sealed for Base32 {}

impl Encoding for Base32 {
    type Options = Padding;
    const DEFAULT_OPTIONS: Padding = Padding::Padded;

    fn encoded_len_with(len: usize, padding: Padding) -> usize {
        base32::encoded_len(len, padding)
    }

    fn encode_into(src: &[u8], dst: &mut [u8], padding: Padding) {
        base32::encode(&BASE32_STANDARD, src, dst, padding)
    }

    fn decode_into<S: Sink>(src: &[u8], out: &mut S) -> Result<()> {
        base32::decode(&BASE32_STANDARD, src, out, PaddingPolicy::Optional)
    }

    fn decoded_len_max(len: usize) -> usize {
        base32::decoded_len_max(len)
    }
}

/// Base32 with the "Extended Hex" alphabet (RFC 4648 Section 7).
///
/// Unpadded encodings of equal-length inputs sort in the same order as the
/// inputs themselves.
///
/// ```text
/// [0-9]      [A-V]
/// 0x30-0x39, 0x41-0x56
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base32Hex;

impl Sealed for Base32Hex {}

impl Encoding for Base32Hex {
    type Options = Padding;
    const DEFAULT_OPTIONS: Padding = Padding::Padded;

    fn encoded_len_with(len: usize, padding: Padding) -> usize {
        base32::encoded_len(len, padding)
    }

    fn encode_into(src: &[u8], dst: &mut [u8], padding: Padding) {
        base32::encode(&BASE32_HEX, src, dst, padding)
    }

    fn decode_into<S: Sink>(src: &[u8], out: &mut S) -> Result<()> {
        base32::decode(&BASE32_HEX, src, out, PaddingPolicy::Optional)
    }

    fn decoded_len_max(len: usize) -> usize {
        base32::decoded_len_max(len)
    }
}

/// Base16, a.k.a. hexadecimal (RFC 4648 Section 8).
///
/// Encodes lower case by default. The decoder accepts any mix of cases, an
/// optional leading `0x`/`0X` and whitespace anywhere after it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base16;

impl Sealed for Base16 {}

impl Encoding for Base16 {
    type Options = Case;
    const DEFAULT_OPTIONS: Case = Case::Lower;

    fn encoded_len_with(len: usize, _: Case) -> usize {
        base16::encoded_len(len)
    }

    fn encode_into(src: &[u8], dst: &mut [u8], case: Case) {
        let table = match case {
            Case::Lower => &BASE16_LOWER,
            Case::Upper => &BASE16_UPPER,
        };

        base16::encode(table, src, dst)
    }

    fn decode_into<S: Sink>(src: &[u8], out: &mut S) -> Result<()> {
        base16::decode(&BASE16_LOWER, src, out)
    }

    fn decoded_len_max(len: usize) -> usize {
        base16::decoded_len_max(len)
    }
}
