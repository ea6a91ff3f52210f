//! RFC 4648 alphabets.

use super::AlphabetTable;

/// Standard Base64 alphabet (RFC 4648 Section 4).
///
/// ```text
/// [A-Z]      [a-z]      [0-9]      +     /
/// 0x41-0x5a, 0x61-0x7a, 0x30-0x39, 0x2b, 0x2f
/// ```
pub static BASE64_STANDARD: AlphabetTable = AlphabetTable::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    false,
);

/// URL and filename safe Base64 alphabet (RFC 4648 Section 5).
///
/// ```text
/// [A-Z]      [a-z]      [0-9]      -     _
/// 0x41-0x5a, 0x61-0x7a, 0x30-0x39, 0x2d, 0x5f
/// ```
pub static BASE64_URL: AlphabetTable = AlphabetTable::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    false,
);

/// Standard Base32 alphabet (RFC 4648 Section 6), upper case on encode.
///
/// ```text
/// [A-Z]      [2-7]
/// 0x41-0x5a, 0x32-0x37
/// ```
pub static BASE32_STANDARD: AlphabetTable =
    AlphabetTable::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", true);

/// Base32 "Extended Hex" alphabet (RFC 4648 Section 7).
///
/// Symbols are in ascending ASCII order, so encoded strings sort like the
/// bytes they encode.
///
/// ```text
/// [0-9]      [A-V]
/// 0x30-0x39, 0x41-0x56
/// ```
pub static BASE32_HEX: AlphabetTable =
    AlphabetTable::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUV", true);

/// Lower case Base16 alphabet (RFC 4648 Section 8).
pub static BASE16_LOWER: AlphabetTable = AlphabetTable::new(b"0123456789abcdef", true);

/// Upper case Base16 alphabet (RFC 4648 Section 8).
pub static BASE16_UPPER: AlphabetTable = AlphabetTable::new(b"0123456789ABCDEF", true);
