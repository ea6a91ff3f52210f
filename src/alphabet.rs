//! Alphabet tables.
//!
//! Each table pairs the ordered list of symbols used by the encoder with a
//! 256-entry inverse used by the decoder. Tables are built at compile time by
//! [`AlphabetTable::new`] and live in `static` items, so they are shared by
//! every thread without synchronization.

mod rfc4648;

pub use self::rfc4648::{
    BASE16_LOWER, BASE16_UPPER, BASE32_HEX, BASE32_STANDARD, BASE64_STANDARD, BASE64_URL,
};

/// Marks a byte which is not part of the alphabet in the decode table.
///
/// No 4, 5 or 6-bit value can reach it.
const INVALID: u8 = 0xFF;

/// Bidirectional mapping between `N`-ary digit values and ASCII symbols.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AlphabetTable {
    /// Symbols indexed by digit value.
    encode: &'static [u8],

    /// Digit values indexed by symbol byte, [`INVALID`] elsewhere.
    decode: [u8; 256],

    /// Are both cases of a letter accepted by the decoder?
    case_insensitive: bool,
}

impl AlphabetTable {
    /// Build a table from its symbols.
    ///
    /// `symbols` must hold 16, 32 or 64 distinct ASCII bytes, none of them `=`
    /// or whitespace. When `case_insensitive` is set, the decoder maps the
    /// upper and lower case form of every letter in `symbols` to the same
    /// digit value.
    pub const fn new(symbols: &'static [u8], case_insensitive: bool) -> Self {
        assert!(
            symbols.len() == 16 || symbols.len() == 32 || symbols.len() == 64,
            "alphabet must hold 16, 32 or 64 symbols"
        );

        let mut decode = [INVALID; 256];
        let mut i = 0;

        while i < symbols.len() {
            let symbol = symbols[i];
            assert!(symbol.is_ascii_graphic() && symbol != b'=', "invalid alphabet symbol");
            assert!(decode[symbol as usize] == INVALID, "duplicate alphabet symbol");

            if case_insensitive && symbol.is_ascii_alphabetic() {
                decode[symbol.to_ascii_uppercase() as usize] = i as u8;
                decode[symbol.to_ascii_lowercase() as usize] = i as u8;
            } else {
                decode[symbol as usize] = i as u8;
            }

            i += 1;
        }

        Self {
            encode: symbols,
            decode,
            case_insensitive,
        }
    }

    /// Symbols of this alphabet, ordered by digit value.
    pub const fn symbols(&self) -> &'static [u8] {
        self.encode
    }

    /// Number of bits carried by one symbol.
    pub const fn bits(&self) -> u32 {
        self.encode.len().trailing_zeros()
    }

    /// Does the decoder accept both cases of each letter?
    pub const fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Map a digit value to its symbol.
    ///
    /// Bits above [`AlphabetTable::bits`] are ignored.
    #[inline(always)]
    pub fn encode(&self, value: u8) -> u8 {
        self.encode[usize::from(value) & (self.encode.len() - 1)]
    }

    /// Map a symbol to its digit value, or `None` if the byte is not part of
    /// this alphabet.
    #[inline(always)]
    pub fn decode(&self, symbol: u8) -> Option<u8> {
        match self.decode[usize::from(symbol)] {
            INVALID => None,
            value => Some(value),
        }
    }
}

/// Whitespace tolerated by the decoders (RFC 4648 Section 3.3).
#[inline(always)]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
