//! Base16 engine: 1 byte <-> 2 nibbles.

use super::Sink;
use crate::{
    alphabet::{is_whitespace, AlphabetTable},
    errors::{Error, Result},
};

/// Exact length of the Base16 encoding of `len` bytes.
pub(crate) const fn encoded_len(len: usize) -> usize {
    len * 2
}

/// Upper bound on the bytes decoded from `len` bytes of Base16.
pub(crate) const fn decoded_len_max(len: usize) -> usize {
    len / 2
}

/// Encode `src` into `dst`, which must be exactly [`encoded_len`] long.
pub(crate) fn encode(table: &AlphabetTable, src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(dst.len(), encoded_len(src.len()));

    for (&byte, d) in src.iter().zip(dst.chunks_exact_mut(2)) {
        d[0] = table.encode(byte >> 4);
        d[1] = table.encode(byte & 0x0F);
    }
}

/// Strip an optional `0x` or `0X` prefix.
fn strip_prefix(src: &[u8]) -> &[u8] {
    match src {
        [b'0', b'x' | b'X', rest @ ..] => rest,
        _ => src,
    }
}

/// Decode Base16 text, pushing the decoded bytes into `out`.
///
/// Whitespace is ignored anywhere after the prefix, so a digit pair may be
/// split by it.
pub(crate) fn decode<S: Sink>(table: &AlphabetTable, src: &[u8], out: &mut S) -> Result<()> {
    let mut high: Option<u8> = None;

    for &byte in strip_prefix(src) {
        if is_whitespace(byte) {
            continue;
        }

        let nibble = table.decode(byte).ok_or(Error::InvalidSymbol)?;

        match high.take() {
            Some(h) => out.write((h << 4) | nibble)?,
            None => high = Some(nibble),
        }
    }

    match high {
        Some(_) => Err(Error::InvalidLength),
        None => Ok(()),
    }
}
