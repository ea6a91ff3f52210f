//! Base32 engine: 5 bytes <-> 8 five-bit symbols.

use super::{
    group::{Groups, PaddingPolicy, PAD},
    Sink,
};
use crate::{
    alphabet::AlphabetTable,
    errors::{Error, Result},
    Padding,
};

/// Number of data symbols emitted for a final chunk of `n` bytes.
const TAIL_SYMBOLS: [usize; 5] = [0, 2, 4, 5, 7];

/// Exact length of the Base32 encoding of `len` bytes.
pub(crate) const fn encoded_len(len: usize, padding: Padding) -> usize {
    let full = len / 5 * 8;

    match (len % 5, padding) {
        (0, _) => full,
        (_, Padding::Padded) => full + 8,
        (rem, Padding::Unpadded) => full + TAIL_SYMBOLS[rem],
    }
}

/// Upper bound on the bytes decoded from `len` bytes of Base32.
pub(crate) const fn decoded_len_max(len: usize) -> usize {
    len / 8 * 5 + 4
}

#[inline(always)]
fn encode_group(table: &AlphabetTable, b: [u8; 5]) -> [u8; 8] {
    [
        table.encode(b[0] >> 3),
        table.encode((b[0] << 2) | (b[1] >> 6)),
        table.encode(b[1] >> 1),
        table.encode((b[1] << 4) | (b[2] >> 4)),
        table.encode((b[2] << 1) | (b[3] >> 7)),
        table.encode(b[3] >> 2),
        table.encode((b[3] << 3) | (b[4] >> 5)),
        table.encode(b[4]),
    ]
}

/// Encode `src` into `dst`, which must be exactly [`encoded_len`] long.
pub(crate) fn encode(table: &AlphabetTable, src: &[u8], dst: &mut [u8], padding: Padding) {
    debug_assert_eq!(dst.len(), encoded_len(src.len(), padding));

    let mut src_chunks = src.chunks_exact(5);
    let mut dst_chunks = dst.chunks_exact_mut(8);

    for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
        d.copy_from_slice(&encode_group(table, [s[0], s[1], s[2], s[3], s[4]]));
    }

    let src_rem = src_chunks.remainder();

    if src_rem.is_empty() {
        return;
    }

    // The last chunk, which may have padding
    let dst_rem = match dst_chunks.next() {
        Some(d) => d,
        None => dst_chunks.into_remainder(),
    };

    let mut b = [0u8; 5];
    b[..src_rem.len()].copy_from_slice(src_rem);

    let symbols = encode_group(table, b);
    let data = TAIL_SYMBOLS[src_rem.len()];

    dst_rem[..data].copy_from_slice(&symbols[..data]);
    dst_rem[data..].fill(PAD);
}

/// Decode Base32 text, pushing the decoded bytes into `out`.
///
/// Case folding is left to the alphabet table.
pub(crate) fn decode<S: Sink>(
    table: &'static AlphabetTable,
    src: &[u8],
    out: &mut S,
    policy: PaddingPolicy,
) -> Result<()> {
    let mut groups = Groups::<8>::new(src, table, policy);

    while let Some(group) = groups.next_group()? {
        let [c0, c1, c2, c3, c4, c5, c6, c7] = group.values;

        let bytes = [
            (c0 << 3) | (c1 >> 2),
            (c1 << 6) | (c2 << 1) | (c3 >> 4),
            (c3 << 4) | (c4 >> 1),
            (c4 << 7) | (c5 << 2) | (c6 >> 3),
            (c6 << 5) | c7,
        ];

        // 1, 3 and 6 symbols never come out of an encoder
        let n = match group.len {
            2 => 1,
            4 => 2,
            5 => 3,
            7 => 4,
            8 => 5,
            _ => return Err(Error::InvalidLength),
        };

        for &byte in &bytes[..n] {
            out.write(byte)?;
        }
    }

    Ok(())
}
