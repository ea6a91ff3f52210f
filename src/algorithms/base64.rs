//! Base64 engine: 3 bytes <-> 4 six-bit symbols.

use super::{
    group::{Groups, PaddingPolicy, PAD},
    Sink,
};
use crate::{
    alphabet::AlphabetTable,
    errors::{Error, Result},
    Padding,
};

/// Exact length of the Base64 encoding of `len` bytes.
pub(crate) const fn encoded_len(len: usize, padding: Padding) -> usize {
    let full = len / 3 * 4;

    match (len % 3, padding) {
        (0, _) => full,
        (_, Padding::Padded) => full + 4,
        (1, Padding::Unpadded) => full + 2,
        (_, Padding::Unpadded) => full + 3,
    }
}

/// Upper bound on the bytes decoded from `len` bytes of Base64.
pub(crate) const fn decoded_len_max(len: usize) -> usize {
    len / 4 * 3 + 2
}

#[inline(always)]
fn encode_group(table: &AlphabetTable, b: [u8; 3]) -> [u8; 4] {
    [
        table.encode(b[0] >> 2),
        table.encode((b[0] << 4) | (b[1] >> 4)),
        table.encode((b[1] << 2) | (b[2] >> 6)),
        table.encode(b[2]),
    ]
}

/// Encode `src` into `dst`, which must be exactly [`encoded_len`] long.
pub(crate) fn encode(table: &AlphabetTable, src: &[u8], dst: &mut [u8], padding: Padding) {
    debug_assert_eq!(dst.len(), encoded_len(src.len(), padding));

    let mut src_chunks = src.chunks_exact(3);
    let mut dst_chunks = dst.chunks_exact_mut(4);

    for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
        d.copy_from_slice(&encode_group(table, [s[0], s[1], s[2]]));
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

    let mut b = [0u8; 3];
    b[..src_rem.len()].copy_from_slice(src_rem);

    let symbols = encode_group(table, b);
    let data = src_rem.len() + 1;

    dst_rem[..data].copy_from_slice(&symbols[..data]);
    dst_rem[data..].fill(PAD);
}

/// Decode Base64 text, pushing the decoded bytes into `out`.
pub(crate) fn decode<S: Sink>(
    table: &'static AlphabetTable,
    src: &[u8],
    out: &mut S,
    policy: PaddingPolicy,
) -> Result<()> {
    let mut groups = Groups::<4>::new(src, table, policy);

    while let Some(group) = groups.next_group()? {
        let [v0, v1, v2, v3] = group.values;

        let bytes = [(v0 << 2) | (v1 >> 4), (v1 << 4) | (v2 >> 2), (v2 << 6) | v3];

        let n = match group.len {
            2 => 1,
            3 => 2,
            4 => 3,
            _ => return Err(Error::InvalidLength),
        };

        for &byte in &bytes[..n] {
            out.write(byte)?;
        }
    }

    Ok(())
}
