//! Group reader shared by the Base64 and Base32 decoders.

use crate::{
    alphabet::{is_whitespace, AlphabetTable},
    errors::{Error, Result},
};

/// Padding character.
pub(crate) const PAD: u8 = b'=';

/// How the decoder treats a final group shorter than `N` symbols.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum PaddingPolicy {
    /// Every group must be `N` symbols long, counting padding.
    Required,

    /// The final group may omit its padding.
    Optional,
}

/// One group of up to `N` symbols.
#[derive(Debug)]
pub(crate) struct Group<const N: usize> {
    /// Digit values of the data symbols; unused slots are zero.
    pub(crate) values: [u8; N],

    /// Number of data symbols.
    pub(crate) len: usize,
}

/// Splits encoded text into groups of `N` symbols.
///
/// Whitespace is skipped between groups. Inside a group it ends the group,
/// which makes that group short and therefore final.
pub(crate) struct Groups<'i, const N: usize> {
    src: &'i [u8],
    pos: usize,
    table: &'static AlphabetTable,
    policy: PaddingPolicy,

    /// Set once a short or padded group has been read.
    finished: bool,
}

impl<'i, const N: usize> Groups<'i, N> {
    pub(crate) fn new(src: &'i [u8], table: &'static AlphabetTable, policy: PaddingPolicy) -> Self {
        Self {
            src,
            pos: 0,
            table,
            policy,
            finished: false,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.src.get(self.pos).copied().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Read the next group, or `None` once only whitespace remains.
    pub(crate) fn next_group(&mut self) -> Result<Option<Group<N>>> {
        self.skip_whitespace();

        if self.pos == self.src.len() {
            return Ok(None);
        }

        // padding is a trailing marker only
        if self.finished {
            return Err(Error::InvalidPadding);
        }

        let mut group = Group {
            values: [0u8; N],
            len: 0,
        };
        let mut pad = 0;

        while group.len + pad < N {
            let Some(&byte) = self.src.get(self.pos) else {
                break;
            };

            if byte == PAD {
                pad += 1;
            } else if is_whitespace(byte) {
                break;
            } else if pad > 0 {
                return Err(Error::InvalidPadding);
            } else {
                group.values[group.len] = self.table.decode(byte).ok_or(Error::InvalidSymbol)?;
                group.len += 1;
            }

            self.pos += 1;
        }

        if group.len == 0 {
            return Err(Error::InvalidPadding);
        }

        if pad > 0 && group.len + pad != N {
            return Err(Error::InvalidPadding);
        }

        if group.len + pad < N && self.policy == PaddingPolicy::Required {
            return Err(Error::InvalidLength);
        }

        if group.len < N {
            self.finished = true;
        }

        Ok(Some(group))
    }
}
