//! Provides [Padding], which controls the `=` suffix appended when the input did not end on a
//! complete quantum.

use crate::state::Phase;

/// The symbol used to pad the final incomplete quantum.
pub const PAD_BYTE: u8 = b'=';

/// Whether `=` symbols are appended after the final incomplete quantum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    /// Append one or two `=` so that the output length is a multiple of 4.
    #[default]
    Standard,
    /// Never append `=`, for when the encoded length is conveyed by other means.
    None,
}

impl Padding {
    /// The number of pad symbols owed for a session that ended in `phase`.
    ///
    /// One leftover byte leaves four bits missing from the last symbol, so two pads are needed;
    /// two leftover bytes leave two bits missing, so one pad is needed.
    #[inline]
    pub const fn pad_len(self, phase: Phase) -> usize {
        match self {
            Self::None => 0,
            Self::Standard => match phase {
                Phase::Aligned => 0,
                Phase::One => 2,
                Phase::Two => 1,
            },
        }
    }

    /// Write the pad symbols for `phase` into `output`.
    ///
    /// `output` must have room for at least [Padding::pad_len] bytes.
    ///
    /// Returns the number of padding bytes written.
    pub(crate) fn append_to(self, phase: Phase, output: &mut [u8]) -> usize {
        let pad_len = self.pad_len(phase);
        output[..pad_len].fill(PAD_BYTE);

        pad_len
    }
}
