//! Provides [EncodingState], the carry that lets encoding resume across input chunks.

use core::mem;

/// How many bytes of the current 3-byte quantum have been consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    /// Nothing pending: the input so far ended on a quantum boundary.
    #[default]
    Aligned = 0,
    /// One byte of the current quantum was consumed; 2 bits are carried.
    One = 1,
    /// Two bytes of the current quantum were consumed; 4 bits are carried.
    Two = 2,
}

impl Phase {
    /// Bits of the carry that must be zero in this phase.
    const fn unused_carry_mask(self) -> u8 {
        match self {
            Self::Aligned => 0xFF,
            Self::One => 0xCF,
            Self::Two => 0xC3,
        }
    }
}

/// Remembers what is needed to resume encoding after an input chunk whose cumulative length was
/// not a multiple of 3.
///
/// The encoder stops as soon as the input runs out, even mid-quantum, and the next chunk is
/// processed as if it directly continued the previous one. Exactly one state belongs to one
/// logical output stream; it is created empty, mutated in place by every
/// [encode](crate::encode()) call, and returned to empty by [encode_rest](crate::encode_rest()).
///
/// ```
/// use base64_chunked::{config, encode, encode_rest, EncodingState};
///
/// let mut state = EncodingState::new();
/// let mut out = String::new();
///
/// encode(b"ab", &mut out, &mut state, &config::STANDARD).unwrap();
/// assert!(!state.empty());
/// encode(b"cd", &mut out, &mut state, &config::STANDARD).unwrap();
/// encode_rest(&mut out, &mut state, &config::STANDARD).unwrap();
///
/// assert!(state.empty());
/// assert_eq!("YWJjZA==", out);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodingState {
    pub(crate) phase: Phase,
    /// Bits of the consumed bytes not yet emitted, already shifted into the high end of the next
    /// 6-bit value. The low bits are zero placeholders for the next byte.
    pub(crate) carry: u8,
    /// Symbols written on the current line. Only tracked while line wrapping is enabled.
    pub(crate) column: u16,
}

// The state must fit the fixed-size slot produced by `to_bits`.
const _: () = assert!(mem::size_of::<EncodingState>() <= mem::size_of::<u32>());

impl EncodingState {
    /// A fresh, empty state.
    pub const fn new() -> Self {
        Self {
            phase: Phase::Aligned,
            carry: 0,
            column: 0,
        }
    }

    /// Returns `true` if no partial quantum is pending, i.e. finalizing now would write nothing.
    #[inline]
    pub const fn empty(&self) -> bool {
        matches!(self.phase, Phase::Aligned)
    }

    /// Reset to the initial empty state, including the line position.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// How many bytes of the current quantum are pending.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Symbols written on the current line so far.
    pub const fn column(&self) -> u16 {
        self.column
    }

    /// Pack the state into a single integer, for callers that must park it in a fixed-size slot.
    ///
    /// Layout: phase in bits 0-7, carry in bits 8-15, column in bits 16-31.
    pub const fn to_bits(&self) -> u32 {
        (self.phase as u32) | ((self.carry as u32) << 8) | ((self.column as u32) << 16)
    }

    /// Unpack a state produced by [EncodingState::to_bits].
    pub const fn from_bits(bits: u32) -> Result<Self, StateBitsError> {
        let phase = match bits & 0xFF {
            0 => Phase::Aligned,
            1 => Phase::One,
            2 => Phase::Two,
            other => return Err(StateBitsError::InvalidPhase(other as u8)),
        };

        let carry = ((bits >> 8) & 0xFF) as u8;
        if carry & phase.unused_carry_mask() != 0 {
            return Err(StateBitsError::InvalidCarry { phase, carry });
        }

        Ok(Self {
            phase,
            carry,
            column: (bits >> 16) as u16,
        })
    }
}

/// Errors that can occur while unpacking an [EncodingState] from its integer form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateBitsError {
    /// The phase must be 0, 1, or 2.
    #[error("Invalid phase {0}")]
    InvalidPhase(u8),
    /// The carry has bits set that the phase could never have produced.
    #[error("Invalid carry {carry:#010b} for phase {phase:?}")]
    InvalidCarry {
        /// The decoded phase
        phase: Phase,
        /// The offending carry
        carry: u8,
    },
}
