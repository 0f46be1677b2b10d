//! Provides [Alphabet] and constants for the alphabets defined by RFC 4648.

use crate::padding::PAD_BYTE;

const ALPHABET_SIZE: usize = 64;

/// An alphabet defines the 64 ASCII characters (symbols) used for base64.
///
/// The two alphabets from [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648) are provided as
/// constants, and custom alphabets can be made with [Alphabet::new].
///
/// ```
/// let custom = base64_chunked::alphabet::Alphabet::new(
///     "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+,",
/// )
/// .unwrap();
///
/// let config = base64_chunked::config::STANDARD.with_alphabet(custom);
/// assert_eq!("+,A=", base64_chunked::encode_complete(&[0xFB_u8, 0xF0], &config));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    pub(crate) symbols: [u8; ALPHABET_SIZE],
}

impl Alphabet {
    /// Performs no checks so that it can be const.
    /// Used only for known-valid strings.
    const fn from_str_unchecked(alphabet: &str) -> Self {
        let mut symbols = [0_u8; ALPHABET_SIZE];
        let source_bytes = alphabet.as_bytes();

        // a way to copy that's allowed in const fn
        let mut index = 0;
        while index < ALPHABET_SIZE {
            symbols[index] = source_bytes[index];
            index += 1;
        }

        Self { symbols }
    }

    /// Create an `Alphabet` from a string of 64 unique printable ASCII bytes.
    ///
    /// The `=` byte is not allowed as it is used for padding.
    pub const fn new(alphabet: &str) -> Result<Self, ParseAlphabetError> {
        let bytes = alphabet.as_bytes();
        if bytes.len() != ALPHABET_SIZE {
            return Err(ParseAlphabetError::InvalidLength);
        }

        {
            let mut index = 0;
            while index < ALPHABET_SIZE {
                let byte = bytes[index];

                // must be ascii printable. 127 (DEL) is commonly considered printable
                // for some reason but clearly unsuitable for base64.
                if !(byte >= 32_u8 && byte < 127_u8) {
                    return Err(ParseAlphabetError::UnprintableByte(byte));
                }
                // = is assumed to be padding, so cannot be used as a symbol
                if byte == PAD_BYTE {
                    return Err(ParseAlphabetError::ReservedByte(byte));
                }

                // Check for duplicates while staying const-friendly.
                // It's only 64 bytes, so quadratic is fine.
                let mut probe_index = 0;
                while probe_index < ALPHABET_SIZE {
                    if probe_index != index && bytes[probe_index] == byte {
                        return Err(ParseAlphabetError::DuplicatedByte(byte));
                    }
                    probe_index += 1;
                }

                index += 1;
            }
        }

        Ok(Self::from_str_unchecked(alphabet))
    }

    /// Translate a 6-bit value into its output symbol.
    ///
    /// Only the low 6 bits of `value` are used.
    #[inline]
    pub const fn encode_u6(&self, value: u8) -> u8 {
        self.symbols[(value & 0x3F) as usize]
    }

    /// The symbols of this alphabet, in 6-bit value order.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // the constructors only admit printable ascii
        core::str::from_utf8(&self.symbols).expect("alphabet symbols are ascii")
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = ParseAlphabetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Possible errors when constructing an [Alphabet] from a `str`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAlphabetError {
    /// Alphabets must be 64 ASCII bytes
    #[error("Invalid length - must be 64 bytes")]
    InvalidLength,
    /// All bytes must be unique
    #[error("Duplicated byte: {0:#04x}")]
    DuplicatedByte(u8),
    /// All bytes must be printable (in the range `[32, 126]`).
    #[error("Unprintable byte: {0:#04x}")]
    UnprintableByte(u8),
    /// `=` cannot be used
    #[error("Reserved byte: {0:#04x}")]
    ReservedByte(u8),
}

/// The standard alphabet (uses `+` and `/`).
///
/// See [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648#section-4).
pub const STANDARD: Alphabet =
    Alphabet::from_str_unchecked("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

/// The URL and filename safe alphabet (uses `-` and `_`).
///
/// See [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648#section-5).
pub const URL_SAFE: Alphabet =
    Alphabet::from_str_unchecked("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");
