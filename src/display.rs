//! Enables base64'd output anywhere you might use a `Display` implementation, like a format string.
//!
//! ```
//! use base64_chunked::{config, display::Base64Display};
//!
//! let data = vec![0x0, 0x1, 0x2, 0x3];
//! let wrapper = Base64Display::new(&data, &config::STANDARD);
//!
//! assert_eq!("base64: AAECAw==", format!("base64: {}", wrapper));
//! ```

use core::fmt::{self, Display, Formatter};

use crate::{
    chunked_encoder::{ChunkedEncoder, Sink},
    config::Config,
    state::EncodingState,
};

/// A convenience wrapper for base64'ing bytes into a format string without heap allocation.
pub struct Base64Display<'a, 'e> {
    bytes: &'a [u8],
    chunked_encoder: ChunkedEncoder<'e>,
}

impl<'a, 'e> Base64Display<'a, 'e> {
    /// Create a `Base64Display` with the provided config.
    pub fn new(bytes: &'a [u8], config: &'e Config) -> Base64Display<'a, 'e> {
        Base64Display {
            bytes,
            chunked_encoder: ChunkedEncoder::new(config),
        }
    }
}

impl<'a, 'e> Display for Base64Display<'a, 'e> {
    fn fmt(&self, formatter: &mut Formatter) -> Result<(), fmt::Error> {
        let mut sink = FormatterSink { f: formatter };
        let mut state = EncodingState::new();

        self.chunked_encoder.encode(self.bytes, &mut state, &mut sink)?;
        self.chunked_encoder.encode_rest(&mut state, &mut sink)
    }
}

struct FormatterSink<'a, 'b: 'a> {
    f: &'a mut Formatter<'b>,
}

impl<'a, 'b: 'a> Sink for FormatterSink<'a, 'b> {
    type Error = fmt::Error;

    fn write_encoded_bytes(&mut self, encoded: &[u8]) -> Result<(), Self::Error> {
        // Avoid unsafe. If max performance is needed, write your own display wrapper that uses
        // unsafe here to gain about 10-15%.
        self.f
            .write_str(core::str::from_utf8(encoded).map_err(|_| fmt::Error)?)
    }
}
