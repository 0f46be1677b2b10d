//! Provides [Sink], the output side of encoding, and [ChunkedEncoder], which encodes input of any
//! length through a fixed stack buffer into a sink.

use core::convert::Infallible;

use crate::{
    config::Config,
    encode::{encode_rest_to_slice, encode_to_slice},
    state::EncodingState,
};

/// The output mechanism for encoded symbols.
///
/// Encoded data is always ASCII, so a sink may store it as narrow bytes, `char`s, or wide code
/// units as it sees fit.
pub trait Sink {
    /// The error a sink may fail with. Use [Infallible] for in-memory sinks.
    type Error;

    /// Handle a chunk of encoded base64 data (as ASCII bytes)
    fn write_encoded_bytes(&mut self, encoded: &[u8]) -> Result<(), Self::Error>;
}

impl Sink for String {
    type Error = Infallible;

    fn write_encoded_bytes(&mut self, encoded: &[u8]) -> Result<(), Self::Error> {
        self.extend(encoded.iter().map(|&b| char::from(b)));

        Ok(())
    }
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    fn write_encoded_bytes(&mut self, encoded: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(encoded);

        Ok(())
    }
}

/// Wide output: one UTF-16 code unit per symbol.
impl Sink for Vec<u16> {
    type Error = Infallible;

    fn write_encoded_bytes(&mut self, encoded: &[u8]) -> Result<(), Self::Error> {
        self.extend(encoded.iter().map(|&b| u16::from(b)));

        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write_encoded_bytes(&mut self, encoded: &[u8]) -> Result<(), Self::Error> {
        (**self).write_encoded_bytes(encoded)
    }
}

const BUF_SIZE: usize = 1024;

/// Worst case output of one quantum: 4 symbols and a line break.
const MAX_BYTES_PER_QUANTUM: usize = 5;

/// The longest input that is always safe to encode into a `BUF_SIZE` buffer.
///
/// A chunk may begin and end inside a quantum, so one quantum of room is held back for the
/// quantum the previous chunk left unfinished.
const MAX_INPUT_CHUNK_LEN: usize = (BUF_SIZE / MAX_BYTES_PER_QUANTUM - 1) * 3;

/// A base64 encoder that emits encoded bytes in chunks without heap allocation.
///
/// Input of any length is cut into pieces that are each encoded into a stack buffer and handed to
/// the [Sink], so arbitrarily large input never requires an output allocation. All carried state
/// lives in the caller's [EncodingState].
#[derive(Clone, Copy, Debug)]
pub struct ChunkedEncoder<'e> {
    config: &'e Config,
}

impl<'e> ChunkedEncoder<'e> {
    /// Create an encoder that uses `config` for every chunk.
    pub fn new(config: &'e Config) -> Self {
        ChunkedEncoder { config }
    }

    /// Encode `bytes`, carrying any trailing partial quantum in `state`.
    ///
    /// See [encode](crate::encode()).
    pub fn encode<S: Sink + ?Sized>(
        &self,
        bytes: &[u8],
        state: &mut EncodingState,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        let mut encode_buf = [0_u8; BUF_SIZE];

        for chunk in bytes.chunks(MAX_INPUT_CHUNK_LEN) {
            let b64_bytes_written = encode_to_slice(chunk, &mut encode_buf, state, self.config);

            // no zero-length writes
            if b64_bytes_written > 0 {
                sink.write_encoded_bytes(&encode_buf[..b64_bytes_written])?;
            }
        }

        Ok(())
    }

    /// Encode the pending partial quantum and padding, leaving `state` empty.
    ///
    /// If the sink fails, `state` is unchanged and the call can be repeated.
    ///
    /// See [encode_rest](crate::encode_rest()).
    pub fn encode_rest<S: Sink + ?Sized>(
        &self,
        state: &mut EncodingState,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        // 1 symbol and at most 2 pad bytes
        let mut encode_buf = [0_u8; 3];

        // the pending quantum stays in `state` until the sink has accepted it
        let mut finished = *state;
        let b64_bytes_written = encode_rest_to_slice(&mut encode_buf, &mut finished, self.config);
        if b64_bytes_written > 0 {
            sink.write_encoded_bytes(&encode_buf[..b64_bytes_written])?;
        }

        *state = finished;

        Ok(())
    }
}
