use std::io;

use crate::{
    chunked_encoder::ChunkedEncoder, config::Config, state::EncodingState,
};

/// A `Write` implementation that base64-encodes data using the provided config and accumulates the
/// resulting base64 in memory, which is then exposed as a String via `into_inner()`.
///
/// # Examples
///
/// Buffer base64 in a new String:
///
/// ```
/// use std::io::Write;
///
/// let mut enc = base64_chunked::write::EncoderStringWriter::new(base64_chunked::config::URL_SAFE);
///
/// enc.write_all(b"asdf").unwrap();
///
/// // get the resulting String
/// let b64_string = enc.into_inner();
///
/// assert_eq!("YXNkZg==", &b64_string);
/// ```
///
/// Or, append to an existing String:
///
/// ```
/// use std::io::Write;
///
/// let mut buf = String::from("base64: ");
///
/// let mut enc = base64_chunked::write::EncoderStringWriter::from(buf, base64_chunked::config::URL_SAFE);
///
/// enc.write_all(b"asdf").unwrap();
///
/// // the String is handed back when encoding is finished
/// buf = enc.into_inner();
///
/// assert_eq!("base64: YXNkZg==", &buf);
/// ```
///
/// # Performance
///
/// Because the output is an in-memory String, writes never fail and every encoded symbol goes
/// straight into the String with no intermediate UTF-8 validation.
#[derive(Debug)]
pub struct EncoderStringWriter {
    config: Config,
    state: EncodingState,
    buf: String,
}

impl EncoderStringWriter {
    /// Create a EncoderStringWriter that will append to the provided String.
    pub fn from(buf: String, config: Config) -> Self {
        EncoderStringWriter {
            config,
            state: EncodingState::new(),
            buf,
        }
    }

    /// Create a EncoderStringWriter that will encode into a new String with the provided config.
    pub fn new(config: Config) -> Self {
        EncoderStringWriter::from(String::new(), config)
    }

    /// Encode all remaining buffered data, including any trailing incomplete input triples and
    /// associated padding.
    ///
    /// Returns the base64-encoded form of the accumulated written data.
    pub fn into_inner(mut self) -> String {
        let result = ChunkedEncoder::new(&self.config).encode_rest(&mut self.state, &mut self.buf);
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }

        self.buf
    }
}

impl io::Write for EncoderStringWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = ChunkedEncoder::new(&self.config).encode(buf, &mut self.state, &mut self.buf);
        match result {
            Ok(()) => Ok(buf.len()),
            Err(never) => match never {},
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
