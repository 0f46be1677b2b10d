use std::{fmt, io};

use crate::{
    chunked_encoder::{ChunkedEncoder, Sink},
    config::Config,
    state::EncodingState,
};

/// A `Write` implementation that base64 encodes data before delegating to the wrapped writer.
///
/// Because base64 has special handling for the end of the input data (padding, etc), there's a
/// `finish()` method on this type that encodes any leftover input bytes and adds padding if
/// appropriate. It's called automatically when deallocated (see the `Drop` implementation), but
/// any error that occurs when invoking the underlying writer will be suppressed. If you want to
/// handle such errors, call `finish()` yourself.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// // use a vec as the simplest possible `Write` -- in real code this is probably a file, etc.
/// let mut enc = base64_chunked::write::EncoderWriter::new(Vec::new(), base64_chunked::config::STANDARD);
///
/// // handle errors as you normally would
/// enc.write_all(b"asdf").unwrap();
///
/// // could leave this out to be called by Drop, if you don't care
/// // about handling errors or getting the delegate writer back
/// let delegate = enc.finish().unwrap();
///
/// // base64 was written to the writer
/// assert_eq!(b"YXNkZg==", &delegate[..]);
/// ```
///
/// # Panics
///
/// Calling `write()` (or related methods) or `finish()` after `finish()` has completed without
/// error is invalid and will panic.
///
/// # Errors
///
/// Base64 encoding itself does not generate errors, but errors from the wrapped writer will be
/// returned as per the contract of `Write`. Output already encoded for a failed `write()` is
/// lost, so the encoded stream must be considered broken once `write()` has returned an error.
/// A failed `finish()` keeps the pending symbols and may be retried.
///
/// # Performance
///
/// Each `write()` encodes all of its input through a fixed stack buffer; only the up to two bytes
/// of an unfinished quantum are carried over to the next `write()`, inside an [EncodingState].
pub struct EncoderWriter<W: io::Write> {
    config: Config,
    /// Where encoded data is written to. It's an Option as it's None immediately before Drop is
    /// called so that finish() can return the underlying writer. None implies that finish() has
    /// been called successfully.
    delegate: Option<W>,
    state: EncodingState,
    /// True iff a write to the delegate is in progress, so a panic there doesn't lead to another
    /// write attempt in Drop.
    panicked: bool,
}

impl<W: io::Write> fmt::Debug for EncoderWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "state:{:?} finished:{:?}",
            self.state,
            self.delegate.is_none()
        )
    }
}

impl<W: io::Write> EncoderWriter<W> {
    /// Create a new encoder that will write to the provided delegate writer.
    pub fn new(delegate: W, config: Config) -> EncoderWriter<W> {
        EncoderWriter {
            config,
            delegate: Some(delegate),
            state: EncodingState::new(),
            panicked: false,
        }
    }

    /// Encode all remaining buffered data and write it, including any trailing incomplete input
    /// triples and associated padding.
    ///
    /// Once this succeeds, no further writes or calls to this method are allowed.
    ///
    /// This may write to the delegate writer multiple times if the delegate writer does not accept
    /// all input provided to its `write` each invocation.
    ///
    /// If you don't care about error handling, it is not necessary to call this function, as the
    /// equivalent finalization is done by the Drop impl.
    ///
    /// Returns the writer that this was constructed around.
    ///
    /// # Errors
    ///
    /// The first error that is not of `ErrorKind::Interrupted` will be returned.
    pub fn finish(&mut self) -> io::Result<W> {
        // If we could consume self in finish(), we wouldn't have to worry about this case, but
        // finish() is retryable in the face of I/O errors, so we can't consume here.
        assert!(
            self.delegate.is_some(),
            "Encoder has already had finish() called"
        );

        self.write_final_leftovers()?;

        let writer = self
            .delegate
            .take()
            .expect("Encoder has already had finish() called");

        Ok(writer)
    }

    /// Unwraps this `EncoderWriter`, returning the base writer it writes base64 encoded output
    /// to, without finishing the stream.
    ///
    /// Normally this method should not be needed, since `finish()` returns the inner writer if
    /// it completes successfully. That will also ensure all data has been flushed, which the
    /// `into_inner()` function does *not* do.
    ///
    /// Calling this method after `finish()` has completed successfully will panic, since the
    /// writer has already been returned.
    pub fn into_inner(mut self) -> W {
        self.delegate
            .take()
            .expect("Encoder has already had finish() called")
    }

    /// The carry-over between writes: the pending partial quantum and the line position.
    pub fn state(&self) -> &EncodingState {
        &self.state
    }

    fn write_final_leftovers(&mut self) -> io::Result<()> {
        let Some(delegate) = self.delegate.as_mut() else {
            // finish() has already successfully called this, and we are now in drop(), so just exit
            return Ok(());
        };

        tracing::trace!(
            pending = ?self.state.phase(),
            column = self.state.column(),
            "finishing base64 stream"
        );

        self.panicked = true;
        let res = ChunkedEncoder::new(&self.config).encode_rest(&mut self.state, &mut IoSink(delegate));
        self.panicked = false;
        res?;

        delegate.flush()
    }
}

impl<W: io::Write> io::Write for EncoderWriter<W> {
    /// Encode input and then write to the delegate writer.
    ///
    /// The whole input is always consumed: complete quanta are encoded and written, and the one
    /// or two bytes of an incomplete trailing quantum are carried over until the next `write()`
    /// or `finish()`.
    ///
    /// # Errors
    ///
    /// Any errors emitted by the delegate writer are returned.
    fn write(&mut self, input: &[u8]) -> io::Result<usize> {
        let delegate = self
            .delegate
            .as_mut()
            .expect("Cannot write more after calling finish()");

        if input.is_empty() {
            return Ok(0);
        }

        self.panicked = true;
        let res = ChunkedEncoder::new(&self.config).encode(input, &mut self.state, &mut IoSink(delegate));
        self.panicked = false;

        res.map(|()| input.len())
    }

    /// Because this is usually treated as OK to call multiple times, it will *not* flush any
    /// incomplete chunks of input or write padding.
    /// # Errors
    ///
    /// The first error that is not of [`ErrorKind::Interrupted`](std::io::ErrorKind::Interrupted)
    /// will be returned.
    fn flush(&mut self) -> io::Result<()> {
        self.delegate
            .as_mut()
            .expect("Cannot write more after calling finish()")
            .flush()
    }
}

impl<W: io::Write> Drop for EncoderWriter<W> {
    fn drop(&mut self) {
        if self.panicked {
            return;
        }

        // like `BufWriter`, ignore errors during drop, but leave a trace of them
        if let Err(error) = self.write_final_leftovers() {
            tracing::warn!(%error, "failed to write trailing base64 output on drop");
        }
    }
}

/// Forwards encoded output to an `io::Write`.
struct IoSink<'a, W: io::Write>(&'a mut W);

impl<'a, W: io::Write> Sink for IoSink<'a, W> {
    type Error = io::Error;

    fn write_encoded_bytes(&mut self, encoded: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(encoded)
    }
}
