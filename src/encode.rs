use byteorder::{BigEndian, ByteOrder};

use crate::{
    chunked_encoder::{ChunkedEncoder, Sink},
    config::Config,
    line_wrap::{LineWrap, LINE_BREAK_BYTE},
    padding::Padding,
    state::{EncodingState, Phase},
};

/// Encode a chunk of input, writing the symbols to `sink` and carrying any incomplete trailing
/// quantum over in `state`.
///
/// Encoding stops as soon as the input runs out, even in the middle of a quantum: nothing is
/// padded and the pending bits wait in `state` for the next chunk. Feeding a byte sequence through
/// any number of calls that share one `state`, followed by one [encode_rest], produces exactly the
/// output of a single [encode_complete] over the whole sequence.
///
/// `config` must be the same for every call of a session.
///
/// # Errors
///
/// Only errors from `sink` are returned. After a sink error the session cannot be resumed and
/// `state` must be cleared before it is reused.
///
/// # Example
///
/// ```
/// use base64_chunked::{config, encode, encode_rest, EncodingState};
///
/// let mut state = EncodingState::new();
/// let mut out = Vec::<u8>::new();
///
/// for chunk in [&b"hel"[..], b"lo w", b"orld"] {
///     encode(chunk, &mut out, &mut state, &config::STANDARD).unwrap();
/// }
/// encode_rest(&mut out, &mut state, &config::STANDARD).unwrap();
///
/// assert_eq!(b"aGVsbG8gd29ybGQ=", &out[..]);
/// ```
pub fn encode<S>(
    input: &[u8],
    sink: &mut S,
    state: &mut EncodingState,
    config: &Config,
) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    ChunkedEncoder::new(config).encode(input, state, sink)
}

/// Finish a session started with [encode].
///
/// If the total input length was not a multiple of 3, the last quantum is encoded as if it were
/// filled up with zero bits, followed by the padding the config asks for. `state` is empty
/// afterwards. Calling this on an empty state writes nothing and leaves `state` as it is.
///
/// # Errors
///
/// Only errors from `sink` are returned. `state` is not modified in that case, so the call may be
/// retried.
pub fn encode_rest<S>(sink: &mut S, state: &mut EncodingState, config: &Config) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    ChunkedEncoder::new(config).encode_rest(state, sink)
}

/// Encode input available in one piece, returning a `String`.
///
/// Equivalent to one [encode] call on a fresh state followed by [encode_rest].
///
/// # Panics
///
/// If the encoded length does not fit in `usize`.
///
/// # Example
///
/// ```
/// use base64_chunked::{config, encode_complete};
///
/// assert_eq!("aGVsbG8gd29ybGQ=", encode_complete(b"hello world", &config::STANDARD));
/// assert_eq!("-_A", encode_complete(&[0xFB_u8, 0xF0], &config::URL_SAFE_NO_PAD));
/// ```
pub fn encode_complete<T>(input: &T, config: &Config) -> String
where
    T: ?Sized + AsRef<[u8]>,
{
    let bytes = input.as_ref();
    let len = encoded_len(bytes.len(), config).expect("usize overflow when calculating buffer size");
    let mut buf = String::with_capacity(len);

    encode_complete_buf(bytes, config, &mut buf);
    debug_assert_eq!(len, buf.len());

    buf
}

/// Encode input available in one piece, appending to the supplied `String`.
///
/// # Example
///
/// ```
/// use base64_chunked::{config, encode_complete_buf};
///
/// let mut buf = String::from("Authorization: Basic ");
/// encode_complete_buf(b"user:pass", &config::STANDARD, &mut buf);
///
/// assert_eq!("Authorization: Basic dXNlcjpwYXNz", buf);
/// ```
pub fn encode_complete_buf<T>(input: &T, config: &Config, buf: &mut String)
where
    T: ?Sized + AsRef<[u8]>,
{
    let mut state = EncodingState::new();
    let encoder = ChunkedEncoder::new(config);

    let result = encoder
        .encode(input.as_ref(), &mut state, buf)
        .and_then(|()| encoder.encode_rest(&mut state, buf));

    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Calculate the exact length of [encode_complete]'s output for an input of `bytes_len` bytes,
/// including padding and line breaks as configured.
///
/// Returns `None` if the result would overflow `usize`.
pub fn encoded_len(bytes_len: usize, config: &Config) -> Option<usize> {
    let rem = bytes_len % 3;

    let complete_input_chunks = bytes_len / 3;
    let complete_chunk_output = complete_input_chunks.checked_mul(4)?;

    let line_breaks = config
        .line_wrap()
        .quanta_per_line()
        .map_or(0, |quanta| complete_input_chunks / quanta);

    let rem_output = if rem > 0 {
        match config.padding() {
            Padding::Standard => 4,
            // one byte needs 2 symbols, two bytes need 3
            Padding::None => rem + 1,
        }
    } else {
        0
    };

    complete_chunk_output
        .checked_add(line_breaks)?
        .checked_add(rem_output)
}

/// Encode all of `input` into `output`, resuming from and updating `state`.
///
/// `output` must have room for 5 bytes per quantum touched by `input`: 4 symbols plus a line
/// break.
///
/// Returns the number of bytes written.
pub(crate) fn encode_to_slice(
    input: &[u8],
    output: &mut [u8],
    state: &mut EncodingState,
    config: &Config,
) -> usize {
    const LOW_SIX_BITS: u64 = 0x3F;

    let alphabet = config.alphabet();
    let line_wrap = config.line_wrap();

    let mut phase = state.phase;
    let mut carry = state.carry;
    let mut column = state.column;

    let mut input_index = 0;
    let mut output_index = 0;

    loop {
        match phase {
            Phase::Aligned => {
                // Two quanta at a time while a u64 can be read. Only the top 6 bytes are consumed,
                // so 2 trailing bytes must be readable.
                while input.len() - input_index >= 8 {
                    let input_u64 = BigEndian::read_u64(&input[input_index..]);

                    let output_chunk = &mut output[output_index..(output_index + 4)];
                    output_chunk[0] = alphabet.encode_u6(((input_u64 >> 58) & LOW_SIX_BITS) as u8);
                    output_chunk[1] = alphabet.encode_u6(((input_u64 >> 52) & LOW_SIX_BITS) as u8);
                    output_chunk[2] = alphabet.encode_u6(((input_u64 >> 46) & LOW_SIX_BITS) as u8);
                    output_chunk[3] = alphabet.encode_u6(((input_u64 >> 40) & LOW_SIX_BITS) as u8);
                    output_index += 4;
                    output_index += finish_quantum(line_wrap, &mut column, &mut output[output_index..]);

                    let output_chunk = &mut output[output_index..(output_index + 4)];
                    output_chunk[0] = alphabet.encode_u6(((input_u64 >> 34) & LOW_SIX_BITS) as u8);
                    output_chunk[1] = alphabet.encode_u6(((input_u64 >> 28) & LOW_SIX_BITS) as u8);
                    output_chunk[2] = alphabet.encode_u6(((input_u64 >> 22) & LOW_SIX_BITS) as u8);
                    output_chunk[3] = alphabet.encode_u6(((input_u64 >> 16) & LOW_SIX_BITS) as u8);
                    output_index += 4;
                    output_index += finish_quantum(line_wrap, &mut column, &mut output[output_index..]);

                    input_index += 6;
                }

                let Some(&byte) = input.get(input_index) else {
                    break;
                };
                input_index += 1;

                // top 6 bits now, bottom 2 wait for the next byte
                output[output_index] = alphabet.encode_u6(byte >> 2);
                output_index += 1;
                carry = (byte & 0x03) << 4;
                phase = Phase::One;
            }
            Phase::One => {
                let Some(&byte) = input.get(input_index) else {
                    break;
                };
                input_index += 1;

                // 2 carried bits + top 4 bits, bottom 4 wait for the next byte
                output[output_index] = alphabet.encode_u6(carry | (byte >> 4));
                output_index += 1;
                carry = (byte & 0x0F) << 2;
                phase = Phase::Two;
            }
            Phase::Two => {
                let Some(&byte) = input.get(input_index) else {
                    break;
                };
                input_index += 1;

                // 4 carried bits + top 2 bits, then the bottom 6 bits on their own
                output[output_index] = alphabet.encode_u6(carry | (byte >> 6));
                output[output_index + 1] = alphabet.encode_u6(byte & 0x3F);
                output_index += 2;
                carry = 0;
                phase = Phase::Aligned;

                output_index += finish_quantum(line_wrap, &mut column, &mut output[output_index..]);
            }
        }
    }

    state.phase = phase;
    state.carry = carry;
    state.column = column;

    output_index
}

/// Encode the pending partial quantum in `state`, if any, plus padding, then clear `state`.
///
/// An empty state is left untouched, line position included.
///
/// `output` must have room for 3 bytes.
///
/// Returns the number of bytes written.
pub(crate) fn encode_rest_to_slice(
    output: &mut [u8],
    state: &mut EncodingState,
    config: &Config,
) -> usize {
    if state.empty() {
        return 0;
    }

    // the carry is already shifted into place; the missing low bits are the zero fill
    output[0] = config.alphabet().encode_u6(state.carry);
    let written = 1 + config.padding().append_to(state.phase, &mut output[1..]);

    state.clear();

    written
}

/// Update the line position after a complete quantum and write a line break if one is due.
///
/// Returns the number of bytes written.
#[inline]
fn finish_quantum(line_wrap: LineWrap, column: &mut u16, output: &mut [u8]) -> usize {
    let (next_column, line_break) = line_wrap.after_quantum(*column);
    *column = next_column;

    if line_break {
        output[0] = LINE_BREAK_BYTE;
        1
    } else {
        0
    }
}
