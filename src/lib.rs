//! Resumable base64 encoding ([RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648)) of input
//! that arrives in arbitrary pieces.
//!
//! Every encoding session carries its progress in a small [EncodingState]: the position inside the
//! current 3-byte quantum, the bits of the last input byte that haven't been emitted yet, and the
//! length of the current output line. Feeding input through [encode] one chunk at a time and then
//! calling [encode_rest] produces exactly what [encode_complete] produces for the concatenated
//! input, no matter where the chunk boundaries fall.
//!
//! # Configuration
//!
//! A [Config](config::Config) picks the [alphabet](alphabet::Alphabet), whether
//! [padding](padding::Padding) is emitted, and an optional [line wrap](line_wrap::LineWrap)
//! threshold. Common combinations are available as constants in [config]:
//!
//! | Config            | Alphabet | Padded | Line wrap |
//! |-------------------|----------|--------|-----------|
//! | `STANDARD`        | `+/`     | yes    | none      |
//! | `STANDARD_NO_PAD` | `+/`     | no     | none      |
//! | `URL_SAFE`        | `-_`     | yes    | none      |
//! | `URL_SAFE_NO_PAD` | `-_`     | no     | none      |
//! | `MIME`            | `+/`     | yes    | 76        |
//! | `PEM`             | `+/`     | yes    | 64        |
//!
//! # Output
//!
//! Encoded symbols go to a [Sink]. `String`, `Vec<u8>` and `Vec<u16>` are sinks, and
//! [write::EncoderWriter] adapts any `io::Write`.
//!
//! ```
//! use base64_chunked::{config, encode, encode_complete, encode_rest, EncodingState};
//!
//! let mut state = EncodingState::new();
//! let mut encoded = String::new();
//!
//! encode(b"Many hands ", &mut encoded, &mut state, &config::STANDARD).unwrap();
//! encode(b"make light work.", &mut encoded, &mut state, &config::STANDARD).unwrap();
//! encode_rest(&mut encoded, &mut state, &config::STANDARD).unwrap();
//!
//! assert_eq!("TWFueSBoYW5kcyBtYWtlIGxpZ2h0IHdvcmsu", encoded);
//! assert_eq!(encode_complete("Many hands make light work.", &config::STANDARD), encoded);
//! ```
//!
//! To keep a session across a boundary that can only hold an integer, the state can be packed
//! with [EncodingState::to_bits] and restored with [EncodingState::from_bits].
//!
//! # Display
//!
//! See [display](display/index.html) for how to transparently base64 data via a `Display`
//! implementation.
//!
//! # Panics
//!
//! If length calculations result in overflowing `usize`, a panic will result.

#![deny(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_results,
    variant_size_differences
)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod chunked_encoder;
pub mod config;
pub mod display;
mod encode;
pub mod line_wrap;
pub mod padding;
pub mod state;
pub mod write;


pub use crate::chunked_encoder::Sink;
pub use crate::encode::{encode, encode_complete, encode_complete_buf, encode_rest, encoded_len};
pub use crate::state::EncodingState;
