use base64::Engine as _;

use base64_chunked::{config::Config, line_wrap::LINE_BREAK_BYTE};

/// Decode `encoded` with the `base64` crate, ignoring line breaks and accepting either padding
/// style.
pub fn reference_decode(encoded: &str, config: &Config) -> Vec<u8> {
    let alphabet = base64::alphabet::Alphabet::new(config.alphabet().as_str()).unwrap();
    let engine = base64::engine::GeneralPurpose::new(
        &alphabet,
        base64::engine::GeneralPurposeConfig::new()
            .with_decode_padding_mode(base64::engine::DecodePaddingMode::Indifferent),
    );

    let unwrapped: Vec<u8> = encoded
        .bytes()
        .filter(|&b| b != LINE_BREAK_BYTE)
        .collect();

    engine.decode(unwrapped).unwrap()
}

pub fn line_break_positions(encoded: &str) -> Vec<usize> {
    encoded
        .bytes()
        .enumerate()
        .filter(|&(_, b)| b == LINE_BREAK_BYTE)
        .map(|(i, _)| i)
        .collect()
}
