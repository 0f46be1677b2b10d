// not every fuzz target uses every helper
#![allow(dead_code)]

use base64_chunked::{
    alphabet,
    config::Config,
    line_wrap::LineWrap,
    padding::Padding,
};
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;
use sha2::{Digest, Sha256};

pub fn rng_from(data: &[u8]) -> SmallRng {
    // use sha256 of data as rng seed so it's repeatable
    let sha = Sha256::digest(data);

    let mut seed: [u8; 8] = [0; 8];
    seed.copy_from_slice(&sha.as_slice()[0..8]);

    SmallRng::seed_from_u64(u64::from_le_bytes(seed))
}

pub fn random_config<R: Rng>(rng: &mut R) -> Config {
    let alphabet = if rng.gen() {
        alphabet::URL_SAFE
    } else {
        alphabet::STANDARD
    };

    let padding = if rng.gen() {
        Padding::Standard
    } else {
        Padding::None
    };

    let line_wrap = if rng.gen() {
        LineWrap::NONE
    } else {
        LineWrap::new(rng.gen_range(1..200))
    };

    Config::new()
        .with_alphabet(alphabet)
        .with_padding(padding)
        .with_line_wrap(line_wrap)
}

/// Decode with the `base64` crate after dropping line breaks.
pub fn reference_decode(encoded: &str, config: &Config) -> Vec<u8> {
    use base64::Engine as _;

    let alphabet = base64::alphabet::Alphabet::new(config.alphabet().as_str()).unwrap();
    let engine = base64::engine::GeneralPurpose::new(
        &alphabet,
        base64::engine::GeneralPurposeConfig::new()
            .with_decode_padding_mode(base64::engine::DecodePaddingMode::Indifferent),
    );

    let unwrapped: Vec<u8> = encoded.bytes().filter(|&b| b != b'\n').collect();
    engine.decode(unwrapped).unwrap()
}
