#![no_main]
use libfuzzer_sys::fuzz_target;
use rand::Rng;

use base64_chunked::{encode, encode_complete, encode_rest, EncodingState};

mod utils;

fuzz_target!(|data: &[u8]| {
    let mut rng = utils::rng_from(data);
    let config = utils::random_config(&mut rng);

    let mut state = EncodingState::new();
    let mut chunked = String::new();
    let mut rest = data;
    while !rest.is_empty() {
        let (chunk, tail) = rest.split_at(rng.gen_range(1..=rest.len()));
        encode(chunk, &mut chunked, &mut state, &config).unwrap();
        rest = tail;
    }
    encode_rest(&mut chunked, &mut state, &config).unwrap();

    assert!(state.empty());
    assert_eq!(encode_complete(data, &config), chunked);
});
