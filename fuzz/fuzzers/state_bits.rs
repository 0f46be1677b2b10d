#![no_main]
use libfuzzer_sys::fuzz_target;

use base64_chunked::{config, encode, encode_rest, EncodingState};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let bits = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let Ok(mut state) = EncodingState::from_bits(bits) else {
        return;
    };

    // any state that unpacks must round trip and be safe to resume
    assert_eq!(bits, state.to_bits());

    let mut out = String::new();
    encode(&data[4..], &mut out, &mut state, &config::MIME).unwrap();
    encode_rest(&mut out, &mut state, &config::MIME).unwrap();
    assert!(state.empty());
    assert!(out.is_ascii());
});
