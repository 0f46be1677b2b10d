#![no_main]
use libfuzzer_sys::fuzz_target;

use base64_chunked::{config, encode_complete};

mod utils;

fuzz_target!(|data: &[u8]| {
    let encoded = encode_complete(data, &config::STANDARD);
    let decoded = utils::reference_decode(&encoded, &config::STANDARD);
    assert_eq!(data, decoded.as_slice());
});
