#![no_main]
use libfuzzer_sys::fuzz_target;

use base64_chunked::{encode_complete, encoded_len};

mod utils;

fuzz_target!(|data: &[u8]| {
    let config = utils::random_config(&mut utils::rng_from(data));

    let encoded = encode_complete(data, &config);
    assert_eq!(Some(encoded.len()), encoded_len(data.len(), &config));

    let decoded = utils::reference_decode(&encoded, &config);
    assert_eq!(data, decoded.as_slice());
});
