// rstest_reuse template functions have unused variables
#![allow(unused_variables)]

use rand::{Rng, SeedableRng};
use rstest::rstest;
use rstest_reuse::{self, apply, template};

use base64_chunked::{
    config::{self, Config},
    encode, encode_complete, encode_complete_buf, encode_rest, encoded_len,
    padding::Padding,
    EncodingState,
};

use self::helpers::*;

mod helpers;

// the case::foo syntax includes the "foo" in the generated test method names
#[template]
#[rstest(config,
case::standard(config::STANDARD),
case::standard_no_pad(config::STANDARD_NO_PAD),
case::url_safe(config::URL_SAFE),
case::url_safe_no_pad(config::URL_SAFE_NO_PAD),
case::mime(config::MIME),
case::pem(config::PEM),
)]
fn all_presets(config: Config) {}

#[apply(all_presets)]
fn empty_input_encodes_to_nothing(config: Config) {
    assert_eq!("", encode_complete(b"", &config));
    assert_eq!(Some(0), encoded_len(0, &config));
}

#[apply(all_presets)]
fn roundtrip_random_with_reference_decoder(config: Config) {
    let mut rng = rand::rngs::SmallRng::from_entropy();
    let mut input = Vec::new();

    for _ in 0..2_000 {
        input.clear();
        let len = rng.gen_range(0..1_000);
        input.extend((0..len).map(|_| rng.gen::<u8>()));

        let encoded = encode_complete(&input, &config);

        assert_eq!(encoded_len(input.len(), &config), Some(encoded.len()));
        assert_eq!(input, reference_decode(&encoded, &config));
    }
}

#[apply(all_presets)]
fn every_partition_of_short_input(config: Config) {
    let input = b"partitions";

    // short enough to try every set of cut points
    for len in 0..=input.len() {
        let input = &input[..len];
        let expected = encode_complete(input, &config);
        let cut_points = len.saturating_sub(1);

        for mask in 0_u32..(1 << cut_points) {
            let mut state = EncodingState::new();
            let mut out = String::new();
            let mut start = 0;

            for i in 1..len {
                if mask & (1 << (i - 1)) != 0 {
                    encode(&input[start..i], &mut out, &mut state, &config).unwrap();
                    start = i;
                }
            }
            encode(&input[start..], &mut out, &mut state, &config).unwrap();
            encode_rest(&mut out, &mut state, &config).unwrap();

            assert_eq!(expected, out, "mask {:b}", mask);
            assert!(state.empty());
        }
    }
}

#[apply(all_presets)]
fn random_chunking_matches_complete(config: Config) {
    let mut rng = rand::rngs::SmallRng::from_entropy();

    for _ in 0..200 {
        let len = rng.gen_range(0..5_000);
        let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let mut state = EncodingState::new();
        let mut out = Vec::<u8>::new();
        let mut rest = &input[..];
        while !rest.is_empty() {
            let (chunk, tail) = rest.split_at(rng.gen_range(1..=rest.len()));
            encode(chunk, &mut out, &mut state, &config).unwrap();
            rest = tail;
        }
        encode_rest(&mut out, &mut state, &config).unwrap();

        assert_eq!(encode_complete(&input, &config).as_bytes(), &out[..]);
    }
}

#[apply(all_presets)]
fn state_survives_packing_between_chunks(config: Config) {
    let input = b"a session parked in an integer between every byte";

    let mut bits = EncodingState::new().to_bits();
    let mut out = String::new();
    for b in input.iter() {
        let mut state = EncodingState::from_bits(bits).unwrap();
        encode(&[*b], &mut out, &mut state, &config).unwrap();
        bits = state.to_bits();
    }
    let mut state = EncodingState::from_bits(bits).unwrap();
    encode_rest(&mut out, &mut state, &config).unwrap();

    assert_eq!(encode_complete(&input[..], &config), out);
}

#[test]
fn padding_boundaries() {
    assert_eq!("YQ==", encode_complete("a", &config::STANDARD));
    assert_eq!("YWE=", encode_complete("aa", &config::STANDARD));
    assert_eq!("YWFh", encode_complete("aaa", &config::STANDARD));

    assert_eq!("YQ", encode_complete("a", &config::STANDARD_NO_PAD));
    assert_eq!("YWE", encode_complete("aa", &config::STANDARD_NO_PAD));
    assert_eq!("YWFh", encode_complete("aaa", &config::STANDARD_NO_PAD));
}

#[test]
fn alphabet_selection() {
    assert_eq!("+/A=", encode_complete(&[0xFB_u8, 0xF0], &config::STANDARD));
    assert_eq!("-_A=", encode_complete(&[0xFB_u8, 0xF0], &config::URL_SAFE));
}

#[test]
fn line_break_placement() {
    let input = [0xA5_u8; 100];

    let mime = encode_complete(&input[..], &config::MIME);
    assert_eq!(vec![76], line_break_positions(&mime));

    let pem = encode_complete(&input[..], &config::PEM);
    assert_eq!(vec![64, 129], line_break_positions(&pem));

    let none = encode_complete(&input[..], &config::STANDARD);
    assert!(line_break_positions(&none).is_empty());
    assert_eq!(136, none.len());
}

#[test]
fn state_emptiness_tracks_consumed_length() {
    let mut state = EncodingState::new();
    let mut out = String::new();
    assert!(state.empty());

    let mut consumed = 0;
    for chunk in [&b"x"[..], b"yz", b"abcd", b"ef", b"", b"gh"] {
        encode(chunk, &mut out, &mut state, &config::STANDARD).unwrap();
        consumed += chunk.len();
        assert_eq!(consumed % 3 == 0, state.empty(), "after {} bytes", consumed);
    }

    assert!(!state.empty());
    encode_rest(&mut out, &mut state, &config::STANDARD).unwrap();
    assert!(state.empty());
    assert_eq!(encode_complete("xyzabcdefgh", &config::STANDARD), out);
}

#[test]
fn clear_is_idempotent() {
    let mut state = EncodingState::new();
    let mut out = String::new();
    encode(b"ab", &mut out, &mut state, &config::MIME).unwrap();
    assert!(!state.empty());

    state.clear();
    assert_eq!(EncodingState::new(), state);
    state.clear();
    assert_eq!(EncodingState::new(), state);
}

#[test]
fn encode_complete_buf_appends() {
    let mut buf = String::from("data:");
    encode_complete_buf(b"hello", &config::URL_SAFE_NO_PAD, &mut buf);
    encode_complete_buf(b"!", &config::URL_SAFE, &mut buf);

    assert_eq!("data:aGVsbG8IQ==", buf);
}

#[test]
fn wide_sink_matches_narrow_sink() {
    let input = b"wide characters";
    let config = config::STANDARD.with_padding(Padding::None);

    let mut wide = Vec::<u16>::new();
    let mut state = EncodingState::new();
    encode(input, &mut wide, &mut state, &config).unwrap();
    encode_rest(&mut wide, &mut state, &config).unwrap();

    assert_eq!(
        encode_complete(input, &config),
        String::from_utf16(&wide).unwrap()
    );
}
