use crate::protocol::{divide_two, is_range_unit_format};
use crate::{parse_content_range, stringify_content_range, ContentRange, Range};
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const TOKEN_CHARS: &[u8] = b"!#$%&'*+-.^_`|~0123456789ABCXYZabcxyz";
const NOISE_CHARS: &[u8] = b"0123456789 -/*\"\t,;+bytes";

fn random_unit(rng: &mut SmallRng) -> String {
    if rng.random_bool(0.5) {
        return "bytes".to_string();
    }
    let len = rng.random_range(1..12);
    (0..len)
        .map(|_| TOKEN_CHARS[rng.random_range(0..TOKEN_CHARS.len())] as char)
        .collect()
}

fn random_position(rng: &mut SmallRng) -> u64 {
    match rng.random_range(0..4) {
        0 => 0,
        1 => rng.random_range(0..100),
        2 => rng.random(),
        _ => u64::MAX - rng.random_range(0..3),
    }
}

/// Generate a semantically valid value.
fn generate_valid_content_range(rng: &mut SmallRng) -> ContentRange {
    let unit = random_unit(rng);

    if rng.random_bool(0.25) {
        return ContentRange::unsatisfied(unit, random_position(rng));
    }

    let a = random_position(rng);
    let b = random_position(rng);
    let (first_pos, last_pos) = (a.min(b), a.max(b));
    let complete_length = if rng.random_bool(0.3) || last_pos == u64::MAX {
        None
    } else {
        Some(rng.random_range(last_pos + 1..=u64::MAX))
    };

    ContentRange::range_resp(unit, first_pos, last_pos, complete_length)
}

/// Round-trip valid values through the serializer and parser.
fn fuzz_round_trip(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);

    for _ in 0..rng.random_range(1..64) {
        let value = generate_valid_content_range(&mut rng);
        let text = stringify_content_range(&value).unwrap();
        assert_eq!(parse_content_range(&text).unwrap(), value, "{text}");
    }
}

/// Mutate valid header values and check the parser stays consistent.
fn fuzz_parser_with_mutated_values(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);

    let value = generate_valid_content_range(&mut rng);
    let mut text = stringify_content_range(&value).unwrap().into_bytes();

    for _ in 0..rng.random_range(0..6) {
        if text.is_empty() {
            break;
        }
        let idx = rng.random_range(0..text.len());
        match rng.random_range(0..3) {
            0 => text[idx] = NOISE_CHARS[rng.random_range(0..NOISE_CHARS.len())],
            1 => text.insert(idx, NOISE_CHARS[rng.random_range(0..NOISE_CHARS.len())]),
            2 => {
                text.remove(idx);
            }
            _ => unreachable!(),
        }
    }

    let text = String::from_utf8(text).unwrap();
    match parse_content_range(&text) {
        Ok(parsed) => {
            let (unit, _) = divide_two(&text, " ").unwrap();
            assert!(is_range_unit_format(unit));
            if let Range::Resp(resp) = parsed.range {
                assert!(resp.first_pos <= resp.last_pos);
                assert!(resp.complete_length.map_or(true, |len| resp.last_pos < len));
            }
            let canonical = stringify_content_range(&parsed).unwrap();
            assert_eq!(parse_content_range(&canonical).unwrap(), parsed);
        }
        Err(err) => {
            assert!(err.is_syntax() || err.is_semantic(), "{text}: {err}");
        }
    }
}

#[test]
fn test_round_trip_fuzz_once() {
    fuzz_round_trip(42);
}

#[test]
fn test_parser_fuzz_mutated_once() {
    for seed in 0..256 {
        fuzz_parser_with_mutated_values(seed);
    }
}

#[test]
#[ignore]
fn test_parser_fuzz_forever() {
    for seed in 0.. {
        if seed % 1000 == 0 {
            println!("Fuzzing seed {}", seed);
        }
        fuzz_round_trip(seed);
        fuzz_parser_with_mutated_values(seed);
    }
}
