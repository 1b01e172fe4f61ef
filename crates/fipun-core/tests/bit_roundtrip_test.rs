//! Integration test: bit-exact round trips between the integer and float views.
//!
//! Validates that:
//! 1. int -> float -> int is the identity on every sampled `i32`.
//! 2. float -> int -> float preserves raw bits, NaN payloads included.
//! 3. Parsing rendered integer text reproduces the same word.
//!
//! Run: cargo test -p fipun-core --test bit_roundtrip_test

use fipun_core::reinterpret::render_int;
use fipun_core::{ParseMode, Reinterpreter, Word32, float_to_int, int_to_float};

/// Every `i32` at a prime stride, plus both ends of the range.
fn sampled_ints() -> impl Iterator<Item = i32> {
    (i32::MIN..=i32::MAX)
        .step_by(65_521)
        .chain([i32::MIN, i32::MAX, -1, 0, 1])
}

/// Bit patterns at the interesting edges of each float class.
const EDGE_BITS: &[u32] = &[
    0x0000_0000, // +0
    0x8000_0000, // -0
    0x0000_0001, // smallest subnormal
    0x007F_FFFF, // largest subnormal
    0x0080_0000, // smallest normal
    0x3F80_0000, // 1.0
    0x7F7F_FFFF, // f32::MAX
    0x7F80_0000, // +inf
    0xFF80_0000, // -inf
    0x7FC0_0000, // quiet NaN
    0xFFC0_0000, // negative quiet NaN
    0x7FFF_FFFF, // quiet NaN, full payload
    0xFFFF_FFFF, // negative quiet NaN, full payload
];

#[test]
fn int_float_int_is_identity() {
    for i in sampled_ints() {
        assert_eq!(float_to_int(int_to_float(i)), i, "i = {i}");
    }
}

#[test]
fn float_int_float_preserves_bits() {
    for &bits in EDGE_BITS {
        let f = f32::from_bits(bits);
        assert_eq!(int_to_float(float_to_int(f)).to_bits(), bits, "bits = {bits:#010x}");
    }
    for i in sampled_ints() {
        let f = f32::from_bits(i as u32);
        assert_eq!(int_to_float(float_to_int(f)).to_bits(), f.to_bits());
    }
}

#[test]
fn word_views_agree() {
    for i in sampled_ints() {
        let word = Word32::from_int(i);
        assert_eq!(word.bits(), i as u32);
        assert_eq!(Word32::from_float(word.as_float()), word);
    }
}

#[test]
fn rendered_integer_text_parses_back() {
    let strict = Reinterpreter::new(ParseMode::Strict);
    for i in sampled_ints() {
        let word = Word32::from_int(i);
        let (parsed, issue) = strict.parse_int(&render_int(word)).unwrap();
        assert_eq!(parsed, word);
        assert!(issue.is_none());
    }
}

#[test]
fn float_text_to_int_matches_to_bits() {
    let lenient = Reinterpreter::default();
    for (text, expected) in [
        ("0.9", 0.9f32),
        ("1", 1.0),
        ("-2.5", -2.5),
        ("3.4028235e38", f32::MAX),
        ("1.17549435e-38", f32::MIN_POSITIVE),
        ("1e-45", f32::from_bits(1)),
    ] {
        let out = lenient.float_to_int(text).unwrap();
        assert_eq!(out.text, (expected.to_bits() as i32).to_string(), "text = {text}");
    }
}
