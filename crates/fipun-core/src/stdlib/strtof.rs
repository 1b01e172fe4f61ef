//! Single-precision conversion (`strtof`).
//!
//! The scanner finds the longest prefix `strtof` would accept and converts it
//! straight to `f32`. Decimal text is rounded once, directly to single
//! precision, never through an intermediate `f64`, so `0.9` yields
//! `0x3F66_6666`. Hexadecimal floats (`0x1.8p3`) are rounded here with
//! round-half-to-even, including into the subnormal range.

use super::conversion::{ConversionStatus, Scanned, skip_space};

const HEX_MANTISSA_LIMIT: u64 = 1 << 60;
const EXPONENT_CLAMP: i64 = 100_000;

/// `strtof`: returns `(value, consumed_bytes)`.
#[must_use]
pub fn strtof(s: &[u8]) -> (f32, usize) {
    let scanned = strtof_impl(s);
    (scanned.value, scanned.consumed)
}

/// Full `strtof` scanner.
///
/// `Overflow` is reported when finite text rounds to infinity, `Underflow`
/// when text with a non-zero digit rounds to zero.
#[must_use]
pub fn strtof_impl(s: &[u8]) -> Scanned<f32> {
    let start = skip_space(s, 0);
    let mut i = start;
    let negative = match s.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    if let Some(scanned) = scan_special(s, i, negative) {
        return scanned;
    }
    if let Some(scanned) = scan_hex(s, i, negative) {
        return scanned;
    }
    scan_decimal(s, start, i)
}

fn starts_with_ignore_case(s: &[u8], at: usize, word: &[u8]) -> bool {
    s.get(at..at + word.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(word))
}

/// `inf`, `infinity`, `nan` and `nan(chars)`.
fn scan_special(s: &[u8], i: usize, negative: bool) -> Option<Scanned<f32>> {
    let signed = |v: f32| if negative { -v } else { v };

    if starts_with_ignore_case(s, i, b"infinity") {
        return Some(Scanned {
            value: signed(f32::INFINITY),
            consumed: i + 8,
            status: ConversionStatus::Success,
        });
    }
    if starts_with_ignore_case(s, i, b"inf") {
        return Some(Scanned {
            value: signed(f32::INFINITY),
            consumed: i + 3,
            status: ConversionStatus::Success,
        });
    }
    if starts_with_ignore_case(s, i, b"nan") {
        let mut end = i + 3;
        if s.get(end) == Some(&b'(') {
            let body = end + 1;
            let mut j = body;
            while s
                .get(j)
                .is_some_and(|c| c.is_ascii_alphanumeric() || *c == b'_')
            {
                j += 1;
            }
            if s.get(j) == Some(&b')') {
                end = j + 1;
            }
        }
        let nan = if negative {
            f32::from_bits(0xFFC0_0000)
        } else {
            f32::from_bits(0x7FC0_0000)
        };
        return Some(Scanned {
            value: nan,
            consumed: end,
            status: ConversionStatus::Success,
        });
    }
    None
}

/// Decimal literal: digits, optional fraction, optional exponent.
fn scan_decimal(s: &[u8], start: usize, digits_at: usize) -> Scanned<f32> {
    let mut end = digits_at;
    let mut mantissa_digits = 0usize;
    let mut nonzero_digit = false;

    while let Some(c) = s.get(end).filter(|c| c.is_ascii_digit()) {
        nonzero_digit |= *c != b'0';
        mantissa_digits += 1;
        end += 1;
    }
    if s.get(end) == Some(&b'.') {
        end += 1;
        while let Some(c) = s.get(end).filter(|c| c.is_ascii_digit()) {
            nonzero_digit |= *c != b'0';
            mantissa_digits += 1;
            end += 1;
        }
    }
    if mantissa_digits == 0 {
        return Scanned::nothing(ConversionStatus::Success);
    }
    end = scan_exponent(s, end, b'e');

    // s[start..end] is sign, digits, point and exponent only: ASCII.
    let Some(value) = core::str::from_utf8(&s[start..end])
        .ok()
        .and_then(|text| text.parse::<f32>().ok())
    else {
        return Scanned::nothing(ConversionStatus::Success);
    };

    let status = if value.is_infinite() {
        ConversionStatus::Overflow
    } else if value == 0.0 && nonzero_digit {
        ConversionStatus::Underflow
    } else {
        ConversionStatus::Success
    };
    Scanned {
        value,
        consumed: end,
        status,
    }
}

/// Consume `<marker>[+-]digits` at `at` if complete; otherwise leave it alone.
fn scan_exponent(s: &[u8], at: usize, marker: u8) -> usize {
    if !s.get(at).is_some_and(|c| c.to_ascii_lowercase() == marker) {
        return at;
    }
    let mut j = at + 1;
    if matches!(s.get(j), Some(b'+' | b'-')) {
        j += 1;
    }
    let digits_at = j;
    while s.get(j).is_some_and(u8::is_ascii_digit) {
        j += 1;
    }
    if j == digits_at { at } else { j }
}

fn parse_exponent(s: &[u8]) -> i64 {
    let (negative, digits) = match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut acc: i64 = 0;
    for c in digits {
        acc = (acc * 10 + i64::from(c - b'0')).min(EXPONENT_CLAMP);
    }
    if negative { -acc } else { acc }
}

/// Hexadecimal float: `0x` hex digits, optional fraction, optional `p` exponent.
fn scan_hex(s: &[u8], i: usize, negative: bool) -> Option<Scanned<f32>> {
    if s.get(i) != Some(&b'0') || !matches!(s.get(i + 1), Some(b'x' | b'X')) {
        return None;
    }
    let first = s.get(i + 2)?;
    let leads_with_point = *first == b'.' && s.get(i + 3).is_some_and(u8::is_ascii_hexdigit);
    if !first.is_ascii_hexdigit() && !leads_with_point {
        // "0x" with nothing after converts as the "0" alone.
        return None;
    }

    let mut end = i + 2;
    let mut mantissa: u64 = 0;
    let mut sticky = false;
    let mut exp2: i64 = 0;
    let mut seen_point = false;
    loop {
        match s.get(end) {
            Some(b'.') if !seen_point => seen_point = true,
            Some(c) if c.is_ascii_hexdigit() => {
                let digit = u64::from(hex_value(*c));
                if mantissa < HEX_MANTISSA_LIMIT {
                    mantissa = mantissa * 16 + digit;
                    if seen_point {
                        exp2 -= 4;
                    }
                } else {
                    sticky |= digit != 0;
                    if !seen_point {
                        exp2 += 4;
                    }
                }
            }
            _ => break,
        }
        end += 1;
    }

    let exp_end = scan_exponent(s, end, b'p');
    if exp_end != end {
        exp2 += parse_exponent(&s[end + 1..exp_end]);
        end = exp_end;
    }
    let exp2 = exp2.clamp(-EXPONENT_CLAMP, EXPONENT_CLAMP) as i32;

    let value = round_binary(mantissa, sticky, exp2, negative);
    let status = if value.is_infinite() {
        ConversionStatus::Overflow
    } else if value == 0.0 && (mantissa != 0 || sticky) {
        ConversionStatus::Underflow
    } else {
        ConversionStatus::Success
    };
    Some(Scanned {
        value,
        consumed: end,
        status,
    })
}

fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

/// Round `mantissa * 2^exp2` (plus a sticky tail below the mantissa) to `f32`.
fn round_binary(mantissa: u64, sticky: bool, exp2: i32, negative: bool) -> f32 {
    let sign = if negative { 0x8000_0000u32 } else { 0 };
    if mantissa == 0 {
        return f32::from_bits(sign);
    }

    let shift_in = mantissa.leading_zeros();
    let m = mantissa << shift_in;
    // Unbiased exponent of the leading one bit.
    let lead = exp2 - shift_in as i32 + 63;
    // Significant bits the result can hold at this magnitude.
    let keep = if lead >= -126 { 24 } else { lead + 150 };

    if keep < 0 {
        return f32::from_bits(sign);
    }
    if keep == 0 {
        // Between 2^-150 and 2^-149: exactly half rounds to even (zero).
        let exact_half = m == 1 << 63 && !sticky;
        return f32::from_bits(sign | u32::from(!exact_half));
    }

    let dropped = 64 - keep as u32;
    let mut kept = m >> dropped;
    let rem = m & ((1u64 << dropped) - 1);
    let half = 1u64 << (dropped - 1);
    if rem > half || (rem == half && (sticky || kept & 1 == 1)) {
        kept += 1;
    }

    if lead < -126 {
        // Subnormal: a carry into bit 23 lands exactly on the smallest normal.
        return f32::from_bits(sign | kept as u32);
    }

    let mut lead = lead;
    if kept == 1 << 24 {
        kept >>= 1;
        lead += 1;
    }
    if lead > 127 {
        return f32::from_bits(sign | 0x7F80_0000);
    }
    let biased = (lead + 127) as u32;
    f32::from_bits(sign | (biased << 23) | (kept as u32 & 0x007F_FFFF))
}
