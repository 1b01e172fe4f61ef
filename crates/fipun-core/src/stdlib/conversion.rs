//! Integer conversion (`strtol`).
//!
//! `atoi` is `(int)strtol(s, NULL, 10)`; the truncation to 32 bits happens
//! where the result is stored in a word.

/// Outcome flag of a string-to-number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Success,
    Overflow,
    Underflow,
    InvalidBase,
}

/// A scanned value together with how much of the input produced it.
///
/// `consumed == 0` means no conversion was performed and `value` is the
/// fallback (zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scanned<T> {
    pub value: T,
    pub consumed: usize,
    pub status: ConversionStatus,
}

impl<T: Default> Scanned<T> {
    pub(crate) fn nothing(status: ConversionStatus) -> Self {
        Self {
            value: T::default(),
            consumed: 0,
            status,
        }
    }
}

impl<T> Scanned<T> {
    /// True when at least one character was converted.
    #[must_use]
    pub const fn converted(&self) -> bool {
        self.consumed > 0
    }
}

/// `strtol`: returns `(value, consumed_bytes)`.
#[must_use]
pub fn strtol(s: &[u8], base: u32) -> (i64, usize) {
    let scanned = strtol_impl(s, base);
    (scanned.value, scanned.consumed)
}

/// Full `strtol` scanner.
///
/// Leading whitespace and one sign are accepted. `base == 0` picks 16 for a
/// `0x` prefix, 8 for a leading `0`, 10 otherwise; `base == 16` also accepts an
/// optional `0x` prefix. A `0x` not followed by a hex digit converts as just
/// the `0`.
#[must_use]
pub fn strtol_impl(s: &[u8], base: u32) -> Scanned<i64> {
    if base == 1 || base > 36 {
        return Scanned::nothing(ConversionStatus::InvalidBase);
    }

    let mut i = skip_space(s, 0);
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

    let (radix, digits_at) = detect_base(s, i, base);
    let limit: u64 = if negative {
        i64::MIN.unsigned_abs()
    } else {
        i64::MAX as u64
    };

    let mut acc: u64 = 0;
    let mut overflow = false;
    let mut end = digits_at;
    while let Some(digit) = s.get(end).and_then(|&c| digit_value(c, radix)) {
        if !overflow {
            match acc
                .checked_mul(radix)
                .and_then(|v| v.checked_add(digit))
                .filter(|&v| v <= limit)
            {
                Some(v) => acc = v,
                None => overflow = true,
            }
        }
        end += 1;
    }

    if end == digits_at {
        return Scanned::nothing(ConversionStatus::Success);
    }

    let (value, status) = match (overflow, negative) {
        (true, true) => (i64::MIN, ConversionStatus::Underflow),
        (true, false) => (i64::MAX, ConversionStatus::Overflow),
        (false, true) => ((acc as i64).wrapping_neg(), ConversionStatus::Success),
        (false, false) => (acc as i64, ConversionStatus::Success),
    };
    Scanned {
        value,
        consumed: end,
        status,
    }
}

/// Index of the first non-whitespace byte at or after `from`.
pub(crate) fn skip_space(s: &[u8], from: usize) -> usize {
    let mut i = from;
    while s.get(i).is_some_and(|c| is_c_space(*c)) {
        i += 1;
    }
    i
}

/// C `isspace` in the "C" locale (includes vertical tab, unlike Rust's
/// `is_ascii_whitespace`).
pub(crate) const fn is_c_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn has_hex_prefix(s: &[u8], i: usize) -> bool {
    s.get(i) == Some(&b'0')
        && matches!(s.get(i + 1), Some(b'x' | b'X'))
        && s.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
}

/// Resolve the effective radix and where its digits start.
fn detect_base(s: &[u8], i: usize, base: u32) -> (u64, usize) {
    match base {
        0 if has_hex_prefix(s, i) => (16, i + 2),
        0 if s.get(i) == Some(&b'0') => (8, i),
        0 => (10, i),
        16 if has_hex_prefix(s, i) => (16, i + 2),
        b => (u64::from(b), i),
    }
}

fn digit_value(c: u8, radix: u64) -> Option<u64> {
    let d = match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'z' => c - b'a' + 10,
        b'A'..=b'Z' => c - b'A' + 10,
        _ => return None,
    };
    (u64::from(d) < radix).then_some(u64::from(d))
}
