//! `%f` and `%d` rendering.
//!
//! Floats are rendered the way `printf("%f", x)` renders a `float` argument:
//! promoted to `double`, fixed-point, six fractional digits by default, with
//! the exact decimal expansion of the binary value (no shortest-round-trip
//! shortcut). `nan`/`inf` follow glibc spelling, including the sign of NaN.
//!
//! The optional trim pass removes trailing zeros from the fraction and stops
//! at the decimal point: `1.000000` becomes `1`, never `1.` and never eats into
//! the integer digits.

extern crate alloc;

/// Default `%f` precision.
pub const DEFAULT_PRECISION: usize = 6;

/// A resolved fixed-point conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSpec {
    pub precision: usize,
    /// Drop trailing fractional zeros (and a bare point) after rendering.
    pub trim_zeros: bool,
}

impl Default for FixedSpec {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            trim_zeros: false,
        }
    }
}

impl FixedSpec {
    /// Plain `%f`.
    #[must_use]
    pub fn printf_default() -> Self {
        Self::default()
    }

    /// `%f` followed by the trailing-zero trim.
    #[must_use]
    pub fn trimmed() -> Self {
        Self {
            trim_zeros: true,
            ..Self::default()
        }
    }
}

/// Render a float to `buf` according to `spec`.
pub fn format_fixed(value: f64, spec: &FixedSpec, buf: &mut Vec<u8>) {
    let negative = value.is_sign_negative();
    if negative {
        buf.push(b'-');
    }

    if value.is_nan() {
        buf.extend_from_slice(b"nan");
        return;
    }
    if value.is_infinite() {
        buf.extend_from_slice(b"inf");
        return;
    }

    let mut body = alloc::format!("{:.prec$}", value.abs(), prec = spec.precision);
    if spec.trim_zeros {
        strip_trailing_zeros(&mut body);
    }
    buf.extend_from_slice(body.as_bytes());
}

/// Convenience: render a single-precision value (promoted, as varargs do).
#[must_use]
pub fn sprintf_f32(value: f32, spec: &FixedSpec) -> String {
    let mut buf = Vec::with_capacity(16);
    // Widening does not promise to keep a NaN's sign bit; copy it over.
    let sign = if value.is_sign_negative() { -1.0 } else { 1.0 };
    format_fixed(f64::from(value).copysign(sign), spec, &mut buf);
    // Only ASCII is ever written.
    String::from_utf8_lossy(&buf).into_owned()
}

/// Render a signed integer in decimal (`%d`).
pub fn format_signed(value: i64, buf: &mut Vec<u8>) {
    let mut digits = [0u8; 20];
    let len = render_digits(value.unsigned_abs(), &mut digits);
    if value < 0 {
        buf.push(b'-');
    }
    buf.extend_from_slice(&digits[digits.len() - len..]);
}

/// Render `value` in base 10 into the end of `buf`; returns the digit count.
fn render_digits(mut value: u64, buf: &mut [u8; 20]) -> usize {
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    buf.len() - pos
}

/// Remove trailing zeros after the decimal point, then a bare point.
pub fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f32, spec: FixedSpec) -> String {
        sprintf_f32(value, &spec)
    }

    #[test]
    fn test_format_fixed_default_precision() {
        assert_eq!(render(1.0, FixedSpec::printf_default()), "1.000000");
        assert_eq!(render(0.0, FixedSpec::printf_default()), "0.000000");
        assert_eq!(render(-2.5, FixedSpec::printf_default()), "-2.500000");
        // 0.9f is 0.89999997615814208984375 exactly.
        assert_eq!(render(0.9, FixedSpec::printf_default()), "0.900000");
    }

    #[test]
    fn test_format_fixed_exact_expansion() {
        assert_eq!(
            render(f32::MAX, FixedSpec::printf_default()),
            "340282346638528859811704183484516925440.000000"
        );
        assert_eq!(render(1e-7, FixedSpec::printf_default()), "0.000000");
        assert_eq!(render(16_777_217.0, FixedSpec::printf_default()), "16777216.000000");
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        assert_eq!(render(-0.0, FixedSpec::printf_default()), "-0.000000");
        assert_eq!(render(-0.0, FixedSpec::trimmed()), "-0");
    }

    #[test]
    fn test_trim_stops_at_point() {
        assert_eq!(render(1.0, FixedSpec::trimmed()), "1");
        assert_eq!(render(0.0, FixedSpec::trimmed()), "0");
        assert_eq!(render(100.0, FixedSpec::trimmed()), "100");
        assert_eq!(render(0.5, FixedSpec::trimmed()), "0.5");
        assert_eq!(render(0.9, FixedSpec::trimmed()), "0.9");
        assert_eq!(render(-1.25, FixedSpec::trimmed()), "-1.25");
    }

    #[test]
    fn test_format_fixed_specials() {
        assert_eq!(render(f32::NAN, FixedSpec::trimmed()), "nan");
        assert_eq!(render(f32::from_bits(0xFFC0_0000), FixedSpec::trimmed()), "-nan");
        assert_eq!(render(f32::INFINITY, FixedSpec::printf_default()), "inf");
        assert_eq!(render(f32::NEG_INFINITY, FixedSpec::trimmed()), "-inf");
        assert_eq!(render(f32::from_bits(0xFFFF_FFF4), FixedSpec::trimmed()), "-nan");
    }

    #[test]
    fn test_precision_zero_rounds() {
        let spec = FixedSpec {
            precision: 0,
            ..FixedSpec::default()
        };
        assert_eq!(render(2.75, spec), "3");
        assert_eq!(render(100.0, FixedSpec { trim_zeros: true, ..spec }), "100");
    }

    #[test]
    fn test_format_signed() {
        let mut buf = Vec::new();
        format_signed(1_063_675_494, &mut buf);
        assert_eq!(&buf, b"1063675494");

        buf.clear();
        format_signed(i64::from(i32::MIN), &mut buf);
        assert_eq!(&buf, b"-2147483648");

        buf.clear();
        format_signed(0, &mut buf);
        assert_eq!(&buf, b"0");

        buf.clear();
        format_signed(i64::MIN, &mut buf);
        assert_eq!(&buf, b"-9223372036854775808");
    }
}
