//! 32-bit storage shared by the integer and float views.
//!
//! Every conversion here is a reinterpretation of the same four bytes. Nothing
//! goes through a numeric cast: integer `3` becomes whatever float the pattern
//! `0x0000_0003` encodes (a subnormal), not `3.0`.

use core::fmt;

const SIGN_MASK: u32 = 0x8000_0000;
const EXPONENT_MASK: u32 = 0x7F80_0000;
const FRACTION_MASK: u32 = 0x007F_FFFF;
const FRACTION_BITS: u32 = 23;

/// Raw 32 bits, readable as an `i32` or as an `f32`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Word32(u32);

/// IEEE-754 fields of a [`Word32`], exponent still biased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFields {
    pub negative: bool,
    /// Biased exponent, 0..=255.
    pub exponent: u8,
    /// Low 23 bits (implicit leading bit not included).
    pub fraction: u32,
}

impl Word32 {
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn from_int(value: i32) -> Self {
        // Same-width integer casts preserve the two's complement bits.
        Self(value as u32)
    }

    #[must_use]
    pub fn from_float(value: f32) -> Self {
        Self(value.to_bits())
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn as_int(self) -> i32 {
        self.0 as i32
    }

    /// Read the word as a float. NaN payloads and the sign bit survive intact.
    #[must_use]
    pub fn as_float(self) -> f32 {
        f32::from_bits(self.0)
    }

    #[must_use]
    pub const fn decompose(self) -> FloatFields {
        FloatFields {
            negative: self.0 & SIGN_MASK != 0,
            exponent: ((self.0 & EXPONENT_MASK) >> FRACTION_BITS) as u8,
            fraction: self.0 & FRACTION_MASK,
        }
    }
}

impl From<i32> for Word32 {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl From<f32> for Word32 {
    fn from(value: f32) -> Self {
        Self::from_float(value)
    }
}

impl fmt::Debug for Word32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word32({:#010x})", self.0)
    }
}

impl fmt::LowerHex for Word32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Reinterpret the bits of `value` as an `f32`.
#[must_use]
pub fn int_to_float(value: i32) -> f32 {
    Word32::from_int(value).as_float()
}

/// Reinterpret the bits of `value` as an `i32`.
#[must_use]
pub fn float_to_int(value: f32) -> i32 {
    Word32::from_float(value).as_int()
}
