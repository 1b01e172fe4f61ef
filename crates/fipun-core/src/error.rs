//! Error types.

use thiserror::Error;

/// Why a piece of numeric text was rejected in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("no number found in {input:?}")]
    NoDigits { input: String },
    #[error("unexpected characters in {input:?} at byte {offset}")]
    TrailingCharacters { input: String, offset: usize },
    #[error("{input:?} does not fit in a 32-bit signed integer")]
    IntegerOutOfRange { input: String },
    #[error("{input:?} is out of range for single precision")]
    FloatOutOfRange { input: String },
    #[error("unsupported base {base}, expected 0 or 2..=36")]
    InvalidBase { base: u32 },
    #[error("end of input before an integer was read")]
    EndOfInput,
}

/// Top-level error for reinterpretation requests.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
