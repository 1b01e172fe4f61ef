//! Text in, reinterpreted text out.
//!
//! A [`Reinterpreter`] parses one numeric form with libc scanning rules,
//! stores the bits in a [`Word32`], and renders the other form. In
//! [`ParseMode::Lenient`] every input produces a result; whatever strict mode
//! would have rejected is still recorded in [`Reinterpretation::fallback`].

use std::io::BufRead;

use crate::config::ParseMode;
use crate::error::{Error, ParseError};
use crate::stdio::printf::{FixedSpec, format_signed, sprintf_f32};
use crate::stdio::scanf::{ScanOutcome, scan_int};
use crate::stdlib::conversion::{ConversionStatus, Scanned, is_c_space, strtol_impl};
use crate::stdlib::strtof::strtof_impl;
use crate::word::Word32;

/// Parsed bits plus the issue strict mode would have raised, if any.
pub type Parsed = (Word32, Option<ParseError>);

/// How the float view is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FloatStyle {
    /// `%f` as is: `1.000000`.
    Raw,
    /// `%f` with trailing fractional zeros removed: `1`.
    #[default]
    Trimmed,
}

impl FloatStyle {
    fn spec(self) -> FixedSpec {
        match self {
            Self::Raw => FixedSpec::printf_default(),
            Self::Trimmed => FixedSpec::trimmed(),
        }
    }
}

/// Result of one reinterpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reinterpretation {
    pub word: Word32,
    /// The rendered output form.
    pub text: String,
    /// What strict mode would have rejected, when lenient mode let it through.
    pub fallback: Option<ParseError>,
}

/// Parses, reinterprets and renders under one [`ParseMode`] and integer base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reinterpreter {
    mode: ParseMode,
    base: u32,
}

impl Default for Reinterpreter {
    fn default() -> Self {
        Self::new(ParseMode::default())
    }
}

impl Reinterpreter {
    #[must_use]
    pub const fn new(mode: ParseMode) -> Self {
        Self { mode, base: 10 }
    }

    /// Radix for integer input, as for `strtol` (0 auto-detects).
    #[must_use]
    pub const fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Parse integer text into a word, `atoi` style.
    ///
    /// The `strtol` result (saturated at the `i64` limits) keeps its low 32
    /// bits, as `(int)strtol` does on an LP64 libc.
    pub fn parse_int(&self, text: &str) -> Result<Parsed, ParseError> {
        let scanned = strtol_impl(text.as_bytes(), self.base);
        let issue = self.check_int(text, &scanned);
        self.settle(Word32::from_int(scanned.value as i32), issue)
    }

    /// Parse float text into a word.
    pub fn parse_float(&self, text: &str) -> Result<Parsed, ParseError> {
        let scanned = strtof_impl(text.as_bytes());
        let issue = check_float(text, &scanned);
        self.settle(Word32::from_float(scanned.value), issue)
    }

    /// Read one integer from `reader` the way `scanf("%d")` does.
    ///
    /// Lenient mode yields zero bits when the input ends or holds no integer.
    pub fn read_int<R: BufRead>(&self, reader: &mut R) -> Result<Parsed, Error> {
        if let Some(issue) = self.invalid_base() {
            return Err(issue.into());
        }
        let (word, issue) = match scan_int(reader, self.base)? {
            ScanOutcome::Matched(scanned) => {
                let issue = i32::try_from(scanned.value)
                    .is_err()
                    .then(|| ParseError::IntegerOutOfRange {
                        input: scanned.value.to_string(),
                    });
                (Word32::from_int(scanned.value as i32), issue)
            }
            ScanOutcome::Mismatch { token } => {
                (Word32::default(), Some(ParseError::NoDigits { input: token }))
            }
            ScanOutcome::Eof => (Word32::default(), Some(ParseError::EndOfInput)),
        };
        Ok(self.settle(word, issue)?)
    }

    /// Integer text → float text.
    pub fn int_to_float(
        &self,
        text: &str,
        style: FloatStyle,
    ) -> Result<Reinterpretation, ParseError> {
        let (word, fallback) = self.parse_int(text)?;
        Ok(Reinterpretation {
            word,
            text: render_float(word, style),
            fallback,
        })
    }

    /// Integer read from `reader` → float text.
    pub fn read_int_to_float<R: BufRead>(
        &self,
        reader: &mut R,
        style: FloatStyle,
    ) -> Result<Reinterpretation, Error> {
        let (word, fallback) = self.read_int(reader)?;
        Ok(Reinterpretation {
            word,
            text: render_float(word, style),
            fallback,
        })
    }

    /// Float text → integer text.
    pub fn float_to_int(&self, text: &str) -> Result<Reinterpretation, ParseError> {
        let (word, fallback) = self.parse_float(text)?;
        Ok(Reinterpretation {
            word,
            text: render_int(word),
            fallback,
        })
    }

    fn settle(&self, word: Word32, issue: Option<ParseError>) -> Result<Parsed, ParseError> {
        match issue {
            Some(err) if self.mode.is_strict() => Err(err),
            issue => Ok((word, issue)),
        }
    }

    fn invalid_base(&self) -> Option<ParseError> {
        (self.base == 1 || self.base > 36).then_some(ParseError::InvalidBase { base: self.base })
    }

    fn check_int(&self, text: &str, scanned: &Scanned<i64>) -> Option<ParseError> {
        if let Some(issue) = self.invalid_base() {
            return Some(issue);
        }
        if let Some(issue) = check_consumed(text, scanned.consumed) {
            return Some(issue);
        }
        let fits = scanned.status == ConversionStatus::Success
            && i32::try_from(scanned.value).is_ok();
        (!fits).then(|| ParseError::IntegerOutOfRange {
            input: text.trim().to_string(),
        })
    }
}

fn check_float(text: &str, scanned: &Scanned<f32>) -> Option<ParseError> {
    if let Some(issue) = check_consumed(text, scanned.consumed) {
        return Some(issue);
    }
    (scanned.status == ConversionStatus::Overflow).then(|| ParseError::FloatOutOfRange {
        input: text.trim().to_string(),
    })
}

/// Empty input, nothing converted, or non-space bytes after the number.
fn check_consumed(text: &str, consumed: usize) -> Option<ParseError> {
    let bytes = text.as_bytes();
    if bytes.iter().all(|c| is_c_space(*c)) {
        return Some(ParseError::Empty);
    }
    if consumed == 0 {
        return Some(ParseError::NoDigits {
            input: text.to_string(),
        });
    }
    bytes[consumed..]
        .iter()
        .any(|c| !is_c_space(*c))
        .then(|| ParseError::TrailingCharacters {
            input: text.to_string(),
            offset: consumed,
        })
}

/// Render the float view of `word`.
#[must_use]
pub fn render_float(word: Word32, style: FloatStyle) -> String {
    sprintf_f32(word.as_float(), &style.spec())
}

/// Render the integer view of `word` in decimal.
#[must_use]
pub fn render_int(word: Word32) -> String {
    let mut buf = Vec::with_capacity(11);
    format_signed(i64::from(word.as_int()), &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
