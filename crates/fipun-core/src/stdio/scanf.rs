//! `scanf("%d")`-style integer input.
//!
//! Only the single-conversion case is supported: skip leading whitespace
//! (blank lines included), then scan one integer with `strtol` rules. The
//! reader is consumed line by line, so an interactive terminal gets an answer
//! as soon as a line holding a number is entered.

use std::io::{self, BufRead};

use crate::stdlib::conversion::{Scanned, skip_space, strtol_impl};

/// What a single `%d` conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// An integer was read; `consumed` counts bytes of its line.
    Matched(Scanned<i64>),
    /// Input did not start with an integer. Holds the offending token.
    Mismatch { token: String },
    /// Input ended before any non-whitespace byte.
    Eof,
}

/// Read one integer in `base` from `reader`.
pub fn scan_int<R: BufRead>(reader: &mut R, base: u32) -> io::Result<ScanOutcome> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(ScanOutcome::Eof);
        }
        let start = skip_space(&line, 0);
        if start == line.len() {
            continue;
        }

        let scanned = strtol_impl(&line[start..], base);
        if scanned.converted() {
            return Ok(ScanOutcome::Matched(Scanned {
                consumed: start + scanned.consumed,
                ..scanned
            }));
        }

        let token_end = line[start..]
            .iter()
            .position(u8::is_ascii_whitespace)
            .map_or(line.len(), |p| start + p);
        return Ok(ScanOutcome::Mismatch {
            token: String::from_utf8_lossy(&line[start..token_end]).into_owned(),
        });
    }
}
