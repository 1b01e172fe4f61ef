//! Parse mode configuration.
//!
//! The parse mode is set via the `FIPUN_PARSE` environment variable:
//! - `lenient` (default): libc-compatible scanning. Malformed text is accepted
//!   with the primitive's fallback value (`atoi("abc") == 0`,
//!   `strtof("x") == 0.0`, out-of-range integers wrap to 32 bits).
//! - `strict`: the same scanners run, but any input a lenient run would have
//!   silently patched up is rejected with a [`ParseError`](crate::ParseError).

/// Name of the environment variable holding the parse mode.
pub const PARSE_MODE_ENV: &str = "FIPUN_PARSE";

/// How numeric input that does not scan cleanly is treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Silent fallback, exactly what `atoi` / `strtof` / `scanf` would give.
    #[default]
    Lenient,
    /// Reject empty input, missing digits, trailing junk and out-of-range values.
    Strict,
}

impl ParseMode {
    /// Parse from string (case-insensitive). Unknown names map to `Lenient`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "reject" | "checked" => Self::Strict,
            "lenient" | "default" | "silent" | "atoi" | "libc" => Self::Lenient,
            _ => Self::Lenient,
        }
    }

    /// Resolve the mode through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(PARSE_MODE_ENV)
            .map(|raw| Self::from_str_loose(&raw))
            .unwrap_or_default()
    }

    /// Read the mode from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_names() {
        assert_eq!(ParseMode::from_str_loose("STRICT"), ParseMode::Strict);
        assert_eq!(ParseMode::from_str_loose(" checked "), ParseMode::Strict);
        assert_eq!(ParseMode::from_str_loose("atoi"), ParseMode::Lenient);
        assert_eq!(ParseMode::from_str_loose("bogus"), ParseMode::Lenient);
    }

    #[test]
    fn resolve_uses_lookup() {
        let mode = ParseMode::resolve(|key| (key == PARSE_MODE_ENV).then(|| "strict".to_string()));
        assert_eq!(mode, ParseMode::Strict);
        assert_eq!(ParseMode::resolve(|_| None), ParseMode::Lenient);
    }
}
