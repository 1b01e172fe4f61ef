//! Runtime configuration for the executables.
//!
//! Resolved once per process from the environment, then adjusted by flags:
//! - `FIPUN_PARSE`: `lenient` (default) or `strict`, see [`ParseMode`].
//! - `FIPUN_LOG`: path of a JSONL log to append one record per invocation to.
//!   Unset or empty disables logging.

use std::path::PathBuf;

use fipun_core::ParseMode;

/// Name of the environment variable holding the structured log path.
pub const LOG_PATH_ENV: &str = "FIPUN_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub parse_mode: ParseMode,
    pub log_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Resolve through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_path = lookup(LOG_PATH_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);
        Self {
            parse_mode: ParseMode::resolve(&lookup),
            log_path,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// `--strict` on the command line wins over the environment.
    #[must_use]
    pub fn with_strict_flag(mut self, strict: bool) -> Self {
        if strict {
            self.parse_mode = ParseMode::Strict;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fipun_core::config::PARSE_MODE_ENV;

    fn lookup_from(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults_when_unset() {
        let config = RuntimeConfig::resolve(|_| None);
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.parse_mode, ParseMode::Lenient);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn reads_both_variables() {
        let config = RuntimeConfig::resolve(lookup_from(&[
            (PARSE_MODE_ENV, "strict"),
            (LOG_PATH_ENV, "/tmp/fipun.jsonl"),
        ]));
        assert_eq!(config.parse_mode, ParseMode::Strict);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/fipun.jsonl")));
    }

    #[test]
    fn empty_log_path_disables_logging() {
        let config = RuntimeConfig::resolve(lookup_from(&[(LOG_PATH_ENV, "  ")]));
        assert!(config.log_path.is_none());
    }

    #[test]
    fn strict_flag_overrides_env() {
        let config = RuntimeConfig::resolve(lookup_from(&[(PARSE_MODE_ENV, "lenient")]))
            .with_strict_flag(true);
        assert_eq!(config.parse_mode, ParseMode::Strict);

        let config = RuntimeConfig::resolve(lookup_from(&[(PARSE_MODE_ENV, "strict")]))
            .with_strict_flag(false);
        assert_eq!(config.parse_mode, ParseMode::Strict);
    }
}
