//! Structured logging for the executables.
//!
//! Provides:
//! - [`LogEntry`]: one JSONL record per invocation, required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to a file (append) or any writer.
//! - [`validate_log_line`]: checks a single JSONL line against the schema.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use fipun_core::word::{FloatFields, Word32};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Input scanned cleanly.
    Pass,
    /// Lenient mode accepted input that strict mode rejects.
    Fallback,
    /// Strict mode rejected the input.
    Reject,
    /// Required argument missing.
    Usage,
}

/// IEEE-754 fields of the reinterpreted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsRecord {
    pub negative: bool,
    pub exponent: u8,
    pub fraction: u32,
}

impl From<FloatFields> for FieldsRecord {
    fn from(fields: FloatFields) -> Self {
        Self {
            negative: fields.negative,
            exponent: fields.exponent,
            fraction: fields.fraction,
        }
    }
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Parse mode in effect (`lenient` or `strict`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Raw input text; absent when read from stdin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// `0x`-prefixed hex of the shared 32 bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldsRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry with required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            program: None,
            mode: None,
            input: None,
            bits: None,
            fields: None,
            output: None,
            outcome: None,
            exit_code: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Record the word as hex bits plus its decomposed fields.
    #[must_use]
    pub fn with_word(mut self, word: Word32) -> Self {
        self.bits = Some(format!("{word:#010x}"));
        self.fields = Some(word.decompose().into());
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = Some(exit_code);
        self
    }

    /// Set free-form details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Writes JSONL entries, numbering trace ids per emitter.
pub struct LogEmitter<W: Write> {
    writer: W,
    seq: u64,
    program: String,
    run_id: String,
}

impl LogEmitter<BufWriter<std::fs::File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn append_to_file(path: &Path, program: &str) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file), program))
    }
}

impl<W: Write> LogEmitter<W> {
    pub fn new(writer: W, program: &str) -> Self {
        Self {
            writer,
            seq: 0,
            program: program.to_string(),
            run_id: run_id(),
        }
    }

    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("{}::{}::{:03}", self.program, self.run_id, self.seq)
    }

    /// Emit `entry`, filling in `trace_id` and `program` when unset.
    pub fn emit_entry(&mut self, mut entry: LogEntry) -> std::io::Result<()> {
        if entry.trace_id.is_empty() {
            entry.trace_id = self.next_trace_id();
        }
        if entry.program.is_none() {
            entry.program = Some(self.program.clone());
        }
        let line = entry.to_jsonl().map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validation error for a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for LogValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}

/// Validate a single JSONL line against the schema.
pub fn validate_log_line(line: &str) -> Result<LogEntry, Vec<LogValidationError>> {
    let invalid = |field: &str, message: String| LogValidationError {
        field: field.to_string(),
        message,
    };

    let value: serde_json::Value = serde_json::from_str(line)
        .map_err(|e| vec![invalid("<json>", format!("invalid JSON: {e}"))])?;
    let Some(obj) = value.as_object() else {
        return Err(vec![invalid("<root>", "expected JSON object".to_string())]);
    };

    let mut errors: Vec<LogValidationError> = ["timestamp", "trace_id", "level", "event"]
        .into_iter()
        .filter(|field| !obj.contains_key(*field))
        .map(|field| invalid(field, "required field missing".to_string()))
        .collect();

    if let Some(mode) = obj.get("mode").and_then(|v| v.as_str())
        && !["lenient", "strict"].contains(&mode)
    {
        errors.push(invalid("mode", format!("invalid mode: '{mode}'")));
    }
    if let Some(bits) = obj.get("bits").and_then(|v| v.as_str())
        && !is_hex_word(bits)
    {
        errors.push(invalid("bits", format!("expected 0x + 8 hex digits, got '{bits}'")));
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value(value).map_err(|e| vec![invalid("<schema>", e.to_string())])
}

fn is_hex_word(bits: &str) -> bool {
    bits.strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 8 && hex.bytes().all(|c| c.is_ascii_hexdigit()))
}

fn run_id() -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{}-{millis}", std::process::id())
}

/// RFC 3339 UTC timestamp with millisecond precision.
fn now_utc() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:03}Z",
        (secs % 86_400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
        duration.subsec_millis(),
    )
}

/// Days since 1970-01-01 to (year, month, day) in the proleptic Gregorian calendar.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_serializes_required_fields() {
        let entry = LogEntry::new("d2f::run-1::001", LogLevel::Info, "reinterpret");
        let json = entry.to_jsonl().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["timestamp"].is_string());
        assert_eq!(parsed["trace_id"], "d2f::run-1::001");
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "reinterpret");
        assert!(parsed.get("program").is_none());
        assert!(parsed.get("bits").is_none());
    }

    #[test]
    fn log_entry_with_word() {
        let entry = LogEntry::new("t", LogLevel::Info, "reinterpret")
            .with_mode("lenient")
            .with_input("1065353216")
            .with_word(Word32::from_float(1.0))
            .with_output("1")
            .with_outcome(Outcome::Pass)
            .with_exit_code(0);
        let parsed: serde_json::Value = serde_json::from_str(&entry.to_jsonl().unwrap()).unwrap();
        assert_eq!(parsed["bits"], "0x3f800000");
        assert_eq!(parsed["fields"]["exponent"], 127);
        assert_eq!(parsed["fields"]["fraction"], 0);
        assert_eq!(parsed["fields"]["negative"], false);
        assert_eq!(parsed["outcome"], "pass");
        assert_eq!(parsed["exit_code"], 0);
    }

    #[test]
    fn emitter_numbers_trace_ids() {
        let mut emitter = LogEmitter::new(Vec::new(), "f2d");
        emitter
            .emit_entry(LogEntry::new("", LogLevel::Info, "reinterpret"))
            .unwrap();
        emitter
            .emit_entry(LogEntry::new("", LogLevel::Warn, "usage"))
            .unwrap();
        let body = String::from_utf8(emitter.into_inner()).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 2);

        let first = validate_log_line(lines[0]).unwrap();
        assert!(first.trace_id.starts_with("f2d::"));
        assert!(first.trace_id.ends_with("::001"));
        assert_eq!(first.program.as_deref(), Some("f2d"));
        let second = validate_log_line(lines[1]).unwrap();
        assert!(second.trace_id.ends_with("::002"));
    }

    #[test]
    fn validate_rejects_missing_and_bad_fields() {
        let errors = validate_log_line(r#"{"timestamp":"x","level":"info"}"#).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["trace_id", "event"]);

        let errors = validate_log_line(
            r#"{"timestamp":"x","trace_id":"t","level":"info","event":"e","mode":"hardened","bits":"0x1"}"#,
        )
        .unwrap_err();
        assert_eq!(errors.len(), 2);

        assert!(validate_log_line("not json").is_err());
        assert!(validate_log_line("[]").is_err());
    }

    #[test]
    fn validate_rejects_unknown_level() {
        let errors =
            validate_log_line(r#"{"timestamp":"x","trace_id":"t","level":"fatal","event":"e"}"#)
                .unwrap_err();
        assert_eq!(errors[0].field, "<schema>");

        let errors =
            validate_log_line(r#"{"timestamp":"x","trace_id":"t","level":"debug","event":"e"}"#)
                .unwrap_err();
        assert_eq!(errors[0].field, "<schema>");
    }

    #[test]
    fn civil_dates() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
        assert_eq!(civil_from_days(20_742), (2026, 10, 16));
    }

    #[test]
    fn timestamp_shape() {
        let ts = now_utc();
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
    }
}
