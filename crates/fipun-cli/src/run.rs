//! One invocation of a reinterpreting program: evaluate, print, log.

use std::io::{self, BufRead, Write};

use fipun_core::reinterpret::Reinterpretation;
use fipun_core::{FloatStyle, ParseMode, Reinterpreter};

use crate::config::RuntimeConfig;
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// The three executables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// int -> float, trimmed output, stdin when no argument.
    D2f,
    /// int -> float, raw `%f` output, argument required.
    D2fRaw,
    /// float -> int, argument required.
    F2d,
}

impl Program {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::D2f => "d2f",
            Self::D2fRaw => "d2f-raw",
            Self::F2d => "f2d",
        }
    }

    const fn usage_hint(self) -> &'static str {
        match self {
            Self::D2f | Self::D2fRaw => "(an int ... e.g. 1065353216)",
            Self::F2d => "(a float ... e.g. 0.9)",
        }
    }

    const fn reads_stdin(self) -> bool {
        matches!(self, Self::D2f)
    }
}

/// Usage line printed when the required argument is missing.
#[must_use]
pub fn usage_line(argv0: &str, program: Program) -> String {
    format!("{argv0} {}\n", program.usage_hint())
}

/// Parsed command line, independent of clap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub program: Program,
    pub input: Option<String>,
    /// Integer radix for `d2f`/`d2f-raw`.
    pub base: u32,
}

impl Request {
    #[must_use]
    pub fn new(program: Program, input: Option<String>) -> Self {
        Self {
            program,
            input,
            base: 10,
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }
}

/// What evaluating a request produced.
#[derive(Debug)]
pub enum Report {
    Converted(Reinterpretation),
    Usage,
    Rejected(fipun_core::Error),
}

/// How the process should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Done,
    Usage,
    Rejected,
}

impl Exit {
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Done => 0,
            Self::Usage | Self::Rejected => 1,
        }
    }
}

/// Evaluate `request` without touching stdout.
pub fn evaluate<R: BufRead>(request: &Request, mode: ParseMode, stdin: &mut R) -> Report {
    let reinterpreter = Reinterpreter::new(mode).with_base(request.base);
    let result: Result<Reinterpretation, fipun_core::Error> =
        match (request.program, request.input.as_deref()) {
            (Program::F2d, Some(text)) => reinterpreter.float_to_int(text).map_err(Into::into),
            (Program::D2f, Some(text)) => reinterpreter
                .int_to_float(text, FloatStyle::Trimmed)
                .map_err(Into::into),
            (Program::D2fRaw, Some(text)) => reinterpreter
                .int_to_float(text, FloatStyle::Raw)
                .map_err(Into::into),
            (program, None) if program.reads_stdin() => {
                reinterpreter.read_int_to_float(stdin, FloatStyle::Trimmed)
            }
            (_, None) => return Report::Usage,
        };
    match result {
        Ok(converted) => Report::Converted(converted),
        Err(err) => Report::Rejected(err),
    }
}

/// Run against the real process streams.
pub fn run(request: &Request, config: &RuntimeConfig) -> io::Result<Exit> {
    let argv0 = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| request.program.name().to_string());
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_with(request, config, &argv0, &mut stdin.lock(), &mut stdout)
}

/// Run with injected streams. Diagnostics go to stderr.
pub fn run_with<R: BufRead, W: Write>(
    request: &Request,
    config: &RuntimeConfig,
    argv0: &str,
    stdin: &mut R,
    stdout: &mut W,
) -> io::Result<Exit> {
    let report = evaluate(request, config.parse_mode, stdin);
    let exit = match &report {
        // A lenient fallback still prints; only the log records it.
        Report::Converted(converted) => {
            stdout.write_all(converted.text.as_bytes())?;
            Exit::Done
        }
        Report::Usage => {
            stdout.write_all(usage_line(argv0, request.program).as_bytes())?;
            Exit::Usage
        }
        Report::Rejected(err) => {
            eprintln!("{}: {err}", request.program.name());
            Exit::Rejected
        }
    };
    stdout.flush()?;

    if let Some(path) = &config.log_path {
        let entry = log_entry(request, config.parse_mode, &report, exit);
        let logged = LogEmitter::append_to_file(path, request.program.name())
            .and_then(|mut emitter| emitter.emit_entry(entry));
        if let Err(err) = logged {
            eprintln!("warning: cannot write log {}: {err}", path.display());
        }
    }
    Ok(exit)
}

/// Build the structured record for one invocation.
#[must_use]
pub fn log_entry(request: &Request, mode: ParseMode, report: &Report, exit: Exit) -> LogEntry {
    let (level, event, outcome) = match report {
        Report::Converted(converted) if converted.fallback.is_some() => {
            (LogLevel::Warn, "reinterpret", Outcome::Fallback)
        }
        Report::Converted(_) => (LogLevel::Info, "reinterpret", Outcome::Pass),
        Report::Usage => (LogLevel::Warn, "usage", Outcome::Usage),
        Report::Rejected(_) => (LogLevel::Error, "reject", Outcome::Reject),
    };

    let mut entry = LogEntry::new("", level, event)
        .with_program(request.program.name())
        .with_mode(mode.as_str())
        .with_outcome(outcome)
        .with_exit_code(exit.code());
    if let Some(input) = &request.input {
        entry = entry.with_input(input.clone());
    }
    match report {
        Report::Converted(converted) => {
            entry = entry
                .with_word(converted.word)
                .with_output(converted.text.clone());
            if let Some(issue) = &converted.fallback {
                entry = entry.with_details(serde_json::json!({ "fallback": issue.to_string() }));
            }
        }
        Report::Rejected(err) => {
            entry = entry.with_details(serde_json::json!({ "error": err.to_string() }));
        }
        Report::Usage => {}
    }
    entry
}
