//! Command-line front end for fipun.
//!
//! Shared by the `d2f`, `d2f-raw` and `f2d` binaries:
//! - [`config`] resolves the runtime configuration from the environment.
//! - [`run`] evaluates one invocation and writes its output.
//! - [`structured_log`] appends a JSONL record per invocation when enabled.

#![forbid(unsafe_code)]

pub mod config;
pub mod run;
pub mod structured_log;

pub use config::RuntimeConfig;
pub use run::{Exit, Program, Request, run, run_with};
