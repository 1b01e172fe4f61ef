//! Numeric scanning with C standard library semantics.

pub mod conversion;
pub mod strtof;

pub use conversion::{ConversionStatus, Scanned, strtol, strtol_impl};
pub use strtof::{strtof, strtof_impl};
