//! Standard I/O pieces: formatted output and formatted input.

pub mod printf;
pub mod scanf;

pub use printf::{FixedSpec, format_fixed, format_signed, sprintf_f32};
pub use scanf::{ScanOutcome, scan_int};
