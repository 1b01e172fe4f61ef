//! # fipun-core
//!
//! Reinterpretation of a 32-bit word as either an `i32` or an IEEE-754 `f32`.
//!
//! The crate provides the pieces the `d2f` / `d2f-raw` / `f2d` tools are built
//! from: the [`Word32`] storage type, libc-style numeric scanning (`strtol`,
//! `strtof`), a `%f` rendering engine, a `scanf("%d")`-style reader,
//! and the [`Reinterpreter`] that ties them together under a [`ParseMode`].
//! No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod reinterpret;
pub mod stdio;
pub mod stdlib;
pub mod word;

pub use config::ParseMode;
pub use error::{Error, ParseError};
pub use reinterpret::{FloatStyle, Reinterpreter};
pub use word::{Word32, float_to_int, int_to_float};
