//! FizzBuzz classification with Fibonacci detection.
//!
//! [`classify`] maps a non-negative integer to a [`Classification`]:
//! Fibonacci numbers first, then divisibility by 15, 3 and 5, otherwise the
//! number itself. The function is pure; printing is left to callers.
//!
//! [`sweep()`] classifies an inclusive range lazily and [`Tally`] counts the
//! results per kind. [`load_config`] reads sweep defaults from TOML.

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod classification;
pub mod config;
pub mod errors;
pub mod fibonacci;
pub mod rules;
pub mod sweep;

pub use classification::{Classification, Kind};
pub use config::{SweepConfig, default_config_path, load_config};
pub use errors::{ClassifierError, ErrorCategory, Result};
pub use fibonacci::is_fibonacci;
pub use rules::{Mode, ParseModeError, classify, classify_signed, classify_with, fizz_buzz};
pub use sweep::{Entry, Sweep, Tally, sweep};
