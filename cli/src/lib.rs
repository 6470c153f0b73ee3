//! Command-line front end for the FizzBuzz / Fibonacci classifier.
//!
//! ## Commands
//!
//! - `fizzfib classify <N>...` - classify individual numbers
//! - `fizzfib range` - classify an inclusive range (defaults from config)
//!
//! ## Exit Codes
//!
//! - 0: Success
//! - 1: Runtime failure (e.g. stdout closed)
//! - 2: Invalid input or configuration

use clap::{Parser, Subcommand};
use fizzfib_classifier::ClassifierError;
use std::io::Write;

pub mod classify_cmd;
pub mod range_cmd;

pub use classify_cmd::ClassifyArgs;
pub use range_cmd::RangeArgs;

/// Exit codes for fizzfib commands
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
}

/// FizzBuzz with Fibonacci detection
#[derive(Debug, Parser)]
#[command(name = "fizzfib", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one or more numbers
    ///
    /// Prints one label per argument, in argument order.
    Classify(ClassifyArgs),

    /// Classify every number in an inclusive range
    ///
    /// Defaults come from `~/.config/fizzfib/config.toml` (or the file named
    /// by `FIZZFIB_CONFIG`); command-line flags override them.
    Range(RangeArgs),
}

impl Cli {
    /// Run the selected command, writing results to `out`.
    pub fn run<W: Write>(self, out: &mut W) -> anyhow::Result<()> {
        match self.command {
            Command::Classify(args) => classify_cmd::run_classify(&args, out),
            Command::Range(args) => range_cmd::run_range(&args, out),
        }
    }
}

/// Map an error from [`Cli::run`] to a process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ClassifierError>())
        .map(|e| e.category().exit_code())
        .unwrap_or(exit_codes::FAILURE)
}
