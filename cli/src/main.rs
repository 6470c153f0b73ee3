//! `fizzfib` entry point.
//!
//! Logging goes to stderr (`RUST_LOG`, default `warn`) so stdout only ever
//! carries classification output.

use clap::Parser;
use fizzfib_cli::{Cli, exit_code_for, exit_codes};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    let code = match cli.run(&mut out) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            let code = exit_code_for(&err);
            tracing::debug!(code, "command failed");
            eprintln!("Error: {err:#}");
            code
        }
    };

    drop(out);
    std::process::exit(code);
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
