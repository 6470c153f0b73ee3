//! `fizzfib range`: classify an inclusive range.
//!
//! Defaults are read with [`load_config`]; every flag given on the command
//! line overrides the matching config key.

use anyhow::Context;
use clap::Parser;
use fizzfib_classifier::{Kind, Mode, SweepConfig, Tally, load_config, sweep};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct RangeArgs {
    /// First number to classify (default: config `start`, or 0)
    #[arg(long, value_name = "N")]
    pub start: Option<u64>,

    /// Last number to classify, inclusive (default: config `end`, or 100)
    #[arg(long, value_name = "N")]
    pub end: Option<u64>,

    /// Rule set: `fizz_buzz` or `fizz_buzz_fibonacci`
    #[arg(long, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Override config path (default: ~/.config/fizzfib/config.toml)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Classify without printing each label
    #[arg(long)]
    pub no_print: bool,

    /// Output as JSON for automation
    #[arg(long)]
    pub json: bool,

    /// Print per-kind counts after the sweep
    #[arg(long)]
    pub tally: bool,
}

impl RangeArgs {
    /// Apply command-line overrides on top of the loaded config.
    pub fn resolve(&self, base: SweepConfig) -> SweepConfig {
        SweepConfig {
            start: self.start.unwrap_or(base.start),
            end: self.end.unwrap_or(base.end),
            mode: self.mode.unwrap_or(base.mode),
            print: base.print && !self.no_print,
        }
    }
}

pub fn run_range<W: Write>(args: &RangeArgs, out: &mut W) -> anyhow::Result<()> {
    let base = load_config(args.config.as_deref()).context("failed to load config")?;
    let cfg = args.resolve(base);
    tracing::debug!(?cfg, "resolved sweep config");

    let entries = sweep(cfg.start, cfg.end, cfg.mode)?;
    let mut tally = Tally::default();
    for entry in entries {
        tally.record(&entry.classification);
        if !cfg.print {
            continue;
        }
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&entry)?)?;
        } else {
            writeln!(out, "{}", entry.classification)?;
        }
    }

    tracing::info!(
        start = cfg.start,
        end = cfg.end,
        mode = %cfg.mode,
        total = tally.total(),
        "sweep complete"
    );

    if args.tally {
        write_tally(&tally, args.json, out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_tally<W: Write>(tally: &Tally, json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(tally)?)?;
        return Ok(());
    }
    for kind in Kind::ALL {
        writeln!(out, "{kind}: {}", tally.get(kind))?;
    }
    writeln!(out, "total: {}", tally.total())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{exit_code_for, exit_codes};
    use pretty_assertions::assert_eq;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("tempfile");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    fn args(config: &NamedTempFile) -> RangeArgs {
        RangeArgs {
            start: None,
            end: None,
            mode: None,
            config: Some(config.path().to_path_buf()),
            no_print: false,
            json: false,
            tally: false,
        }
    }

    fn run(args: &RangeArgs) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run_range(args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn prints_range_from_config() {
        let config = config_file("start = 1\nend = 15\n");
        let output = run(&args(&config)).expect("range");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Fibonacci", "Fibonacci", "Fibonacci", "4", "Fibonacci", "Fizz", "7",
                "Fibonacci", "Fizz", "Buzz", "11", "Fizz", "Fibonacci", "14", "FizzBuzz",
            ]
        );
    }

    #[test]
    fn flags_override_config() {
        let config = config_file("start = 1\nend = 100\nmode = \"fizz_buzz_fibonacci\"\n");
        let mut range = args(&config);
        range.end = Some(5);
        range.mode = Some(Mode::FizzBuzz);
        let output = run(&range).expect("range");
        assert_eq!(output, "1\n2\nFizz\n4\nBuzz\n");
    }

    #[test]
    fn no_print_with_tally_only_prints_counts() {
        let config = config_file("");
        let mut range = args(&config);
        range.no_print = true;
        range.tally = true;
        let output = run(&range).expect("range");
        assert_eq!(
            output,
            "fibonacci: 11\nfizz_buzz: 6\nfizz: 25\nbuzz: 12\nnumber: 47\ntotal: 101\n"
        );
    }

    #[test]
    fn print_disabled_in_config() {
        let config = config_file("print = false\n");
        let output = run(&args(&config)).expect("range");
        assert_eq!(output, "");
    }

    #[test]
    fn json_tally() {
        let config = config_file("start = 0\nend = 15\n");
        let mut range = args(&config);
        range.no_print = true;
        range.tally = true;
        range.json = true;
        let output = run(&range).expect("range");
        assert_eq!(
            output,
            "{\"fibonacci\":7,\"fizz_buzz\":1,\"fizz\":3,\"buzz\":1,\"number\":4}\n"
        );
    }

    #[test]
    fn reversed_override_is_invalid_input() {
        let config = config_file("");
        let mut range = args(&config);
        range.start = Some(50);
        range.end = Some(10);
        let err = run(&range).expect_err("reversed range");
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn bad_config_is_invalid_input() {
        let config = config_file("end = \"lots\"\n");
        let err = run(&args(&config)).expect_err("bad config");
        assert_eq!(err.to_string(), "failed to load config");
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }
}
