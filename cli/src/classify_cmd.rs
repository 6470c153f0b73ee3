//! `fizzfib classify`: classify numbers given on the command line.

use anyhow::Context;
use clap::Parser;
use fizzfib_classifier::{Entry, classify_signed};
use std::io::Write;

#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Numbers to classify (must not be negative)
    #[arg(required = true, allow_negative_numbers = true, value_name = "N")]
    pub numbers: Vec<i64>,

    /// Output one JSON object per line
    #[arg(long)]
    pub json: bool,
}

pub fn run_classify<W: Write>(args: &ClassifyArgs, out: &mut W) -> anyhow::Result<()> {
    // A bad argument must not produce partial output.
    let entries = args
        .numbers
        .iter()
        .map(|&n| -> anyhow::Result<Entry> {
            let classification =
                classify_signed(n).with_context(|| format!("cannot classify {n}"))?;
            Ok(Entry {
                n: n.unsigned_abs(),
                classification,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    tracing::debug!(count = entries.len(), "classified arguments");

    for entry in &entries {
        if args.json {
            writeln!(out, "{}", serde_json::to_string(entry)?)?;
        } else {
            writeln!(out, "{}", entry.classification)?;
        }
    }
    out.flush()?;
    Ok(())
}
