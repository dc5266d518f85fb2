//! `mulpairs-count` — Counts multiplicative pairs for arrays read from JSON.
//!
//! **Input:** a JSON object with the whole parts under `a` and the fraction
//! numerators under `b`:
//!
//! ```text
//! {"a": [0, 1, 2, 2, 3, 5], "b": [500000, 500000, 0, 0, 0, 20000]}
//! ```
//!
//! **Usage:**
//! ```text
//! mulpairs-count [--input <path>] [--sorted] [--oracle] [--verbose]
//! ```
//!
//! Reads stdin when `--input` is absent. Prints the capped count. With
//! `--oracle`, also runs the quadratic oracle and exits non-zero if the two
//! disagree.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use mulpairs::{
    bruteforce_count, count_pairs_observed, count_pairs_sorted_observed, saturate, NoopObserver,
    Observer, PairsError, TracingObserver,
};
use mulpairs_clients::init_logging;
use serde::Deserialize;

/// Count index pairs whose values satisfy x*y >= x+y.
#[derive(Parser)]
#[command(
    name = "mulpairs-count",
    about = "Count index pairs whose values satisfy x*y >= x+y"
)]
struct Args {
    /// JSON input file (default: stdin).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Require the input to be sorted by value instead of sorting a copy.
    #[arg(long)]
    sorted: bool,

    /// Also run the quadratic oracle and compare.
    #[arg(long)]
    oracle: bool,

    /// Log every regime decision.
    #[arg(long, short)]
    verbose: bool,
}

/// The input document.
#[derive(Deserialize)]
struct Input {
    /// Whole parts.
    a: Vec<u32>,
    /// Fraction numerators over 1,000,000.
    b: Vec<u32>,
}

fn read_input(path: Option<&PathBuf>) -> Result<Input> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("Failed to parse input JSON")
}

fn count_input<O: Observer>(
    input: &Input,
    sorted: bool,
    observer: &mut O,
) -> Result<u64, PairsError> {
    if sorted {
        count_pairs_sorted_observed(&input.a, &input.b, observer)
    } else {
        count_pairs_observed(&input.a, &input.b, observer)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = read_input(args.input.as_ref())?;
    tracing::info!(len = input.a.len(), "input loaded");

    let count = if args.verbose {
        count_input(&input, args.sorted, &mut TracingObserver)?
    } else {
        count_input(&input, args.sorted, &mut NoopObserver)?
    };
    println!("{count}");

    if args.oracle {
        let oracle = bruteforce_count(&input.a, &input.b)?;
        let agree = saturate(oracle) == count;
        println!("oracle: {oracle} ({})", if agree { "agree" } else { "DISAGREE" });
        if !agree {
            process::exit(1);
        }
    }

    Ok(())
}
