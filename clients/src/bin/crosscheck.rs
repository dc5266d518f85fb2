//! `mulpairs-crosscheck` — Cross-verifies the boundary counter.
//!
//! Runs the named scenarios and a batch of seeded differential cases against
//! the quadratic oracle.
//!
//! **Usage:**
//! ```text
//! mulpairs-crosscheck [--seed <u64>] [--cases <n>] [--max-len <n>] [--verbose]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use clap::Parser;
use mulpairs_clients::init_logging;
use mulpairs_crosscheck::{run_all, CrosscheckConfig, Severity};

/// Run the mulpairs crosscheck suite.
#[derive(Parser)]
#[command(
    name = "mulpairs-crosscheck",
    about = "Cross-verify the boundary counter against known counts and the oracle"
)]
struct Args {
    /// Seed for the differential input generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of differential cases.
    #[arg(long, default_value_t = 200)]
    cases: usize,

    /// Maximum length of a differential input.
    #[arg(long, default_value_t = 300)]
    max_len: usize,

    /// Log every case.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let config = CrosscheckConfig {
        seed: args.seed,
        cases: args.cases,
        max_len: args.max_len,
    };
    let report = run_all(&config)?;

    println!("mulpairs Crosscheck Report");
    println!("==========================");
    println!();

    for result in &report.results {
        println!(
            "[{}] {}: {}",
            result.severity().tag(),
            result.check,
            result.subject
        );
        for disagreement in result.disagreements() {
            println!("       {disagreement}");
        }
    }

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        report.failure_count()
    );

    if !report.all_passed() {
        process::exit(1);
    }
    Ok(())
}
