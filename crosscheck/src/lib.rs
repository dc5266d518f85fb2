//! mulpairs cross-verification suite.
//!
//! Checks the boundary counter against known counts and against the
//! quadratic oracle, and aggregates the outcomes into one report.
//!
//! # Checks
//!
//! | Group | What it verifies |
//! |-------|------------------|
//! | `scenarios` | Named inputs with known counts, including the 100,000-element cap cases |
//! | `differential` | Seeded random inputs: sorted count, shuffled count and oracle agree |
//!
//! # Entry Point
//!
//! ```no_run
//! use mulpairs_crosscheck::{run_all, CrosscheckConfig};
//!
//! let report = run_all(&CrosscheckConfig::default()).expect("crosscheck failed to run");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod differential;
pub mod report;
pub mod scenarios;

pub use report::{
    Check, CheckResult, CrosscheckReport, Disagreement, Origin, Outcome, Reference, Severity,
};

/// Parameters of a crosscheck run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosscheckConfig {
    /// Seed for the differential input generator.
    pub seed: u64,
    /// Number of differential cases.
    pub cases: usize,
    /// Maximum length of a differential input.
    pub max_len: usize,
}

impl Default for CrosscheckConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            cases: 200,
            max_len: 300,
        }
    }
}

/// Runs all checks and returns the aggregated report.
///
/// Checks run in this order:
/// 1. Named scenarios
/// 2. Differential cases
///
/// # Errors
///
/// Returns an error only if an input violates a counting precondition.
pub fn run_all(config: &CrosscheckConfig) -> anyhow::Result<CrosscheckReport> {
    let mut report = CrosscheckReport::new();

    report.extend(scenarios::validate(&scenarios::builtin())?);
    report.extend(differential::validate(config)?);

    tracing::info!(
        checks = report.results.len(),
        failures = report.failure_count(),
        "crosscheck finished"
    );
    Ok(report)
}
