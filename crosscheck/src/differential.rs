//! Seeded differential runs against the quadratic oracle.
//!
//! Each case draws a sorted input from one of a fixed rotation of shapes,
//! then checks the boundary count against the capped oracle count and
//! against the count of a shuffled copy.

use anyhow::{Context, Result};
use mulpairs::{bruteforce_count, count_pairs, count_pairs_sorted, saturate};
use mulpairs_test_helpers::{random_sorted_parts, InputShape, MAX_FRACTION};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::report::{Check, CheckResult, CrosscheckReport, Disagreement, Origin, Reference};
use crate::CrosscheckConfig;

/// Named input shapes the cases rotate through.
fn shapes(max_len: usize) -> [(&'static str, InputShape); 4] {
    let base = InputShape::default().lengths(0, max_len);
    [
        ("uniform", base),
        ("dense intermediate", base.wholes(0, 3)),
        ("below two", base.wholes(0, 1).fractions(1, MAX_FRACTION)),
        ("coarse fractions", base.wholes(0, 6).fractions(0, 4)),
    ]
}

/// Disagreements of one case: the sorted count against the oracle, and the
/// shuffled count against the sorted one.
fn compare(
    origin: &Origin,
    len: usize,
    sorted: u64,
    shuffled: u64,
    oracle: u64,
) -> Vec<Disagreement> {
    [Reference::Oracle(oracle), Reference::Shuffled(shuffled)]
        .into_iter()
        .filter_map(|reference| Disagreement::check(origin, len, sorted, reference))
        .collect()
}

/// Runs `config.cases` seeded cases.
///
/// # Errors
///
/// Returns an error if a generated input violates a counting precondition.
pub fn validate(config: &CrosscheckConfig) -> Result<CrosscheckReport> {
    let mut report = CrosscheckReport::new();
    if config.cases == 0 {
        report.push(CheckResult::skipped(
            Check::Differential,
            "no differential cases requested",
        ));
        return Ok(report);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let shapes = shapes(config.max_len);
    let mut found = Vec::new();

    for index in 0..config.cases {
        let (shape_name, shape) = shapes[index % shapes.len()];
        let parts = random_sorted_parts(&mut rng, shape);
        let shuffled = parts.shuffled(&mut rng);

        let sorted = count_pairs_sorted(&parts.wholes, &parts.fractions)
            .with_context(|| format!("case {index} ({shape_name}) produced unsorted input"))?;
        let unsorted = count_pairs(&shuffled.wholes, &shuffled.fractions)?;
        let oracle = saturate(bruteforce_count(&parts.wholes, &parts.fractions)?);

        tracing::debug!(
            case = index,
            shape = shape_name,
            len = parts.len(),
            count = sorted,
            "case run"
        );

        let origin = Origin::Case {
            seed: config.seed,
            index,
            shape: shape_name,
        };
        found.extend(compare(&origin, parts.len(), sorted, unsorted, oracle));
    }

    if !found.is_empty() {
        tracing::warn!(failed = found.len(), seed = config.seed, "differential mismatches");
    }
    report.push(CheckResult::from_disagreements(
        Check::Differential,
        format!("{} cases (seed {})", config.cases, config.seed),
        found,
    ));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    #[test]
    fn seeded_cases_agree() {
        let config = CrosscheckConfig {
            seed: 42,
            cases: 40,
            max_len: 150,
        };
        let report = validate(&config).unwrap();
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn zero_cases_is_a_warning() {
        let config = CrosscheckConfig {
            seed: 0,
            cases: 0,
            max_len: 10,
        };
        let report = validate(&config).unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].severity(), Severity::Warning);
    }

    #[test]
    fn mismatches_keep_seed_and_both_counts() {
        let origin = Origin::Case {
            seed: 9,
            index: 3,
            shape: "uniform",
        };
        assert!(compare(&origin, 10, 4, 4, 4).is_empty());

        let found = compare(&origin, 10, 4, 5, 6);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].origin, origin);
        assert_eq!(found[0].counted, 4);
        assert_eq!(found[0].reference, Reference::Oracle(6));
        assert_eq!(found[1].reference, Reference::Shuffled(5));
    }
}
