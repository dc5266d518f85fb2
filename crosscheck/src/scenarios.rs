//! Named scenarios with known counts.

use anyhow::{Context, Result};
use mulpairs::{bruteforce_count, count_pairs, saturate, PAIR_COUNT_CAP};
use mulpairs_test_helpers::Parts;

use crate::report::{Check, CheckResult, CrosscheckReport, Disagreement, Origin, Reference};

/// Largest input the oracle is run on.
const ORACLE_LIMIT: usize = 5_000;

/// An input with its expected capped count.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Short name shown in the report.
    pub name: &'static str,
    /// The input arrays.
    pub parts: Parts,
    /// Expected result of `count_pairs`.
    pub expected: u64,
}

impl Scenario {
    fn new(name: &'static str, parts: Parts, expected: u64) -> Self {
        Self {
            name,
            parts,
            expected,
        }
    }
}

/// The built-in scenario list.
pub fn builtin() -> Vec<Scenario> {
    let large = 100_000;
    let mut all_ones = Parts::repeat(1, 0, large / 2);
    all_ones.wholes.extend(vec![1; large / 2]);
    all_ones.fractions.extend(vec![999_999; large / 2]);

    vec![
        Scenario::new(
            "boundary",
            Parts {
                wholes: vec![0, 1, 2, 2, 3, 5],
                fractions: vec![500_000, 500_000, 0, 0, 0, 20_000],
            },
            8,
        ),
        Scenario::new(
            "degenerate small values",
            Parts {
                wholes: vec![1, 3],
                fractions: vec![500_000, 0],
            },
            1,
        ),
        Scenario::new("all zeros", Parts::repeat(0, 0, 100), 4950),
        Scenario::new("cap on all zeros", Parts::repeat(0, 0, large), PAIR_COUNT_CAP),
        Scenario::new("all ones", all_ones, 0),
        Scenario::new("all twos", Parts::repeat(2, 0, large), PAIR_COUNT_CAP),
        Scenario::new("all max", Parts::repeat(1000, 999_999, large), PAIR_COUNT_CAP),
    ]
}

/// Runs `scenarios`, cross-verifying the small ones against the oracle.
///
/// # Errors
///
/// Returns an error if a scenario input violates a counting precondition.
pub fn validate(scenarios: &[Scenario]) -> Result<CrosscheckReport> {
    let mut report = CrosscheckReport::new();

    for scenario in scenarios {
        let Parts { wholes, fractions } = &scenario.parts;
        let got = count_pairs(wholes, fractions)
            .with_context(|| format!("scenario '{}' has invalid input", scenario.name))?;

        let origin = Origin::Scenario(scenario.name);
        let len = scenario.parts.len();
        let mut found: Vec<Disagreement> =
            Disagreement::check(&origin, len, got, Reference::Expected(scenario.expected))
                .into_iter()
                .collect();
        if len <= ORACLE_LIMIT {
            let oracle = saturate(bruteforce_count(wholes, fractions)?);
            found.extend(Disagreement::check(&origin, len, got, Reference::Oracle(oracle)));
        }

        if found.is_empty() {
            tracing::debug!(scenario = scenario.name, count = got, "scenario passed");
        } else {
            tracing::warn!(scenario = scenario.name, count = got, "scenario failed");
        }
        report.push(CheckResult::from_disagreements(
            Check::Scenarios,
            format!("{}: {} pairs", scenario.name, got),
            found,
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scenarios_pass() {
        let report = validate(&builtin()).unwrap();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "scenario failures: {failures:#?}");
        assert_eq!(report.results.len(), builtin().len());
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let scenario = Scenario::new(
            "wrong",
            Parts {
                wholes: vec![2, 2],
                fractions: vec![0, 0],
            },
            0,
        );
        let report = validate(&[scenario]).unwrap();
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            report.results[0].disagreements(),
            &[Disagreement {
                origin: Origin::Scenario("wrong"),
                len: 2,
                counted: 1,
                reference: Reference::Expected(0),
            }]
        );
    }

    #[test]
    fn invalid_input_is_an_error() {
        let scenario = Scenario::new(
            "invalid",
            Parts {
                wholes: vec![2],
                fractions: vec![],
            },
            0,
        );
        assert!(validate(&[scenario]).is_err());
    }
}
