//! Crosscheck outcomes.
//!
//! A [`CheckResult`] says which group ran, what it covered, and either that
//! every count agreed or which inputs disagreed. A [`Disagreement`] carries
//! the boundary count and the count it was compared against, plus enough of
//! the input's origin (scenario name, or seed and case index) to reproduce it.

use std::fmt;

/// The check group that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Named inputs with recorded counts.
    Scenarios,
    /// Seeded random inputs against the oracle.
    Differential,
}

impl Check {
    /// Short name used in the printed report.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scenarios => "scenarios",
            Self::Differential => "differential",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How much a result blocks the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Every count agreed.
    Pass,
    /// Nothing was compared.
    Warning,
    /// At least one count disagreed.
    Failure,
}

impl Severity {
    /// Four-letter tag used in the printed report.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warning => "WARN",
            Self::Failure => "FAIL",
        }
    }
}

/// Where a disagreeing input came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A built-in scenario.
    Scenario(&'static str),
    /// A generated differential case; regenerate it from `seed`.
    Case {
        /// Generator seed of the run.
        seed: u64,
        /// Position of the case within the run.
        index: usize,
        /// Name of the input shape the case was drawn from.
        shape: &'static str,
    },
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scenario(name) => write!(f, "scenario '{name}'"),
            Self::Case { seed, index, shape } => {
                write!(f, "case {index} ({shape}, seed {seed})")
            }
        }
    }
}

/// The count a boundary count was compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// The count recorded with a scenario.
    Expected(u64),
    /// The capped oracle count.
    Oracle(u64),
    /// The boundary count of a shuffled copy of the same input.
    Shuffled(u64),
}

impl Reference {
    /// The reference count.
    pub const fn value(self) -> u64 {
        match self {
            Self::Expected(n) | Self::Oracle(n) | Self::Shuffled(n) => n,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected(n) => write!(f, "expected {n}"),
            Self::Oracle(n) => write!(f, "oracle {n}"),
            Self::Shuffled(n) => write!(f, "shuffled {n}"),
        }
    }
}

/// One input on which the boundary count differs from a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disagreement {
    /// Where the input came from.
    pub origin: Origin,
    /// Number of elements in the input.
    pub len: usize,
    /// What the boundary counter returned.
    pub counted: u64,
    /// What it should have matched.
    pub reference: Reference,
}

impl Disagreement {
    /// Compares `counted` with `reference`, returning a disagreement if they
    /// differ.
    pub fn check(origin: &Origin, len: usize, counted: u64, reference: Reference) -> Option<Self> {
        (counted != reference.value()).then(|| Self {
            origin: origin.clone(),
            len,
            counted,
            reference,
        })
    }
}

impl fmt::Display for Disagreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, len {}: counted {}, {}",
            self.origin, self.len, self.counted, self.reference
        )
    }
}

/// What a check found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every compared count agreed.
    Agreed,
    /// The group had nothing to compare.
    Skipped,
    /// Some counts disagreed; never empty.
    Disagreed(Vec<Disagreement>),
}

/// A single crosscheck result.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Group that produced the result.
    pub check: Check,
    /// What was covered, e.g. `"boundary: 8 pairs"` or `"200 cases (seed 0)"`.
    pub subject: String,
    /// What the group found.
    pub outcome: Outcome,
}

impl CheckResult {
    /// Builds a result from the disagreements a group collected; none means
    /// the group agreed.
    pub fn from_disagreements(
        check: Check,
        subject: impl Into<String>,
        disagreements: Vec<Disagreement>,
    ) -> Self {
        let outcome = if disagreements.is_empty() {
            Outcome::Agreed
        } else {
            Outcome::Disagreed(disagreements)
        };
        Self {
            check,
            subject: subject.into(),
            outcome,
        }
    }

    /// A result for a group that compared nothing.
    pub fn skipped(check: Check, subject: impl Into<String>) -> Self {
        Self {
            check,
            subject: subject.into(),
            outcome: Outcome::Skipped,
        }
    }

    /// Severity implied by the outcome.
    pub fn severity(&self) -> Severity {
        match self.outcome {
            Outcome::Agreed => Severity::Pass,
            Outcome::Skipped => Severity::Warning,
            Outcome::Disagreed(_) => Severity::Failure,
        }
    }

    /// The disagreements found, if any.
    pub fn disagreements(&self) -> &[Disagreement] {
        match &self.outcome {
            Outcome::Disagreed(found) => found,
            Outcome::Agreed | Outcome::Skipped => &[],
        }
    }

    /// Returns true if any count disagreed.
    pub fn is_failure(&self) -> bool {
        self.severity() == Severity::Failure
    }
}

/// Results of a whole crosscheck run.
#[derive(Debug, Default)]
pub struct CrosscheckReport {
    /// Results in the order the groups ran.
    pub results: Vec<CheckResult>,
}

impl CrosscheckReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: CrosscheckReport) {
        self.results.extend(other.results);
    }

    /// Number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity() == severity)
            .count()
    }

    /// Number of failed results.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Every disagreement across all results.
    pub fn disagreements(&self) -> impl Iterator<Item = &Disagreement> {
        self.results.iter().flat_map(CheckResult::disagreements)
    }

    /// Returns true if no result failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(index: usize) -> Origin {
        Origin::Case {
            seed: 42,
            index,
            shape: "uniform",
        }
    }

    #[test]
    fn equal_counts_are_not_a_disagreement() {
        assert_eq!(Disagreement::check(&case(0), 5, 3, Reference::Oracle(3)), None);
        let found = Disagreement::check(&case(0), 5, 3, Reference::Oracle(4)).unwrap();
        assert_eq!(found.counted, 3);
        assert_eq!(found.reference.value(), 4);
    }

    #[test]
    fn disagreement_names_seed_and_counts() {
        let found = Disagreement::check(&case(7), 12, 10, Reference::Shuffled(9)).unwrap();
        assert_eq!(
            found.to_string(),
            "case 7 (uniform, seed 42), len 12: counted 10, shuffled 9"
        );
        let found =
            Disagreement::check(&Origin::Scenario("all twos"), 2, 0, Reference::Expected(1))
                .unwrap();
        assert_eq!(found.to_string(), "scenario 'all twos', len 2: counted 0, expected 1");
    }

    #[test]
    fn severity_follows_outcome() {
        let agreed = CheckResult::from_disagreements(Check::Scenarios, "boundary: 8 pairs", vec![]);
        assert_eq!(agreed.outcome, Outcome::Agreed);
        assert_eq!(agreed.severity(), Severity::Pass);

        let skipped = CheckResult::skipped(Check::Differential, "no cases requested");
        assert_eq!(skipped.severity(), Severity::Warning);
        assert!(skipped.disagreements().is_empty());
    }

    #[test]
    fn report_collects_disagreements_across_results() {
        let mut report = CrosscheckReport::new();
        report.push(CheckResult::from_disagreements(Check::Scenarios, "boundary", vec![]));
        report.push(CheckResult::skipped(Check::Differential, "no cases requested"));
        assert!(report.all_passed());

        let found: Vec<_> = [Reference::Oracle(2), Reference::Shuffled(1)]
            .into_iter()
            .filter_map(|r| Disagreement::check(&case(3), 4, 1, r))
            .collect();
        assert_eq!(found.len(), 1);

        let mut other = CrosscheckReport::new();
        other.push(CheckResult::from_disagreements(Check::Differential, "4 cases", found));
        report.extend(other);

        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.count(Severity::Pass), 1);
        let all: Vec<_> = report.disagreements().collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].origin, case(3));
        assert!(!report.all_passed());
    }
}
