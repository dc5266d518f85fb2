//! Boundary-based pair counter.
//!
//! Over values sorted ascending, a pair `x <= y` satisfies `x*y >= x+y`
//! exactly when one of the following holds:
//!
//! - `x = y = 0`: pairs inside the leading run of zeros.
//! - `x >= 2`: every pair inside the suffix of values `>= 2`, since
//!   `x*y - x - y >= y - 2 >= 0` there.
//! - `1 < x < 2` and `y >= x / (x - 1)`: that threshold always exceeds 2, so
//!   the partners of an intermediate `x` form a tail of the `>= 2` suffix.
//!
//! Values in `(0, 1]` never qualify: `x*y <= y < x + y`.
//!
//! The intermediate scan walks runs of equal values left to right. The
//! threshold shrinks as `x` grows, so the partner search for the next run is
//! bounded on the right by the index the previous run found.

use crate::composite::{Composite, CompositeView, SCALE};
use crate::interval::{choose_two, count_cross_pairs, Interval};
use crate::observer::{BoundaryEvent, Observer};
use crate::regime::intermediate_threshold;
use crate::search::{locate, Bound};

/// Largest reported pair count.
pub const PAIR_COUNT_CAP: u64 = 1_000_000_000;

/// Smallest representable value above 1.
const JUST_ABOVE_ONE: Composite = Composite::from_scaled(SCALE + 1);

/// Clamps an exact count to [`PAIR_COUNT_CAP`].
#[inline]
pub const fn saturate(count: u64) -> u64 {
    if count > PAIR_COUNT_CAP {
        PAIR_COUNT_CAP
    } else {
        count
    }
}

/// Exact, uncapped pair counts per regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Pairs of zero values.
    pub zero: u64,
    /// Pairs of an intermediate value with a value `>= 2`.
    pub intermediate: u64,
    /// Pairs of two values `>= 2`.
    pub high: u64,
}

impl Tally {
    /// Exact total.
    #[inline]
    pub const fn total(&self) -> u64 {
        self.zero + self.intermediate + self.high
    }

    /// Total clamped to [`PAIR_COUNT_CAP`].
    #[inline]
    pub const fn capped(&self) -> u64 {
        saturate(self.total())
    }
}

/// Counts qualifying pairs per regime without applying the cap.
pub fn tally<O: Observer + ?Sized>(view: &CompositeView, observer: &mut O) -> Tally {
    let values = view.as_slice();
    let n = values.len();
    let all = Interval::new(0, n.saturating_sub(1));

    let zero_len = locate(values, all, Bound::AtMost(Composite::ZERO)).map_or(0, |i| i + 1);
    let zero = choose_two(zero_len as u64);
    observer.observe(&BoundaryEvent::ZeroRun {
        len: zero_len as u64,
        pairs: zero,
    });

    let Some(high_start) = locate(values, all, Bound::AtLeast(Composite::TWO)) else {
        observer.observe(&BoundaryEvent::ShortCircuit { zero_pairs: zero });
        return Tally {
            zero,
            ..Tally::default()
        };
    };

    let high_len = (n - high_start) as u64;
    let high = choose_two(high_len);
    observer.observe(&BoundaryEvent::HighSuffix {
        start: high_start,
        len: high_len,
        pairs: high,
    });

    let intermediate = intermediate_pairs(values, high_start, observer);

    Tally {
        zero,
        intermediate,
        high,
    }
}

/// Pairs between intermediate values and the suffix starting at `high_start`.
fn intermediate_pairs<O: Observer + ?Sized>(
    values: &[Composite],
    high_start: usize,
    observer: &mut O,
) -> u64 {
    let last = values.len() - 1;
    let mut right = last;
    let mut pairs = 0;

    let mut i = locate(values, Interval::new(0, last), Bound::AtLeast(JUST_ABOVE_ONE))
        .unwrap_or(values.len());

    while i < high_start {
        let x = values[i];
        let run_end = locate(values, Interval::new(i, high_start - 1), Bound::AtMost(x)).unwrap_or(i);
        let run = Interval::new(i, run_end);
        i = run_end + 1;

        let Some(threshold) = intermediate_threshold(x) else {
            continue;
        };
        let first_match = locate(values, Interval::new(high_start, right), Bound::AtLeast(threshold));
        let run_pairs = match first_match {
            Some(j) => {
                right = j;
                count_cross_pairs(run, Interval::new(j, last))
            }
            None => 0,
        };

        observer.observe(&BoundaryEvent::IntermediateRun {
            run,
            threshold,
            first_match,
            pairs: run_pairs,
        });
        pairs += run_pairs;
    }
    pairs
}

/// Counts qualifying pairs and applies the cap once, at the end.
pub fn count<O: Observer + ?Sized>(view: &CompositeView, observer: &mut O) -> u64 {
    let total = tally(view, observer).total();
    if total > PAIR_COUNT_CAP {
        observer.observe(&BoundaryEvent::Saturated { total });
    }
    saturate(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    fn view(wholes: &[u32], fractions: &[u32]) -> CompositeView {
        CompositeView::from_parts(wholes, fractions).unwrap()
    }

    #[test]
    fn boundary_scenario_tally() {
        let v = view(&[0, 1, 2, 2, 3, 5], &[500_000, 500_000, 0, 0, 0, 20_000]);
        let t = tally(&v, &mut NoopObserver);
        assert_eq!(
            t,
            Tally {
                zero: 0,
                intermediate: 2,
                high: 6
            }
        );
        assert_eq!(t.capped(), 8);
    }

    #[test]
    fn empty_and_single_inputs_count_nothing() {
        assert_eq!(count(&view(&[], &[]), &mut NoopObserver), 0);
        assert_eq!(count(&view(&[0], &[0]), &mut NoopObserver), 0);
        assert_eq!(count(&view(&[7], &[0]), &mut NoopObserver), 0);
    }

    #[test]
    fn ones_never_pair() {
        let v = view(&[1, 1, 5, 9], &[0, 0, 0, 0]);
        assert_eq!(tally(&v, &mut NoopObserver).intermediate, 0);
        assert_eq!(count(&v, &mut NoopObserver), 1);
    }

    #[test]
    fn exact_equality_counts() {
        // 1.25 * 5 == 1.25 + 5
        let v = view(&[1, 5], &[250_000, 0]);
        assert_eq!(count(&v, &mut NoopObserver), 1);
        // 1.25 * 4.999999 < 1.25 + 4.999999
        let v = view(&[1, 4], &[250_000, 999_999]);
        assert_eq!(count(&v, &mut NoopObserver), 0);
    }

    #[test]
    fn repeated_intermediate_values_form_one_run() {
        let v = view(&[1, 1, 1, 3, 3], &[500_000, 500_000, 500_000, 0, 0]);
        let mut runs = Vec::new();
        let total = count(&v, &mut |e: &BoundaryEvent| {
            if let BoundaryEvent::IntermediateRun { run, pairs, .. } = e {
                runs.push((*run, *pairs));
            }
        });
        assert_eq!(runs, vec![(Interval::new(0, 2), 6)]);
        assert_eq!(total, 7);
    }

    #[test]
    fn partner_search_right_bound_shrinks() {
        // x = 1.1 needs y >= 11, x = 1.5 needs y >= 3.
        let v = view(&[1, 1, 3, 11, 20], &[100_000, 500_000, 0, 0, 0]);
        let mut matches = Vec::new();
        let total = count(&v, &mut |e: &BoundaryEvent| {
            if let BoundaryEvent::IntermediateRun { first_match, .. } = e {
                matches.push(*first_match);
            }
        });
        assert_eq!(matches, vec![Some(3), Some(2)]);
        // high: C(3,2) = 3, 1.1: {11, 20} = 2, 1.5: {3, 11, 20} = 3
        assert_eq!(total, 8);
    }

    #[test]
    fn unmatched_run_keeps_full_search_range() {
        // 1.000001 needs y >= 1000001 which is absent; 1.9 needs y >= 2.111112.
        let v = view(&[1, 1, 2, 3], &[1, 900_000, 0, 0]);
        let mut matches = Vec::new();
        let total = count(&v, &mut |e: &BoundaryEvent| {
            if let BoundaryEvent::IntermediateRun { first_match, .. } = e {
                matches.push(*first_match);
            }
        });
        assert_eq!(matches, vec![None, Some(3)]);
        assert_eq!(total, 2);
    }

    #[test]
    fn short_circuit_without_high_values() {
        let v = view(&[0, 0, 0, 1, 1], &[0, 0, 0, 500_000, 999_999]);
        let mut events = Vec::new();
        let total = count(&v, &mut |e: &BoundaryEvent| events.push(e.clone()));
        assert_eq!(total, 3);
        assert_eq!(
            events,
            vec![
                BoundaryEvent::ZeroRun { len: 3, pairs: 3 },
                BoundaryEvent::ShortCircuit { zero_pairs: 3 },
            ]
        );
    }

    #[test]
    fn cap_is_applied_once_across_regimes() {
        let t = Tally {
            zero: 600_000_000,
            intermediate: 0,
            high: 600_000_000,
        };
        assert_eq!(t.total(), 1_200_000_000);
        assert_eq!(t.capped(), PAIR_COUNT_CAP);
    }

    #[test]
    fn saturation_is_reported() {
        let n = 50_000;
        let v = view(&vec![2; n], &vec![0; n]);
        let mut saturated = None;
        let total = count(&v, &mut |e: &BoundaryEvent| {
            if let BoundaryEvent::Saturated { total } = e {
                saturated = Some(*total);
            }
        });
        assert_eq!(total, PAIR_COUNT_CAP);
        assert_eq!(saturated, Some(1_249_975_000));
    }

    #[test]
    fn saturate_is_identity_below_cap() {
        assert_eq!(saturate(0), 0);
        assert_eq!(saturate(PAIR_COUNT_CAP), PAIR_COUNT_CAP);
        assert_eq!(saturate(PAIR_COUNT_CAP + 1), PAIR_COUNT_CAP);
    }
}
