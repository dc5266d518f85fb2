//! Order-statistics search over sorted composite values.
//!
//! Both predicates are monotone over a non-decreasing slice, so each search
//! is a single binary search for the point where the predicate flips:
//!
//! ```text
//! AtLeast(t):  F F F F T T T      -> first T
//! AtMost(t):   T T T F F F F      -> last T
//! ```
//!
//! Ranges are inclusive on both ends. A `finish` past the end of the slice is
//! clamped to the last index; a `start` past the end leaves no candidates.

use crate::composite::{Composite, CompositeView};
use crate::error::PairsError;
use crate::interval::Interval;

/// The monotone predicate a boundary search looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Smallest index whose value is `>=` the threshold.
    AtLeast(Composite),
    /// Largest index whose value is `<=` the threshold.
    AtMost(Composite),
}

/// Finds the boundary index for `bound` within `values[start..=finish]`.
///
/// `values` must be sorted in non-decreasing order. Returns `Ok(None)` when no
/// index in range satisfies the predicate.
///
/// A single-element range (`start == finish`) is searched like any other: the
/// element is returned if it satisfies `bound`. The boundary counter relies on
/// this to find a high suffix made of the last element alone.
///
/// # Errors
///
/// Returns [`PairsError::InvalidRange`] if `start > finish`.
///
/// # Example
///
/// ```
/// use mulpairs::{find_index, Bound, Composite};
///
/// let values: Vec<Composite> = [(0, 0), (1, 500_000), (1, 700_000)]
///     .iter()
///     .map(|&(w, f)| Composite::from_parts(w, f).unwrap())
///     .collect();
/// let t = Composite::from_parts(1, 510_000).unwrap();
/// assert_eq!(find_index(&values, 0, 2, Bound::AtLeast(t)), Ok(Some(2)));
/// assert_eq!(find_index(&values, 0, 2, Bound::AtMost(t)), Ok(Some(1)));
/// ```
pub fn find_index(
    values: &[Composite],
    start: usize,
    finish: usize,
    bound: Bound,
) -> Result<Option<usize>, PairsError> {
    if start > finish {
        return Err(PairsError::InvalidRange { start, finish });
    }
    Ok(locate(values, Interval::new(start, finish), bound))
}

/// Infallible form of [`find_index`]: an empty `range` has no candidates.
pub fn locate(values: &[Composite], range: Interval, bound: Bound) -> Option<usize> {
    if range.is_empty() || range.from >= values.len() {
        return None;
    }
    let start = range.from;
    let finish = range.to.min(values.len() - 1);
    let window = &values[start..=finish];

    match bound {
        Bound::AtLeast(threshold) => {
            let split = window.partition_point(|v| *v < threshold);
            (split < window.len()).then_some(start + split)
        }
        Bound::AtMost(threshold) => {
            let split = window.partition_point(|v| *v <= threshold);
            split.checked_sub(1).map(|i| start + i)
        }
    }
}

/// [`find_index`] over parallel whole/fraction arrays.
///
/// The arrays are validated and must already be in non-decreasing order.
///
/// # Errors
///
/// Returns any [`PairsError`] raised while validating the arrays, or
/// [`PairsError::InvalidRange`] if `start > finish`.
pub fn find_index_in_parts(
    wholes: &[u32],
    fractions: &[u32],
    start: usize,
    finish: usize,
    bound: Bound,
) -> Result<Option<usize>, PairsError> {
    CompositeView::from_sorted_parts(wholes, fractions)?.find(start, finish, bound)
}
