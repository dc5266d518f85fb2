//! Multiplicative pair counting over fixed-point values.
//!
//! Given whole parts `A` and fraction parts `B` (numerators over 1,000,000),
//! `mulpairs` counts index pairs `P < Q` with `C[P] * C[Q] >= C[P] + C[Q]`
//! where `C[i] = A[i] + B[i] / 1_000_000`. Counts above 1,000,000,000 are
//! reported as exactly 1,000,000,000.
//!
//! # Pipeline
//!
//! ```text
//! (A, B) -> CompositeView (validated, sorted) -> boundary counter -> Tally -> cap
//!                                                  |-- search (binary search)
//!                                                  '-- interval pair counter
//! ```
//!
//! All comparisons are exact: values are held as `A * 1_000_000 + B` in a
//! `u64` ([`Composite`]), never as floating point.
//!
//! # Example
//!
//! ```
//! let a = [0, 1, 2, 2, 3, 5];
//! let b = [500_000, 500_000, 0, 0, 0, 20_000];
//! assert_eq!(mulpairs::count_pairs(&a, &b), Ok(8));
//! assert_eq!(mulpairs::bruteforce_count(&a, &b), Ok(8));
//! ```
//!
//! # Complexity
//!
//! | Step | Cost |
//! |------|------|
//! | Validation and sort | O(n log n) |
//! | Zero run, high suffix | O(log n) |
//! | Intermediate runs | O(log n) per distinct value |
//! | Oracle | O(n²) |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod boundary;
pub mod composite;
pub mod error;
pub mod interval;
pub mod observer;
pub mod oracle;
pub mod regime;
pub mod search;

pub use boundary::{saturate, Tally, PAIR_COUNT_CAP};
pub use composite::{Composite, CompositeView, MAX_FRACTION, SCALE};
pub use error::PairsError;
pub use interval::{choose_two, count_cross_pairs, Interval};
pub use observer::{BoundaryEvent, NoopObserver, Observer, TracingObserver};
pub use oracle::bruteforce_count;
pub use regime::Regime;
pub use search::{find_index, find_index_in_parts, Bound};

/// Counts qualifying pairs, capped at [`PAIR_COUNT_CAP`].
///
/// The input may be in any order; a sorted working copy is counted.
///
/// # Errors
///
/// Returns [`PairsError::LengthMismatch`] if the slices differ in length and
/// [`PairsError::FractionOutOfRange`] if a fraction exceeds 999,999.
pub fn count_pairs(wholes: &[u32], fractions: &[u32]) -> Result<u64, PairsError> {
    count_pairs_observed(wholes, fractions, &mut NoopObserver)
}

/// Counts qualifying pairs of input already sorted by composite value.
///
/// # Errors
///
/// As [`count_pairs`], plus [`PairsError::Unsorted`] if the values are not
/// in non-decreasing order.
pub fn count_pairs_sorted(wholes: &[u32], fractions: &[u32]) -> Result<u64, PairsError> {
    count_pairs_sorted_observed(wholes, fractions, &mut NoopObserver)
}

/// [`count_pairs_sorted`] reporting each regime decision to `observer`.
///
/// # Errors
///
/// As [`count_pairs_sorted`]. Nothing is reported for rejected input.
pub fn count_pairs_sorted_observed<O: Observer + ?Sized>(
    wholes: &[u32],
    fractions: &[u32],
    observer: &mut O,
) -> Result<u64, PairsError> {
    let view = CompositeView::from_sorted_parts(wholes, fractions)?;
    Ok(boundary::count(&view, observer))
}

/// [`count_pairs`] reporting each regime decision to `observer`.
///
/// # Errors
///
/// As [`count_pairs`].
pub fn count_pairs_observed<O: Observer + ?Sized>(
    wholes: &[u32],
    fractions: &[u32],
    observer: &mut O,
) -> Result<u64, PairsError> {
    let view = CompositeView::from_parts(wholes, fractions)?;
    Ok(boundary::count(&view, observer))
}

/// Exact per-regime counts, without the cap.
///
/// # Errors
///
/// As [`count_pairs`].
pub fn tally_pairs(wholes: &[u32], fractions: &[u32]) -> Result<Tally, PairsError> {
    let view = CompositeView::from_parts(wholes, fractions)?;
    Ok(boundary::tally(&view, &mut NoopObserver))
}
