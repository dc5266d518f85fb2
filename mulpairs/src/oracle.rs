//! Quadratic reference counter.
//!
//! Compares every pair directly. It exists to cross-check the boundary
//! counter and is never used to produce production counts.

use crate::composite::{Composite, CompositeView, SCALE};
use crate::error::PairsError;

/// Returns true if `x * y >= x + y`, decided exactly.
///
/// With `X = x * SCALE` and `Y = y * SCALE` the test is
/// `X * Y >= SCALE * (X + Y)`, evaluated in 128 bits.
#[inline]
pub fn satisfies(x: Composite, y: Composite) -> bool {
    let (x, y) = (u128::from(x.scaled()), u128::from(y.scaled()));
    x * y >= u128::from(SCALE) * (x + y)
}

/// Counts qualifying pairs of `values` by direct comparison. No cap.
pub fn bruteforce_values(values: &[Composite]) -> u64 {
    let mut count = 0;
    for (p, &x) in values.iter().enumerate() {
        for &y in &values[p + 1..] {
            if satisfies(x, y) {
                count += 1;
            }
        }
    }
    count
}

/// Counts qualifying pairs of a view by direct comparison. No cap.
pub fn bruteforce_view(view: &CompositeView) -> u64 {
    bruteforce_values(view.as_slice())
}

/// Validates the parts and counts qualifying pairs by direct comparison.
///
/// Input order is irrelevant. The result is exact, not capped.
///
/// # Errors
///
/// Returns [`PairsError::LengthMismatch`] or
/// [`PairsError::FractionOutOfRange`].
pub fn bruteforce_count(wholes: &[u32], fractions: &[u32]) -> Result<u64, PairsError> {
    Ok(bruteforce_view(&CompositeView::from_parts(wholes, fractions)?))
}
