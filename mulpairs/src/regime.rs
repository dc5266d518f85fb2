//! Regime classification of composite values.
//!
//! For `x <= y`, the sign of `x*y - x - y` is decided almost entirely by
//! which band `x` falls into:
//!
//! | Regime | Band | Pairs with a larger `y` |
//! |--------|------|-------------------------|
//! | [`Regime::Unit`] | `0 <= x <= 1` | only `x = y = 0` |
//! | [`Regime::Intermediate`] | `1 < x < 2` | `y >= x / (x - 1)` |
//! | [`Regime::High`] | `x >= 2` | every `y >= x` |

use crate::composite::{Composite, SCALE};

/// Band of a composite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// `0 <= x <= 1`.
    Unit,
    /// `1 < x < 2`: whole part 1 with a nonzero fraction.
    Intermediate,
    /// `x >= 2`.
    High,
}

impl Regime {
    /// Classifies a value.
    #[inline]
    pub fn of(value: Composite) -> Self {
        if value <= Composite::ONE {
            Self::Unit
        } else if value < Composite::TWO {
            Self::Intermediate
        } else {
            Self::High
        }
    }
}

/// Smallest `y` (scaled) such that `x * y >= x + y` for an intermediate `x`.
///
/// With `X = x * SCALE` and `Y = y * SCALE` the inequality reads
/// `X * Y >= SCALE * (X + Y)`, i.e. `Y >= SCALE * X / (X - SCALE)`. The
/// division is rounded up so the returned threshold is exact.
///
/// Returns `None` when `x` is not intermediate.
pub fn intermediate_threshold(x: Composite) -> Option<Composite> {
    if Regime::of(x) != Regime::Intermediate {
        return None;
    }
    let numerator = SCALE * x.scaled();
    let denominator = x.scaled() - SCALE;
    Some(Composite::from_scaled(numerator.div_ceil(denominator)))
}
