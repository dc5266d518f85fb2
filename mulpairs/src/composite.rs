//! Fixed-point composite values and the sorted view the counter works on.
//!
//! A composite value is `whole + fraction / 1_000_000`. It is stored as the
//! exact integer `whole * 1_000_000 + fraction`, so every comparison the
//! counter makes is an integer comparison and boundary cases such as
//! `x * y == x + y` are decided exactly.
//!
//! # Example
//!
//! ```
//! use mulpairs::Composite;
//!
//! let c = Composite::from_parts(1, 500_000).unwrap();
//! assert_eq!(c.whole(), 1);
//! assert_eq!(c.fraction(), 500_000);
//! assert_eq!(c.to_string(), "1.500000");
//! ```

use core::fmt;

use crate::error::PairsError;
use crate::regime::Regime;
use crate::search::{self, Bound};

/// Denominator of the fraction part.
pub const SCALE: u64 = 1_000_000;

/// Largest accepted fraction numerator.
pub const MAX_FRACTION: u32 = 999_999;

// ============================================================================
// Composite
// ============================================================================

/// An exact fixed-point value `whole + fraction / SCALE`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Composite(u64);

impl Composite {
    /// The value 0.
    pub const ZERO: Self = Self(0);

    /// The value 1.
    pub const ONE: Self = Self(SCALE);

    /// The value 2.
    pub const TWO: Self = Self(2 * SCALE);

    /// Builds a composite value from its whole and fraction parts.
    ///
    /// # Errors
    ///
    /// Returns [`PairsError::FractionOutOfRange`] (reported at index 0) if
    /// `fraction` exceeds [`MAX_FRACTION`].
    pub fn from_parts(whole: u32, fraction: u32) -> Result<Self, PairsError> {
        Self::checked(0, whole, fraction)
    }

    /// Builds a composite value, reporting `index` on failure.
    pub(crate) fn checked(index: usize, whole: u32, fraction: u32) -> Result<Self, PairsError> {
        if fraction > MAX_FRACTION {
            return Err(PairsError::FractionOutOfRange {
                index,
                value: fraction,
            });
        }
        Ok(Self(u64::from(whole) * SCALE + u64::from(fraction)))
    }

    /// Wraps a raw scaled value (`value * SCALE`).
    #[inline]
    pub const fn from_scaled(scaled: u64) -> Self {
        Self(scaled)
    }

    /// The raw scaled value.
    #[inline]
    pub const fn scaled(self) -> u64 {
        self.0
    }

    /// The whole part.
    #[inline]
    pub const fn whole(self) -> u64 {
        self.0 / SCALE
    }

    /// The fraction numerator, in `0..=999_999`.
    #[inline]
    pub const fn fraction(self) -> u32 {
        (self.0 % SCALE) as u32
    }

    /// The counting regime this value falls into.
    #[inline]
    pub fn regime(self) -> Regime {
        Regime::of(self)
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Composite({self})")
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.whole(), self.fraction())
    }
}

// ============================================================================
// CompositeView
// ============================================================================

/// Composite values in non-decreasing order.
///
/// The view is the only input the boundary counter and the oracle accept, so
/// holding one means the length, range and order preconditions were checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompositeView {
    values: Vec<Composite>,
}

impl CompositeView {
    /// Validates the parts and sorts a working copy.
    ///
    /// # Errors
    ///
    /// Returns [`PairsError::LengthMismatch`] or
    /// [`PairsError::FractionOutOfRange`].
    pub fn from_parts(wholes: &[u32], fractions: &[u32]) -> Result<Self, PairsError> {
        let mut values = collect(wholes, fractions)?;
        values.sort_unstable();
        Ok(Self { values })
    }

    /// Validates the parts and requires them to be sorted already.
    ///
    /// # Errors
    ///
    /// Returns [`PairsError::LengthMismatch`],
    /// [`PairsError::FractionOutOfRange`] or [`PairsError::Unsorted`].
    pub fn from_sorted_parts(wholes: &[u32], fractions: &[u32]) -> Result<Self, PairsError> {
        let values = collect(wholes, fractions)?;
        if let Some(index) = values
            .windows(2)
            .position(|w| w[1] < w[0])
            .map(|i| i + 1)
        {
            return Err(PairsError::Unsorted { index });
        }
        Ok(Self { values })
    }

    /// Sorts already-built composite values.
    pub fn from_values(mut values: Vec<Composite>) -> Self {
        values.sort_unstable();
        Self { values }
    }

    /// The sorted values.
    #[inline]
    pub fn as_slice(&self) -> &[Composite] {
        &self.values
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the view holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Boundary search over the inclusive range `[start, finish]`.
    ///
    /// # Errors
    ///
    /// Returns [`PairsError::InvalidRange`] if `start > finish`.
    pub fn find(&self, start: usize, finish: usize, bound: Bound) -> Result<Option<usize>, PairsError> {
        search::find_index(&self.values, start, finish, bound)
    }
}

fn collect(wholes: &[u32], fractions: &[u32]) -> Result<Vec<Composite>, PairsError> {
    if wholes.len() != fractions.len() {
        return Err(PairsError::LengthMismatch {
            a: wholes.len(),
            b: fractions.len(),
        });
    }
    wholes
        .iter()
        .zip(fractions)
        .enumerate()
        .map(|(index, (&whole, &fraction))| Composite::checked(index, whole, fraction))
        .collect()
}
