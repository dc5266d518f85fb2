//! Input generators shared by the mulpairs tests, benches and crosscheck
//! suite.
//!
//! Inputs are lists of `(whole, fraction)` tuples sorted ascending and then
//! split into the two parallel arrays the counting API takes. Sorting the
//! tuples sorts by composite value, since the fraction is always below one.
//!
//! This crate is NOT part of the published API.

#![deny(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Largest valid fraction numerator.
pub const MAX_FRACTION: u32 = 999_999;

/// Bounds for generated inputs. All ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputShape {
    /// Minimum number of elements.
    pub min_len: usize,
    /// Maximum number of elements.
    pub max_len: usize,
    /// Smallest whole part.
    pub min_whole: u32,
    /// Largest whole part.
    pub max_whole: u32,
    /// Smallest fraction numerator.
    pub min_fraction: u32,
    /// Largest fraction numerator.
    pub max_fraction: u32,
}

impl Default for InputShape {
    fn default() -> Self {
        Self {
            min_len: 0,
            max_len: 300,
            min_whole: 0,
            max_whole: 1000,
            min_fraction: 0,
            max_fraction: MAX_FRACTION,
        }
    }
}

impl InputShape {
    /// Sets the length bounds.
    pub fn lengths(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    /// Sets the whole-part bounds.
    pub fn wholes(mut self, min_whole: u32, max_whole: u32) -> Self {
        self.min_whole = min_whole;
        self.max_whole = max_whole;
        self
    }

    /// Sets the fraction bounds.
    pub fn fractions(mut self, min_fraction: u32, max_fraction: u32) -> Self {
        self.min_fraction = min_fraction;
        self.max_fraction = max_fraction;
        self
    }
}

/// Parallel whole/fraction arrays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parts {
    /// Whole parts.
    pub wholes: Vec<u32>,
    /// Fraction numerators.
    pub fractions: Vec<u32>,
}

impl Parts {
    /// Splits `(whole, fraction)` tuples into parallel arrays.
    pub fn from_tuples(tuples: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let (wholes, fractions) = tuples.into_iter().unzip();
        Self { wholes, fractions }
    }

    /// `len` copies of one value.
    pub fn repeat(whole: u32, fraction: u32, len: usize) -> Self {
        Self {
            wholes: vec![whole; len],
            fractions: vec![fraction; len],
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.wholes.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.wholes.is_empty()
    }

    /// The elements as `(whole, fraction)` tuples.
    pub fn tuples(&self) -> Vec<(u32, u32)> {
        self.wholes
            .iter()
            .copied()
            .zip(self.fractions.iter().copied())
            .collect()
    }

    /// A copy with the elements permuted by `rng`.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut tuples = self.tuples();
        tuples.shuffle(rng);
        Self::from_tuples(tuples)
    }
}

/// Proptest strategy for sorted inputs within `shape`.
pub fn sorted_parts(shape: InputShape) -> impl Strategy<Value = Parts> {
    let tuple = (
        shape.min_whole..=shape.max_whole,
        shape.min_fraction..=shape.max_fraction,
    );
    prop::collection::vec(tuple, shape.min_len..=shape.max_len).prop_map(|mut tuples| {
        tuples.sort_unstable();
        Parts::from_tuples(tuples)
    })
}

/// Proptest strategy biased toward the values where regimes change.
///
/// Draws whole parts from `0..=3` plus a few larger values, and fractions
/// from a mix of edge numerators and uniform values, so ties, zeros and
/// exact equalities such as `1.25 * 5 == 1.25 + 5` come up often.
pub fn edge_biased_parts(max_len: usize) -> impl Strategy<Value = Parts> {
    let whole = prop_oneof![4 => 0u32..=3, 1 => 4u32..=1000];
    let fraction = prop_oneof![
        1 => Just(0u32),
        1 => Just(1u32),
        1 => Just(MAX_FRACTION),
        1 => prop::sample::select(vec![250_000u32, 500_000, 20_000, 333_333, 900_000]),
        2 => 0u32..=MAX_FRACTION,
    ];
    prop::collection::vec((whole, fraction), 0..=max_len).prop_map(|mut tuples| {
        tuples.sort_unstable();
        Parts::from_tuples(tuples)
    })
}

/// Draws a sorted input within `shape` from `rng`.
pub fn random_sorted_parts<R: Rng + ?Sized>(rng: &mut R, shape: InputShape) -> Parts {
    let len = rng.gen_range(shape.min_len..=shape.max_len);
    let mut tuples: Vec<(u32, u32)> = (0..len)
        .map(|_| {
            (
                rng.gen_range(shape.min_whole..=shape.max_whole),
                rng.gen_range(shape.min_fraction..=shape.max_fraction),
            )
        })
        .collect();
    tuples.sort_unstable();
    Parts::from_tuples(tuples)
}
