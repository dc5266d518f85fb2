//! Closed index intervals and cross-interval pair counting.

use core::fmt;

/// A closed index interval `[from, to]`. Empty when `to < from`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// First index.
    pub from: usize,
    /// Last index (inclusive).
    pub to: usize,
}

impl Interval {
    /// Creates `[from, to]`.
    #[inline]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Number of indices in the interval.
    #[inline]
    pub const fn len(self) -> u64 {
        if self.to < self.from {
            0
        } else {
            (self.to - self.from) as u64 + 1
        }
    }

    /// Returns true if the interval holds no index.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.to < self.from
    }

    /// Indices present in both intervals.
    pub fn intersection(self, other: Self) -> Self {
        Self {
            from: self.from.max(other.from),
            to: self.to.min(other.to),
        }
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

/// Number of 2-combinations of `n` items.
#[inline]
pub const fn choose_two(n: u64) -> u64 {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// Counts unordered pairs `{i, j}`, `i != j`, with one index in each interval.
///
/// Every pair is counted once, also when the intervals overlap: the raw
/// product `|a| * |b|` counts each overlapping index against itself once and
/// each unordered pair inside the overlap twice, so `0 + 1 + ... + k`, i.e.
/// `k * (k + 1) / 2`, is subtracted for an overlap of `k` indices.
///
/// ```
/// use mulpairs::{count_cross_pairs, Interval};
///
/// // Disjoint: plain product.
/// assert_eq!(count_cross_pairs(Interval::new(1, 4), Interval::new(10, 13)), 16);
/// // Identical: n choose 2.
/// assert_eq!(count_cross_pairs(Interval::new(10, 13), Interval::new(10, 13)), 6);
/// ```
pub fn count_cross_pairs(a: Interval, b: Interval) -> u64 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (left, right) = if (a.from, a.to) <= (b.from, b.to) {
        (a, b)
    } else {
        (b, a)
    };
    let overlap = left.intersection(right).len();
    left.len() * right.len() - overlap * (overlap + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table() {
        let cases = [
            ((0, 4), (1, 4), 10),
            ((0, 5), (1, 5), 15),
            ((0, 5), (3, 5), 12),
            ((1, 4), (10, 13), 16),
            ((0, 1), (1, 2), 3),
            ((0, 0), (0, 0), 0),
            ((0, 0), (0, 1), 1),
            ((0, 0), (1, 0), 0),
            ((0, 1), (1, 1), 1),
            ((2, 5), (3, 5), 6),
            ((1, 0), (3, 5), 0),
            ((10, 13), (10, 13), 6),
        ];
        for ((af, at), (bf, bt), expected) in cases {
            let got = count_cross_pairs(Interval::new(af, at), Interval::new(bf, bt));
            assert_eq!(got, expected, "[{af}, {at}] x [{bf}, {bt}]");
        }
    }

    #[test]
    fn argument_order_does_not_matter() {
        let a = Interval::new(3, 9);
        let b = Interval::new(0, 5);
        assert_eq!(count_cross_pairs(a, b), count_cross_pairs(b, a));
    }

    #[test]
    fn nested_interval_matches_enumeration() {
        let outer = Interval::new(0, 7);
        let inner = Interval::new(2, 4);
        let mut pairs = std::collections::BTreeSet::new();
        for i in outer.from..=outer.to {
            for j in inner.from..=inner.to {
                if i != j {
                    pairs.insert((i.min(j), i.max(j)));
                }
            }
        }
        assert_eq!(count_cross_pairs(outer, inner), pairs.len() as u64);
    }

    #[test]
    fn identical_intervals_are_choose_two() {
        for n in 1..50usize {
            let i = Interval::new(7, 7 + n - 1);
            assert_eq!(count_cross_pairs(i, i), choose_two(n as u64));
        }
    }

    #[test]
    fn empty_interval_has_no_length() {
        assert_eq!(Interval::new(5, 4).len(), 0);
        assert!(Interval::new(5, 4).is_empty());
        assert_eq!(Interval::new(5, 5).len(), 1);
    }

    #[test]
    fn choose_two_small_values() {
        assert_eq!(choose_two(0), 0);
        assert_eq!(choose_two(1), 0);
        assert_eq!(choose_two(2), 1);
        assert_eq!(choose_two(100), 4950);
        assert_eq!(choose_two(100_000), 4_999_950_000);
    }
}
