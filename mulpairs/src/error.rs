//! Error types for the counting crate.
//!
//! Every variant is a caller precondition violation. They are raised eagerly,
//! before any counting starts, so a failed call never yields a partial count.
//! A boundary search that finds nothing is not an error: it returns `None`.

/// Precondition violations reported by the `mulpairs` entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairsError {
    /// The whole-part and fraction-part sequences differ in length.
    #[error("length mismatch: {a} whole parts but {b} fraction parts")]
    LengthMismatch {
        /// Length of the whole-part sequence.
        a: usize,
        /// Length of the fraction-part sequence.
        b: usize,
    },

    /// A fraction part exceeds 999,999.
    #[error("fraction part {value} at index {index} exceeds 999999")]
    FractionOutOfRange {
        /// Position of the offending element.
        index: usize,
        /// The rejected fraction numerator.
        value: u32,
    },

    /// The strict entry point received values that are not in
    /// non-decreasing order.
    #[error("composite values are not sorted: index {index} is smaller than its predecessor")]
    Unsorted {
        /// First index whose value is smaller than the value before it.
        index: usize,
    },

    /// A boundary search was asked to scan an inverted range.
    #[error("invalid search range: start {start} is past finish {finish}")]
    InvalidRange {
        /// Requested first index.
        start: usize,
        /// Requested last index (inclusive).
        finish: usize,
    },
}
