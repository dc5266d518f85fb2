//! Observability hook for regime-boundary decisions.
//!
//! The counter is a pure function; it only reports what it decided through
//! the [`Observer`] it is handed. [`NoopObserver`] is the default,
//! [`TracingObserver`] forwards to `tracing`, and any
//! `FnMut(&BoundaryEvent)` closure works as an ad-hoc observer.
//!
//! ```
//! use mulpairs::{count_pairs_observed, BoundaryEvent};
//!
//! let mut events = Vec::new();
//! let count = count_pairs_observed(&[0, 0, 2], &[0, 0, 0], &mut |e: &BoundaryEvent| {
//!     events.push(e.clone())
//! })
//! .unwrap();
//! assert_eq!(count, 1);
//! assert!(matches!(events[0], BoundaryEvent::ZeroRun { len: 2, pairs: 1 }));
//! ```

use crate::composite::Composite;
use crate::interval::Interval;

/// A decision taken by the boundary counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryEvent {
    /// The leading run of zero values was counted.
    ZeroRun {
        /// Number of zero values.
        len: u64,
        /// Pairs among them.
        pairs: u64,
    },
    /// No value is `>= 2`; only the zero run contributes.
    ShortCircuit {
        /// The zero-run contribution returned as the total.
        zero_pairs: u64,
    },
    /// The suffix of values `>= 2` was counted.
    HighSuffix {
        /// First index of the suffix.
        start: usize,
        /// Number of values in the suffix.
        len: u64,
        /// Pairs among them.
        pairs: u64,
    },
    /// A run of equal intermediate values was paired against the suffix.
    IntermediateRun {
        /// Indices holding the repeated value.
        run: Interval,
        /// Smallest partner value satisfying the inequality.
        threshold: Composite,
        /// First suffix index at or above the threshold, if any.
        first_match: Option<usize>,
        /// Pairs contributed by the run.
        pairs: u64,
    },
    /// The exact total exceeded the cap and was clamped.
    Saturated {
        /// The exact, uncapped total.
        total: u64,
    },
}

/// Receives [`BoundaryEvent`]s while a count is in progress.
pub trait Observer {
    /// Called once per decision, in the order the decisions are taken.
    fn observe(&mut self, event: &BoundaryEvent);
}

impl<F: FnMut(&BoundaryEvent)> Observer for F {
    #[inline]
    fn observe(&mut self, event: &BoundaryEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn observe(&mut self, _event: &BoundaryEvent) {}
}

/// Logs every event through `tracing`.
///
/// Regime decisions are logged at debug level, saturation at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn observe(&mut self, event: &BoundaryEvent) {
        match *event {
            BoundaryEvent::ZeroRun { len, pairs } => {
                tracing::debug!(len, pairs, "zero run counted");
            }
            BoundaryEvent::ShortCircuit { zero_pairs } => {
                tracing::debug!(zero_pairs, "no value >= 2, skipping high and intermediate regimes");
            }
            BoundaryEvent::HighSuffix { start, len, pairs } => {
                tracing::debug!(start, len, pairs, "high suffix counted");
            }
            BoundaryEvent::IntermediateRun {
                run,
                threshold,
                first_match,
                pairs,
            } => {
                tracing::debug!(
                    run = ?run,
                    %threshold,
                    first_match = ?first_match,
                    pairs,
                    "intermediate run paired"
                );
            }
            BoundaryEvent::Saturated { total } => {
                tracing::info!(total, "pair count saturated at cap");
            }
        }
    }
}
