//! Planner observer trait for progress reporting and data collection.

use atsipp_core::{Location, StateId, Time};
use atsipp_search::HeuristicTable;

use crate::PlanOutcome;

/// One search/learn/move step of the real-time loop.
///
/// Counters and timers cover this iteration only.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationRecord {
    /// Zero-based.
    pub iteration:      usize,
    pub state:          StateId,
    pub location:       Location,
    /// Time at which the agent stands at `state`.
    pub time:           Time,
    /// State moved to, reached at `arrival`.
    pub next:           StateId,
    pub arrival:        Time,
    pub expanded:       u64,
    pub learn_expanded: u64,
    pub search_ms:      f64,
    pub learning_ms:    f64,
}

/// Callbacks invoked by [`Planner::run`][crate::Planner::run].
///
/// All methods have default no-op implementations.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl PlanObserver for Progress {
///     fn on_iteration(&mut self, r: &IterationRecord, _table: &HeuristicTable) {
///         eprintln!("{} {} -> t={}", r.iteration, r.location, r.arrival);
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called after the move of each iteration has been decided.
    ///
    /// `table` is the heuristic table as left by this iteration's learning.
    fn on_iteration(&mut self, _record: &IterationRecord, _table: &HeuristicTable) {}

    /// Called once the goal has been reached.
    fn on_finish(&mut self, _outcome: &PlanOutcome) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}

impl<O: PlanObserver + ?Sized> PlanObserver for &mut O {
    fn on_iteration(&mut self, record: &IterationRecord, table: &HeuristicTable) {
        (**self).on_iteration(record, table);
    }

    fn on_finish(&mut self, outcome: &PlanOutcome) {
        (**self).on_finish(outcome);
    }
}
