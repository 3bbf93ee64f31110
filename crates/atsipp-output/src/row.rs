//! Plain data row types written by output backends.

use atsipp_core::{INFINITY, StateId, Time};
use atsipp_graph::TimeDependentGraph;
use atsipp_planner::IterationRecord;

/// One visited state of a plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRow {
    pub step:       u64,
    pub x:          u16,
    pub y:          u16,
    pub safe_lower: Time,
    pub safe_upper: Time,
    /// Time the state is reached (start time for the first row).
    pub time:       Time,
}

/// Per-iteration counters of a real-time run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRow {
    pub iteration:      u64,
    pub x:              u16,
    pub y:              u16,
    pub time:           Time,
    pub expanded:       u64,
    pub learn_expanded: u64,
    pub search_ms:      f64,
    pub learning_ms:    f64,
}

impl From<&IterationRecord> for IterationRow {
    fn from(r: &IterationRecord) -> Self {
        Self {
            iteration:      r.iteration as u64,
            x:              r.location.x,
            y:              r.location.y,
            time:           r.time,
            expanded:       r.expanded,
            learn_expanded: r.learn_expanded,
            search_ms:      r.search_ms,
            learning_ms:    r.learning_ms,
        }
    }
}

/// Rows for `path`, timing each step by the earliest arrival over the
/// edges joining consecutive states.  A step with no such edge is `∞`.
pub fn path_rows(graph: &TimeDependentGraph, path: &[StateId], start_time: Time) -> Vec<PathRow> {
    let mut rows = Vec::with_capacity(path.len());
    let mut t = start_time;
    for (step, &s) in path.iter().enumerate() {
        if step > 0 {
            let prev = path[step - 1];
            t = graph
                .successors(prev)
                .filter(|e| e.to == s)
                .map(|e| e.atf.arrival_time(t))
                .fold(INFINITY, Time::min);
        }
        let state = graph.state(s);
        rows.push(PathRow {
            step:       step as u64,
            x:          state.location.x,
            y:          state.location.y,
            safe_lower: state.interval.lower(),
            safe_upper: state.interval.upper(),
            time:       t,
        });
    }
    rows
}
