//! One-shot planning by variant name.

use std::time::Instant;

use tracing::info;

use atsipp_core::{Location, SearchStats, StateId, Time};
use atsipp_graph::{SafeIntervalGraph, TimeDependentGraph};
use atsipp_search::{AugmentedSipp, ExpansionBudget, OctileHeuristic, Sipp};

use crate::{PlanError, PlanObserver, PlanOutcome, PlanResult, PlannerBuilder, SearchVariant};

/// A single planning query.
///
/// `intervals` is the safe-interval graph `graph` was compiled from; only
/// the `sipp` variant needs it.  State ids must agree between the two.
#[derive(Copy, Clone)]
pub struct Problem<'g> {
    pub graph:      &'g TimeDependentGraph,
    pub intervals:  Option<&'g SafeIntervalGraph>,
    pub start:      StateId,
    pub goal:       Location,
    pub start_time: Time,
}

impl<'g> Problem<'g> {
    /// Query over `graph`, starting from the state at `start` that is safe at
    /// `start_time`.
    pub fn new(
        graph: &'g TimeDependentGraph,
        start: Location,
        goal: Location,
        start_time: Time,
    ) -> PlanResult<Self> {
        let start = graph.find_earliest(start, start_time)?;
        Ok(Self { graph, intervals: None, start, goal, start_time })
    }

    pub fn with_intervals(mut self, intervals: &'g SafeIntervalGraph) -> Self {
        self.intervals = Some(intervals);
        self
    }
}

/// Run `variant` on `problem`.
///
/// `budget` is only used by the real-time variants.  `stats` is reset first.
pub fn plan<O: PlanObserver>(
    variant: SearchVariant,
    problem: &Problem<'_>,
    budget: ExpansionBudget,
    stats: &mut SearchStats,
    observer: &mut O,
) -> PlanResult<PlanOutcome> {
    let Problem { graph, intervals, start, goal, start_time } = *problem;
    info!(%variant, %start, %goal, start_time, %budget, "planning");

    let outcome = match variant {
        SearchVariant::Sipp => {
            let intervals = intervals.ok_or_else(|| {
                PlanError::Config("sipp needs the safe-interval graph, not only the compiled one".into())
            })?;
            stats.init();
            let clock = Instant::now();
            let found = Sipp::new(intervals, goal).search(start, start_time, &OctileHeuristic::new(goal), stats);
            stats.add_search_time(clock.elapsed());
            let found = found?;
            PlanOutcome { path: found.path, arrival_time: found.arrival, iterations: 1 }
        }
        SearchVariant::Asipp => {
            stats.init();
            let clock = Instant::now();
            let mut search = AugmentedSipp::new(graph, goal);
            let found = search.search(
                start,
                start_time,
                ExpansionBudget::Unbounded,
                &OctileHeuristic::new(goal),
                stats,
            );
            stats.add_search_time(clock.elapsed());
            let found = found?;
            PlanOutcome { arrival_time: found.arrival_time(), path: found.path, iterations: 1 }
        }
        real_time => {
            let learner = real_time
                .learner()
                .ok_or_else(|| PlanError::Config(format!("{real_time} has no learning pass")))?;
            let mut planner = PlannerBuilder::new(graph, goal, learner).budget(budget).build()?;
            return planner.run(start, start_time, stats, observer);
        }
    };

    info!(%variant, arrival = outcome.arrival_time, states = outcome.path.len(), "goal reached");
    observer.on_finish(&outcome);
    Ok(outcome)
}
