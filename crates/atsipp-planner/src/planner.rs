//! The `Planner` struct and its real-time loop.

use std::time::Instant;

use tracing::{debug, info};

use atsipp_core::{Location, SearchStats, StateId, Time};
use atsipp_graph::TimeDependentGraph;
use atsipp_learn::{LearnContext, Learner};
use atsipp_search::{AugmentedSipp, ExpansionBudget, HeuristicTable};

use crate::{IterationRecord, PlanError, PlanObserver, PlanResult};

/// Result of one planning call.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanOutcome {
    /// Visited states, start first, ending on the goal location.
    pub path:         Vec<StateId>,
    /// Time at which the last state of `path` is reached.
    pub arrival_time: Time,
    /// Search/learn/move iterations; 1 for the offline variants.
    pub iterations:   usize,
}

/// Real-time planner: repeated bounded search, learning and one move.
///
/// The heuristic table persists across [`run`](Self::run) calls, so a second
/// run over the same graph and goal starts from what the first one learned.
///
/// Create via [`PlannerBuilder`][crate::PlannerBuilder].
pub struct Planner<'g, L: Learner> {
    pub(crate) graph:          &'g TimeDependentGraph,
    pub(crate) goal:           Location,
    pub(crate) budget:         ExpansionBudget,
    pub(crate) learner:        L,
    pub(crate) table:          HeuristicTable,
    pub(crate) search:         AugmentedSipp<'g>,
    pub(crate) max_iterations: Option<usize>,
}

impl<'g, L: Learner> Planner<'g, L> {
    pub fn goal(&self) -> Location {
        self.goal
    }

    pub fn budget(&self) -> ExpansionBudget {
        self.budget
    }

    pub fn learner(&self) -> &L {
        &self.learner
    }

    /// What has been learned so far.
    pub fn table(&self) -> &HeuristicTable {
        &self.table
    }

    pub fn into_table(self) -> HeuristicTable {
        self.table
    }

    /// Walk from `start`, standing there at `start_time`, until the goal.
    ///
    /// `stats` is reset first and then accumulates over all iterations.
    pub fn run<O: PlanObserver>(
        &mut self,
        start: StateId,
        start_time: Time,
        stats: &mut SearchStats,
        observer: &mut O,
    ) -> PlanResult<PlanOutcome> {
        stats.init();
        let graph = self.graph;
        let mut path = Vec::new();
        let mut cur = start;
        let mut t = start_time;

        while graph.location(cur) != self.goal {
            let iteration = path.len();
            if self.max_iterations.is_some_and(|max| iteration >= max) {
                return Err(PlanError::IterationLimit(iteration));
            }
            path.push(cur);
            let before = stats.clone();

            // ── ① Search ──────────────────────────────────────────────────
            let clock = Instant::now();
            let outcome = self.search.search(cur, t, self.budget, &self.table, stats)?;
            stats.add_search_time(clock.elapsed());

            // ── ② Learn ───────────────────────────────────────────────────
            let clock = Instant::now();
            let ctx = LearnContext::new(graph, self.search.open(), cur);
            self.learner.learn(&ctx, &mut self.table, stats);
            stats.add_learning_time(clock.elapsed());

            // ── ③ Move ────────────────────────────────────────────────────
            let eid = outcome.first_edge().ok_or(PlanError::NoMove { state: cur, time: t })?;
            let edge = graph.edge(eid);
            let arrival = edge.atf.arrival_time(t);

            let record = IterationRecord {
                iteration,
                state: cur,
                location: graph.location(cur),
                time: t,
                next: edge.to,
                arrival,
                expanded: stats.expanded - before.expanded,
                learn_expanded: stats.learn_expanded - before.learn_expanded,
                search_ms: stats.search_time_ms - before.search_time_ms,
                learning_ms: stats.learning_time_ms - before.learning_time_ms,
            };
            debug!(
                iteration,
                from = %record.location,
                to = %graph.location(edge.to),
                depart = t,
                arrival,
                expanded = record.expanded,
                learn_expanded = record.learn_expanded,
                "planning iteration"
            );
            observer.on_iteration(&record, &self.table);

            cur = edge.to;
            t = arrival;
        }
        path.push(cur);

        let outcome = PlanOutcome { iterations: path.len() - 1, path, arrival_time: t };
        info!(
            learner = self.learner.name(),
            arrival = outcome.arrival_time,
            iterations = outcome.iterations,
            expanded = stats.expanded,
            learn_expanded = stats.learn_expanded,
            "goal reached"
        );
        observer.on_finish(&outcome);
        Ok(outcome)
    }
}
