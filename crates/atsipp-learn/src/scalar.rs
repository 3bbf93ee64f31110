//! Backward Dijkstra over static heuristic values.
//!
//! Seeds every frontier state with its location's static estimate and
//! relaxes predecessor edges whose source was closed by the search, using
//! the octile distance between the two locations as edge cost.  Each closed
//! state is settled at most once; unreachable closed states keep their old
//! value.  When the queue drains, every touched location's static value is
//! raised to the newly computed one if that is larger.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use atsipp_core::{Location, SearchStats, StateId, Time};
use atsipp_search::HeuristicTable;

use crate::queue::push_or_decrease;
use crate::{DijkstraKey, DijkstraQueue, LearnContext, Learner};

/// Reusable buffers for the scalar backward pass.
#[derive(Clone, Debug)]
pub struct ScalarDijkstra {
    queue:  DijkstraQueue,
    /// Newly computed estimate per location.
    values: FxHashMap<Location, Time>,
    closed: FxHashSet<StateId>,
}

impl Default for ScalarDijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarDijkstra {
    pub fn new() -> Self {
        Self {
            queue:  DijkstraQueue::new(0),
            values: FxHashMap::default(),
            closed: FxHashSet::default(),
        }
    }
}

impl Learner for ScalarDijkstra {
    fn name(&self) -> &'static str {
        "scalar-dijkstra"
    }

    fn learn(&mut self, ctx: &LearnContext<'_>, table: &mut HeuristicTable, stats: &mut SearchStats) {
        let graph = ctx.graph;
        self.queue.clear();
        self.values.clear();
        self.closed.clear();
        self.closed.extend(ctx.open.closed().map(|(s, _)| s));

        for node in ctx.open.frontier() {
            let loc = graph.location(node.state);
            let h = table.static_estimate(loc);
            self.values.insert(loc, h);
            push_or_decrease(&mut self.queue, DijkstraKey { value: h, state: node.state });
        }

        let mut settled = 0u64;
        while !self.closed.is_empty() {
            let Some(n) = self.queue.pop() else { break };
            settled += 1;
            self.closed.remove(&n.state);

            let n_loc = graph.location(n.state);
            let h_n = self.values.get(&n_loc).copied().unwrap_or(Time::INFINITY);
            for p in graph.predecessors(n.state) {
                if !self.closed.contains(&p.from) {
                    continue;
                }
                let p_loc = graph.location(p.from);
                let candidate = p_loc.octile_distance(n_loc) + h_n;
                let slot = self.values.entry(p_loc).or_insert(Time::INFINITY);
                if candidate < *slot {
                    *slot = candidate;
                    push_or_decrease(&mut self.queue, DijkstraKey { value: candidate, state: p.from });
                }
            }
        }
        stats.learn_expanded += settled;

        for (&loc, &value) in &self.values {
            table.raise_static(loc, value);
        }
        trace!(root = %ctx.root, settled, locations = self.values.len(), "scalar backward dijkstra");
    }
}
