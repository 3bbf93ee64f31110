//! Backward Dijkstra over arrival-time functions.
//!
//! Same traversal as [`ScalarDijkstra`](crate::ScalarDijkstra), but each
//! state carries a whole envelope: "arrive here at `t`, reach the goal by
//! `env(t)`".  A frontier state starts from the identity shifted by its
//! static estimate.  Settling `n` composes every edge of `n`'s envelope with
//! each closed predecessor edge `p → n` and inserts the results into `p`'s
//! envelope; `p` is queued again whenever its earliest arrival improves.
//!
//! The envelopes are written straight into the heuristic table, where the
//! next search reads them through [`Heuristic::estimate`].
//!
//! [`Heuristic::estimate`]: atsipp_search::Heuristic::estimate

use rustc_hash::FxHashSet;
use tracing::trace;

use atsipp_atf::{EdgeAtf, compose};
use atsipp_core::{SearchStats, StateId};
use atsipp_search::HeuristicTable;

use crate::queue::push_or_decrease;
use crate::{DijkstraKey, DijkstraQueue, LearnContext, Learner};

#[derive(Clone, Debug)]
pub struct AtfDijkstra {
    queue:  DijkstraQueue,
    closed: FxHashSet<StateId>,
}

impl Default for AtfDijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl AtfDijkstra {
    pub fn new() -> Self {
        Self { queue: DijkstraQueue::new(0), closed: FxHashSet::default() }
    }
}

impl Learner for AtfDijkstra {
    fn name(&self) -> &'static str {
        "atf-dijkstra"
    }

    fn learn(&mut self, ctx: &LearnContext<'_>, table: &mut HeuristicTable, stats: &mut SearchStats) {
        let graph = ctx.graph;
        self.queue.clear();
        self.closed.clear();
        for (s, _) in ctx.open.closed() {
            self.closed.insert(s);
            table.reset_dynamic(s);
        }

        for node in ctx.open.frontier() {
            let h = table.static_estimate(graph.location(node.state));
            table.reset_dynamic(node.state);
            table.insert_dynamic(node.state, EdgeAtf::shift_identity(h));
            let value = table.dynamic_earliest(node.state);
            push_or_decrease(&mut self.queue, DijkstraKey { value, state: node.state });
        }

        let mut settled = 0u64;
        let mut inserted = 0u64;
        while !self.closed.is_empty() {
            let Some(n) = self.queue.pop() else { break };
            settled += 1;
            self.closed.remove(&n.state);

            let envelope: Vec<EdgeAtf> = table.dynamic(n.state).map(|e| e.edges()).unwrap_or_default();
            for p in graph.predecessors(n.state) {
                if !self.closed.contains(&p.from) {
                    continue;
                }
                for ap in &envelope {
                    let through = compose(ap, &p.atf);
                    if through.is_empty() {
                        continue;
                    }
                    let before = table.dynamic_earliest(p.from);
                    table.insert_dynamic(p.from, through);
                    inserted += 1;
                    let after = table.dynamic_earliest(p.from);
                    if after < before {
                        push_or_decrease(&mut self.queue, DijkstraKey { value: after, state: p.from });
                    }
                }
            }
        }
        stats.learn_expanded += settled;
        trace!(root = %ctx.root, settled, inserted, "atf backward dijkstra");
    }
}
