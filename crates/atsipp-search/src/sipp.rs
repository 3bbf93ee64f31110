//! Plain SIPP baseline with scalar arrival times.
//!
//! Each state keeps only its earliest arrival.  Moving along an edge of
//! duration `d` from a state reached at `g` arrives at
//!
//! ```text
//! max(g + d, edge.lower + d, v.lower)
//! ```
//!
//! which is feasible when the departure lies in both the source and the edge
//! interval and the arrival lies in the destination interval.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use atsipp_core::{Location, SearchStats, StateId, Time};
use atsipp_graph::SafeIntervalGraph;

use crate::index_heap::IndexedMinHeap;
use crate::{Heuristic, OpenKey, SearchError, SearchResult};

/// Path and arrival time found by [`Sipp::search`].
#[derive(Clone, Debug, PartialEq)]
pub struct SippOutcome {
    pub path:    Vec<StateId>,
    pub arrival: Time,
}

pub struct Sipp<'g> {
    graph: &'g SafeIntervalGraph,
    goal:  Location,
}

impl<'g> Sipp<'g> {
    pub fn new(graph: &'g SafeIntervalGraph, goal: Location) -> Self {
        Self { graph, goal }
    }

    /// Earliest arrival at the goal leaving `start` at `t`.
    pub fn search<H: Heuristic>(
        &self,
        start: StateId,
        t: Time,
        heuristic: &H,
        stats: &mut SearchStats,
    ) -> SearchResult<SippOutcome> {
        let g = self.graph;
        let mut heap: IndexedMinHeap<OpenKey> = IndexedMinHeap::new(g.state_count());
        // Best arrival and parent of every generated state.
        let mut best: FxHashMap<StateId, (Time, Option<StateId>)> = FxHashMap::default();
        let mut closed = FxHashSet::default();

        let h = heuristic.estimate(start, g.state(start).location, t);
        heap.push(OpenKey { f: t + h, g: t, state: start });
        best.insert(start, (t, None));

        while let Some(&top) = heap.peek() {
            if g.state(top.state).location == self.goal {
                let path = backtrack(&best, top.state);
                debug!(arrival = top.g, states = path.len(), "sipp reached goal");
                return Ok(SippOutcome { path, arrival: top.g });
            }
            heap.pop();
            closed.insert(top.state);
            stats.expanded += 1;

            let from = g.state(top.state);
            for &eid in g.out_edges(top.state) {
                let e = g.edge(eid);
                if closed.contains(&e.to) {
                    continue;
                }
                let to = g.state(e.to);
                let d = e.duration;
                let arrival = (top.g + d).max(e.interval.lower() + d).max(to.interval.lower());
                let depart = arrival - d;
                if !from.interval.contains(depart)
                    || !e.interval.contains(depart)
                    || !to.interval.contains(arrival)
                {
                    continue;
                }
                let h = heuristic.estimate(e.to, to.location, arrival);
                let key = OpenKey { f: arrival + h, g: arrival, state: e.to };
                if heap.contains_index(e.to.index()) {
                    if best.get(&e.to).is_some_and(|&(old, _)| arrival < old) {
                        stats.decreased += 1;
                        heap.update_key(key);
                        best.insert(e.to, (arrival, Some(top.state)));
                    }
                } else {
                    stats.generated += 1;
                    heap.push(key);
                    best.insert(e.to, (arrival, Some(top.state)));
                }
            }
        }
        Err(SearchError::NoPath { start, goal: self.goal })
    }
}

fn backtrack(best: &FxHashMap<StateId, (Time, Option<StateId>)>, s: StateId) -> Vec<StateId> {
    let mut path = vec![s];
    let mut cur = s;
    while let Some(&(_, Some(p))) = best.get(&cur) {
        path.push(p);
        cur = p;
    }
    path.reverse();
    path
}
