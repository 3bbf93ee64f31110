//! Bounded Augmented SIPP.
//!
//! A* over a [`TimeDependentGraph`] where the cost of a node is a whole
//! arrival-time function of the departure time from the search root, and the
//! priority is `g.earliest_arrival_time() + h`.
//!
//! # Termination
//!
//! Before each pop the top node is inspected.  The search stops, leaving
//! that node on the frontier, when
//!
//! | Condition                                   | `reached_goal` |
//! |---------------------------------------------|----------------|
//! | the top node stands on the goal location    | `true`         |
//! | the expansion budget is used up             | `false`        |
//!
//! An empty frontier is [`SearchError::NoPath`].  Closed states are never
//! reopened, which is exact for consistent heuristics.

use tracing::{debug, trace, warn};

use atsipp_atf::{EdgeAtf, compose};
use atsipp_core::{EdgeId, Location, SearchStats, StateId, Time};
use atsipp_graph::TimeDependentGraph;

use crate::{ExpansionBudget, Heuristic, OpenList, SearchError, SearchNode, SearchResult};

/// Best node of a finished (or budget-limited) search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub best:         SearchNode,
    /// States from the root to `best.state`.
    pub path:         Vec<StateId>,
    pub reached_goal: bool,
}

impl SearchOutcome {
    /// Earliest arrival at the best node.
    pub fn arrival_time(&self) -> Time {
        self.best.g.earliest_arrival_time()
    }

    /// Edge to commit to when only the first move is executed.
    pub fn first_edge(&self) -> Option<EdgeId> {
        self.best.first_edge
    }
}

/// Search engine bound to one graph and goal.  Keeps its open list between
/// calls so learning passes can inspect the last episode.
pub struct AugmentedSipp<'g> {
    graph: &'g TimeDependentGraph,
    goal:  Location,
    open:  OpenList,
}

impl<'g> AugmentedSipp<'g> {
    pub fn new(graph: &'g TimeDependentGraph, goal: Location) -> Self {
        Self { graph, goal, open: OpenList::new(graph.state_count()) }
    }

    pub fn graph(&self) -> &'g TimeDependentGraph {
        self.graph
    }

    pub fn goal(&self) -> Location {
        self.goal
    }

    /// Frontier and closed set of the last search.
    pub fn open(&self) -> &OpenList {
        &self.open
    }

    /// Search from `start`, standing there at time `t`.
    pub fn search<H: Heuristic>(
        &mut self,
        start: StateId,
        t: Time,
        budget: ExpansionBudget,
        heuristic: &H,
        stats: &mut SearchStats,
    ) -> SearchResult<SearchOutcome> {
        self.open.clear();
        let g = EdgeAtf::available_from(t);
        let h = heuristic.estimate(start, self.graph.location(start), t);
        self.open.push(SearchNode { state: start, g, f: t + h, first_edge: None }, None);

        let start_expanded = stats.expanded;
        loop {
            let Some(&top) = self.open.top() else {
                warn!(%start, goal = %self.goal, "frontier exhausted");
                return Err(SearchError::NoPath { start, goal: self.goal });
            };
            let at_goal = self.graph.location(top.state) == self.goal;
            if at_goal || budget.is_exhausted(stats.expanded - start_expanded) {
                debug!(
                    expanded = stats.expanded - start_expanded,
                    frontier = self.open.frontier_len(),
                    reached_goal = at_goal,
                    arrival = top.g.earliest_arrival_time(),
                    "search stopped"
                );
                return Ok(SearchOutcome {
                    best:         top,
                    path:         self.open.path_to(top.state),
                    reached_goal: at_goal,
                });
            }
            if let Some(cur) = self.open.pop() {
                self.expand(&cur, heuristic, stats);
            }
        }
    }

    fn expand<H: Heuristic>(&mut self, cur: &SearchNode, heuristic: &H, stats: &mut SearchStats) {
        stats.expanded += 1;
        trace!(state = %cur.state, g = %cur.g, "expand");
        let graph = self.graph;
        let eat = cur.g.earliest_arrival_time();

        for &eid in graph.out_edge_ids(cur.state) {
            let edge = graph.edge(eid);
            if eat >= edge.atf.beta || cur.g.supremum_arrival_time() <= edge.atf.zeta {
                continue;
            }
            let g = compose(&edge.atf, &cur.g);
            if g.is_empty() || self.open.is_closed(edge.to) {
                continue;
            }
            let first_edge = cur.first_edge.or(Some(eid));
            let g_eat = g.earliest_arrival_time();
            let open_eat = if self.open.is_open(edge.to) {
                self.open.node(edge.to).map(|n| n.g.earliest_arrival_time())
            } else {
                None
            };

            match open_eat {
                Some(old) if g_eat < old => {
                    stats.decreased += 1;
                    let h = heuristic.estimate(edge.to, graph.location(edge.to), g_eat);
                    let node = SearchNode { state: edge.to, g, f: g_eat + h, first_edge };
                    self.open.decrease(node, Some(cur.state));
                }
                Some(_) => {}
                None => {
                    stats.generated += 1;
                    let h = heuristic.estimate(edge.to, graph.location(edge.to), g_eat);
                    let node = SearchNode { state: edge.to, g, f: g_eat + h, first_edge };
                    self.open.push(node, Some(cur.state));
                }
            }
        }
    }
}
