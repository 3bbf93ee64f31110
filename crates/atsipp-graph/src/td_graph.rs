//! Time-dependent view of a safe-interval graph.
//!
//! Every static edge `(u, v, duration, edge interval)` becomes one
//! [`EdgeAtf`]:
//!
//! | Field   | Value                                                          |
//! |---------|----------------------------------------------------------------|
//! | `zeta`  | `u.lower`                                                      |
//! | `alpha` | `max(edge.lower, u.lower, v.lower - duration)`                 |
//! | `beta`  | `min(edge.upper, u.upper, v.upper - duration)`                 |
//! | `delta` | `duration`                                                     |
//!
//! Compiled edges may be empty (`beta <= alpha`); the search filters them
//! with [`EdgeAtf::is_empty`] at expansion time rather than dropping them
//! here, so edge ids match the source graph one to one.

use tracing::info;

use atsipp_atf::EdgeAtf;
use atsipp_core::{EdgeId, Location, StateId, Time};

use crate::{Adjacency, GraphError, GraphResult, LocationIndex, SafeEdge, SafeIntervalGraph, SafeState};

/// Directed edge carrying an arrival-time function.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TdEdge {
    pub from: StateId,
    pub to:   StateId,
    pub atf:  EdgeAtf,
}

/// Derive the arrival-time function of one static edge.
pub fn compile_edge(u: &SafeState, v: &SafeState, edge: &SafeEdge) -> EdgeAtf {
    let d = edge.duration;
    EdgeAtf {
        zeta:  u.interval.lower(),
        alpha: edge.interval.lower().max(u.interval.lower()).max(v.interval.lower() - d),
        beta:  edge.interval.upper().min(u.interval.upper()).min(v.interval.upper() - d),
        delta: d,
    }
}

/// Arena of safe states and ATF edges.  Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct TimeDependentGraph {
    states:   Vec<SafeState>,
    edges:    Vec<TdEdge>,
    outgoing: Adjacency,
    incoming: Adjacency,
    index:    LocationIndex,
}

impl TimeDependentGraph {
    /// Compile every edge of `g`.  State and edge ids are preserved.
    pub fn compile(g: &SafeIntervalGraph) -> Self {
        let edges: Vec<TdEdge> = g
            .edges()
            .iter()
            .map(|e| TdEdge {
                from: e.from,
                to:   e.to,
                atf:  compile_edge(g.state(e.from), g.state(e.to), e),
            })
            .collect();
        let empty = edges.iter().filter(|e| e.atf.is_empty()).count();
        info!(states = g.state_count(), edges = edges.len(), empty, "time-dependent graph compiled");
        Self::assemble(g.states().to_vec(), edges)
    }

    /// Build from already compiled parts, e.g. read from a file.
    pub fn from_parts(states: Vec<SafeState>, edges: Vec<TdEdge>) -> GraphResult<Self> {
        let n = states.len();
        if let Some(bad) = edges.iter().find(|e| e.from.index() >= n || e.to.index() >= n) {
            return Err(GraphError::GraphFormat {
                line:   0,
                reason: format!("edge {} -> {} references a missing state", bad.from.0, bad.to.0),
            });
        }
        Ok(Self::assemble(states, edges))
    }

    fn assemble(states: Vec<SafeState>, edges: Vec<TdEdge>) -> Self {
        let n = states.len();
        let outgoing = Adjacency::build(
            n,
            edges.iter().enumerate().map(|(i, e)| (e.from, EdgeId(i as u32))),
        );
        let incoming = Adjacency::build(
            n,
            edges.iter().enumerate().map(|(i, e)| (e.to, EdgeId(i as u32))),
        );
        let index = LocationIndex::build(
            states.iter().map(|s| (s.location, s.interval.lower(), s.interval.upper())),
        );
        Self { states, edges, outgoing, incoming, index }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ── Access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self, id: StateId) -> &SafeState {
        &self.states[id.index()]
    }

    #[inline]
    pub fn location(&self, id: StateId) -> Location {
        self.states[id.index()].location
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &TdEdge {
        &self.edges[id.index()]
    }

    pub fn states(&self) -> &[SafeState] {
        &self.states
    }

    pub fn edges(&self) -> &[TdEdge] {
        &self.edges
    }

    /// Outgoing edges of `s`.
    #[inline]
    pub fn successors(&self, s: StateId) -> impl Iterator<Item = &TdEdge> + '_ {
        self.outgoing.of(s).iter().map(|&e| &self.edges[e.index()])
    }

    /// Incoming edges of `s`.
    #[inline]
    pub fn predecessors(&self, s: StateId) -> impl Iterator<Item = &TdEdge> + '_ {
        self.incoming.of(s).iter().map(|&e| &self.edges[e.index()])
    }

    #[inline]
    pub fn out_edge_ids(&self, s: StateId) -> &[EdgeId] {
        self.outgoing.of(s)
    }

    /// The state at `location` whose safe interval contains `t`.
    pub fn find_earliest(&self, location: Location, t: Time) -> GraphResult<StateId> {
        self.index
            .find(location, t)
            .ok_or(GraphError::NoSafeStart { location, time: t })
    }

    pub fn states_at(&self, location: Location) -> impl Iterator<Item = StateId> + '_ {
        self.index.states_at(location)
    }
}
