//! Static safe-interval graph.
//!
//! # Data layout
//!
//! States are `(location, safe interval)` pairs stored in one `Vec` and
//! addressed by `StateId`.  Edges are stored sorted by source state and
//! addressed by `EdgeId`; outgoing and incoming lists are [`Adjacency`]
//! tables over those ids.  Nothing points into the arena, so it can be moved
//! or shared freely once built.

use std::fmt;

use tracing::info;

use atsipp_core::{EdgeId, Interval, Location, StateId, Time};

use crate::{Adjacency, GraphError, GraphResult, LocationIndex};

// ── Elements ──────────────────────────────────────────────────────────────────

/// A location together with one of its safe intervals.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafeState {
    pub location: Location,
    pub interval: Interval,
}

impl fmt::Display for SafeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.location, self.interval)
    }
}

/// Directed move between two safe states.
///
/// `interval` bounds the departure time from the edge's own point of view
/// (`[0, ∞)` when the edge itself is never blocked).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafeEdge {
    pub from:     StateId,
    pub to:       StateId,
    pub duration: Time,
    pub interval: Interval,
}

// ── SafeIntervalGraph ─────────────────────────────────────────────────────────

/// Arena of safe states and edges with successor and predecessor lists.
///
/// Construct with [`SafeIntervalGraphBuilder`] or
/// [`generate`](crate::random::generate).
#[derive(Clone, Debug, Default)]
pub struct SafeIntervalGraph {
    states:   Vec<SafeState>,
    edges:    Vec<SafeEdge>,
    outgoing: Adjacency,
    incoming: Adjacency,
    index:    LocationIndex,
}

impl SafeIntervalGraph {
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &SafeState {
        &self.states[id.index()]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &SafeEdge {
        &self.edges[id.index()]
    }

    pub fn states(&self) -> &[SafeState] {
        &self.states
    }

    pub fn edges(&self) -> &[SafeEdge] {
        &self.edges
    }

    #[inline]
    pub fn out_edges(&self, s: StateId) -> &[EdgeId] {
        self.outgoing.of(s)
    }

    #[inline]
    pub fn in_edges(&self, s: StateId) -> &[EdgeId] {
        self.incoming.of(s)
    }

    /// The state at `location` whose safe interval contains `t`.
    pub fn find_earliest(&self, location: Location, t: Time) -> GraphResult<StateId> {
        self.index
            .find(location, t)
            .ok_or(GraphError::NoSafeStart { location, time: t })
    }

    /// All states of `location`, earliest interval first.
    pub fn states_at(&self, location: Location) -> impl Iterator<Item = StateId> + '_ {
        self.index.states_at(location)
    }
}

// ── SafeIntervalGraphBuilder ──────────────────────────────────────────────────

/// Collect states and edges in any order, then call [`build`](Self::build).
#[derive(Default)]
pub struct SafeIntervalGraphBuilder {
    states: Vec<SafeState>,
    edges:  Vec<SafeEdge>,
}

impl SafeIntervalGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(states: usize, edges: usize) -> Self {
        Self { states: Vec::with_capacity(states), edges: Vec::with_capacity(edges) }
    }

    /// Add a state and return its id (sequential from 0).
    pub fn add_state(&mut self, location: Location, interval: Interval) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(SafeState { location, interval });
        id
    }

    /// Add a directed edge from `from` to `to`.
    pub fn add_edge(&mut self, from: StateId, to: StateId, duration: Time, interval: Interval) {
        self.edges.push(SafeEdge { from, to, duration, interval });
    }

    pub fn state(&self, id: StateId) -> &SafeState {
        &self.states[id.index()]
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Sort edges by source and build the adjacency tables.
    pub fn build(self) -> SafeIntervalGraph {
        let mut edges = self.edges;
        edges.sort_by_key(|e| e.from);

        let n = self.states.len();
        let outgoing = Adjacency::build(
            n,
            edges.iter().enumerate().map(|(i, e)| (e.from, EdgeId(i as u32))),
        );
        let incoming = Adjacency::build(
            n,
            edges.iter().enumerate().map(|(i, e)| (e.to, EdgeId(i as u32))),
        );
        let index = LocationIndex::build(
            self.states.iter().map(|s| (s.location, s.interval.lower(), s.interval.upper())),
        );
        info!(states = n, edges = edges.len(), "safe-interval graph built");

        SafeIntervalGraph { states: self.states, edges, outgoing, incoming, index }
    }
}
