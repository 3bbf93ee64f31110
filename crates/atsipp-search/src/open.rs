//! Open and closed lists shared by the search engines.
//!
//! The open list is an [`IndexedMinHeap`] of [`OpenKey`]s keyed by state,
//! plus a record per generated state holding its best node and parent.
//! Records survive popping, so a closed state can still be walked back to
//! the root.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use atsipp_atf::EdgeAtf;
use atsipp_core::{EdgeId, StateId, Time};

use crate::index_heap::{IndexedMinHeap, Indexing};

// ── OpenKey ───────────────────────────────────────────────────────────────────

/// Heap key: lowest `f` first, ties to the larger `g` (deeper node).
#[derive(Copy, Clone, Debug)]
pub struct OpenKey {
    pub f:     Time,
    pub g:     Time,
    pub state: StateId,
}

impl Ord for OpenKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| self.state.cmp(&other.state))
    }
}

impl PartialOrd for OpenKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenKey {}

impl Indexing for OpenKey {
    #[inline]
    fn as_index(&self) -> usize {
        self.state.index()
    }
}

// ── SearchNode ────────────────────────────────────────────────────────────────

/// Best known way to reach `state` from the search root.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchNode {
    pub state:      StateId,
    /// Arrival time at `state` as a function of departure from the root.
    pub g:          EdgeAtf,
    pub f:          Time,
    /// Edge leaving the root on the way to this node; `None` at the root.
    pub first_edge: Option<EdgeId>,
}

impl SearchNode {
    #[inline]
    pub fn key(&self) -> OpenKey {
        OpenKey { f: self.f, g: self.g.earliest_arrival_time(), state: self.state }
    }
}

#[derive(Copy, Clone, Debug)]
struct Record {
    node:   SearchNode,
    parent: Option<StateId>,
}

// ── OpenList ──────────────────────────────────────────────────────────────────

/// Frontier and closed set of one search episode.
///
/// Reuse across episodes with [`clear`](Self::clear); the heap's position
/// table is sized once for the whole graph.
#[derive(Clone, Debug)]
pub struct OpenList {
    heap:    IndexedMinHeap<OpenKey>,
    records: FxHashMap<StateId, Record>,
    /// Earliest arrival of each state when it was popped.
    closed:  FxHashMap<StateId, Time>,
}

impl OpenList {
    pub fn new(state_count: usize) -> Self {
        Self {
            heap:    IndexedMinHeap::new(state_count),
            records: FxHashMap::default(),
            closed:  FxHashMap::default(),
        }
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.records.clear();
        self.closed.clear();
    }

    // ── Frontier ──────────────────────────────────────────────────────────

    pub fn push(&mut self, node: SearchNode, parent: Option<StateId>) {
        self.heap.push(node.key());
        self.records.insert(node.state, Record { node, parent });
    }

    /// Replace the open node of `node.state` with a better one.
    pub fn decrease(&mut self, node: SearchNode, parent: Option<StateId>) {
        self.heap.update_key(node.key());
        self.records.insert(node.state, Record { node, parent });
    }

    /// Node with the lowest key, without removing it.
    pub fn top(&self) -> Option<&SearchNode> {
        self.heap.peek().map(|k| &self.records[&k.state].node)
    }

    /// Remove the top node and mark its state closed.
    pub fn pop(&mut self) -> Option<SearchNode> {
        let key = self.heap.pop()?;
        let node = self.records.get(&key.state)?.node;
        self.closed.insert(node.state, node.g.earliest_arrival_time());
        Some(node)
    }

    #[inline]
    pub fn is_open(&self, s: StateId) -> bool {
        self.heap.contains_index(s.index())
    }

    #[inline]
    pub fn is_closed(&self, s: StateId) -> bool {
        self.closed.contains_key(&s)
    }

    /// Best node generated for `s`, open or closed.
    pub fn node(&self, s: StateId) -> Option<&SearchNode> {
        self.records.get(&s).map(|r| &r.node)
    }

    /// Open nodes, in no particular order.
    pub fn frontier(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.heap.elements().iter().map(|k| &self.records[&k.state].node)
    }

    pub fn frontier_len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    // ── Closed ────────────────────────────────────────────────────────────

    /// Closed states with their earliest arrival at pop time.
    pub fn closed(&self) -> impl Iterator<Item = (StateId, Time)> + '_ {
        self.closed.iter().map(|(&s, &t)| (s, t))
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// States from the root to `s` by parent pointers.
    pub fn path_to(&self, s: StateId) -> Vec<StateId> {
        let mut path = Vec::new();
        let mut cur = Some(s);
        while let Some(state) = cur {
            path.push(state);
            cur = self.records.get(&state).and_then(|r| r.parent);
        }
        path.reverse();
        path
    }
}
