//! Compressed adjacency lists and the per-location state index.
//!
//! # Data layout
//!
//! [`Adjacency`] stores, for every state `s`, the slice
//!
//! ```text
//! edges[ start[s] .. start[s+1] ]
//! ```
//!
//! of incident `EdgeId`s.  Both graph types keep one `Adjacency` for outgoing
//! and one for incoming edges, so successor and predecessor scans are
//! contiguous.

use rustc_hash::FxHashMap;

use atsipp_core::{EdgeId, Location, StateId, Time};

// ── Adjacency ─────────────────────────────────────────────────────────────────

/// CSR list of edge ids per state.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    start: Vec<u32>,
    edges: Vec<EdgeId>,
}

impl Adjacency {
    /// Build from `(state, edge)` incidence pairs.  Edges keep their input
    /// order within each state's slice.
    pub fn build(state_count: usize, pairs: impl Iterator<Item = (StateId, EdgeId)> + Clone) -> Self {
        let mut start = vec![0u32; state_count + 1];
        for (s, _) in pairs.clone() {
            start[s.index() + 1] += 1;
        }
        for i in 1..=state_count {
            start[i] += start[i - 1];
        }
        let mut fill = start.clone();
        let mut edges = vec![EdgeId::INVALID; start[state_count] as usize];
        for (s, e) in pairs {
            let slot = &mut fill[s.index()];
            edges[*slot as usize] = e;
            *slot += 1;
        }
        Self { start, edges }
    }

    /// Edge ids incident to `state`.
    #[inline]
    pub fn of(&self, state: StateId) -> &[EdgeId] {
        let lo = self.start[state.index()] as usize;
        let hi = self.start[state.index() + 1] as usize;
        &self.edges[lo..hi]
    }
}

// ── LocationIndex ─────────────────────────────────────────────────────────────

/// Map from a grid location to its states, sorted by interval lower bound.
#[derive(Clone, Debug, Default)]
pub struct LocationIndex {
    by_location: FxHashMap<Location, Vec<(Time, Time, StateId)>>,
}

impl LocationIndex {
    pub fn build(states: impl Iterator<Item = (Location, Time, Time)>) -> Self {
        let mut by_location: FxHashMap<Location, Vec<(Time, Time, StateId)>> = FxHashMap::default();
        for (i, (loc, lower, upper)) in states.enumerate() {
            by_location.entry(loc).or_default().push((lower, upper, StateId(i as u32)));
        }
        for list in by_location.values_mut() {
            list.sort_by(|a, b| a.0.total_cmp(&b.0));
        }
        Self { by_location }
    }

    /// The state at `location` whose safe interval contains `t`.
    pub fn find(&self, location: Location, t: Time) -> Option<StateId> {
        self.by_location
            .get(&location)?
            .iter()
            .find(|(lower, upper, _)| *lower <= t && t < *upper)
            .map(|&(_, _, id)| id)
    }

    /// All states at `location`, earliest interval first.
    pub fn states_at(&self, location: Location) -> impl Iterator<Item = StateId> + '_ {
        self.by_location
            .get(&location)
            .into_iter()
            .flat_map(|v| v.iter().map(|&(_, _, id)| id))
    }
}
