//! Heuristic estimates of the remaining travel time to the goal.
//!
//! | Type               | Estimate                                            |
//! |--------------------|-----------------------------------------------------|
//! | `OctileHeuristic`  | octile distance to the goal                         |
//! | `HeuristicTable`   | learned static value per location, overridden by a |
//! |                    | learned time-dependent envelope per state           |
//!
//! The table is the only state shared between successive bounded searches of
//! a planning run.  Learning passes write to it; searches only read it.

use rustc_hash::FxHashMap;

use atsipp_atf::{CompoundAtf, EdgeAtf};
use atsipp_core::{Location, StateId, Time};

/// Lower bound on the time still needed to reach the goal.
pub trait Heuristic {
    /// Estimate for `state` (standing at `location`) when reached at `t`.
    fn estimate(&self, state: StateId, location: Location, t: Time) -> Time;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    #[inline]
    fn estimate(&self, state: StateId, location: Location, t: Time) -> Time {
        (**self).estimate(state, location, t)
    }
}

// ── OctileHeuristic ───────────────────────────────────────────────────────────

/// Straight-line (octile) distance, ignoring time.
#[derive(Copy, Clone, Debug)]
pub struct OctileHeuristic {
    pub goal: Location,
}

impl OctileHeuristic {
    pub fn new(goal: Location) -> Self {
        Self { goal }
    }
}

impl Heuristic for OctileHeuristic {
    #[inline]
    fn estimate(&self, _state: StateId, location: Location, _t: Time) -> Time {
        location.octile_distance(self.goal)
    }
}

// ── HeuristicTable ────────────────────────────────────────────────────────────

/// Learned heuristic values for one goal.
///
/// Locations without a static entry fall back to the octile distance.  A
/// state with a non-empty dynamic envelope is estimated as
/// `envelope(t) - t`, which is `∞` outside the envelope's domain.
#[derive(Clone, Debug)]
pub struct HeuristicTable {
    goal:      Location,
    h_static:  FxHashMap<Location, Time>,
    h_dynamic: FxHashMap<StateId, CompoundAtf>,
}

impl HeuristicTable {
    pub fn new(goal: Location) -> Self {
        Self { goal, h_static: FxHashMap::default(), h_dynamic: FxHashMap::default() }
    }

    #[inline]
    pub fn goal(&self) -> Location {
        self.goal
    }

    // ── Static part ───────────────────────────────────────────────────────

    /// Learned value for `loc`, or the octile distance if none was learned.
    #[inline]
    pub fn static_estimate(&self, loc: Location) -> Time {
        self.h_static
            .get(&loc)
            .copied()
            .unwrap_or_else(|| loc.octile_distance(self.goal))
    }

    /// Raise the static value of `loc` to `value` if that is larger.
    /// Never lowers an existing estimate.
    pub fn raise_static(&mut self, loc: Location, value: Time) {
        let current = self.static_estimate(loc);
        if value > current {
            self.h_static.insert(loc, value);
        }
    }

    /// Locations that carry a learned static value.
    pub fn learned_static(&self) -> impl Iterator<Item = (Location, Time)> + '_ {
        self.h_static.iter().map(|(&l, &v)| (l, v))
    }

    // ── Dynamic part ──────────────────────────────────────────────────────

    pub fn dynamic(&self, state: StateId) -> Option<&CompoundAtf> {
        self.h_dynamic.get(&state)
    }

    /// Drop whatever was learned for `state` and start from an empty envelope.
    pub fn reset_dynamic(&mut self, state: StateId) {
        self.h_dynamic.entry(state).or_default().clear();
    }

    /// Merge `atf` into the envelope of `state`.
    pub fn insert_dynamic(&mut self, state: StateId, atf: EdgeAtf) {
        self.h_dynamic.entry(state).or_default().insert(atf, ());
    }

    /// Earliest arrival of the envelope of `state`; `∞` if it has none.
    pub fn dynamic_earliest(&self, state: StateId) -> Time {
        self.h_dynamic
            .get(&state)
            .map_or(Time::INFINITY, CompoundAtf::earliest_arrival_time)
    }

    pub fn dynamic_len(&self) -> usize {
        self.h_dynamic.len()
    }

    /// Forget everything learned.
    pub fn clear(&mut self) {
        self.h_static.clear();
        self.h_dynamic.clear();
    }
}

impl Heuristic for HeuristicTable {
    #[inline]
    fn estimate(&self, state: StateId, location: Location, t: Time) -> Time {
        match self.h_dynamic.get(&state) {
            Some(env) if !env.is_empty() => env.arrival_time(t) - t,
            _ => self.static_estimate(location),
        }
    }
}
