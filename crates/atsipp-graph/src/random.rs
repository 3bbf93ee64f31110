//! Random safe-interval graph generation over a grid map.
//!
//! Each free cell gets a sequence of safe intervals covering `[0, until)`:
//! the cell starts safe with probability `1 - occupancy`, then alternates
//! safe spans drawn from `U(min_duration, max_duration)` with unsafe gaps
//! drawn from `U(0, 2 * occupancy * mean_safe)`.  With `occupancy = 0` the
//! cell is simply safe over `[0, until)`.  Start and goal cells are safe
//! forever.
//!
//! Intervals are drawn from a [`CellRng`] keyed by cell index, so a cell's
//! intervals depend only on the seed and the cell.

use tracing::{debug, warn};

use atsipp_core::{CellRng, Connectivity, INFINITY, Interval, Location, StateId, Time};

use crate::{GraphError, GraphResult, GridMap, SafeIntervalGraph, SafeIntervalGraphBuilder};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Parameters of the random safe-interval generator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomGraphConfig {
    /// Time horizon covered by generated intervals.
    pub until:        Time,
    /// Fraction of time a cell is expected to be unsafe, in `[0, 1]`.
    pub occupancy:    f64,
    pub min_duration: Time,
    pub max_duration: Time,
    pub seed:         u64,
    pub connectivity: Connectivity,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            until:        10.0,
            occupancy:    0.0,
            min_duration: 1.0,
            max_duration: 10.0,
            seed:         0,
            connectivity: Connectivity::FourWay,
        }
    }
}

fn non_negative(name: &str, v: f64) -> GraphResult<()> {
    if v >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidConfig(format!("{name} must be non-negative, got {v}")))
    }
}

impl RandomGraphConfig {
    pub fn validate(&self) -> GraphResult<()> {
        non_negative("until", self.until)?;
        non_negative("occupancy", self.occupancy)?;
        non_negative("min_duration", self.min_duration)?;
        non_negative("max_duration", self.max_duration)?;
        if self.occupancy > 1.0 {
            return Err(GraphError::InvalidConfig(format!("occupancy {} exceeds 1", self.occupancy)));
        }
        if self.max_duration < self.min_duration {
            return Err(GraphError::InvalidConfig(format!(
                "max_duration {} is below min_duration {}",
                self.max_duration, self.min_duration
            )));
        }
        if self.occupancy > 0.0 && self.max_duration <= 0.0 {
            return Err(GraphError::InvalidConfig("safe spans need a positive max_duration".into()));
        }
        Ok(())
    }

    /// Safe intervals of one free cell.
    pub fn safe_intervals(&self, rng: &mut CellRng) -> Vec<Interval> {
        if self.occupancy == 0.0 {
            return vec![Interval::new(0.0, self.until)];
        }
        let mean_safe = 0.5 * (self.min_duration + self.max_duration);
        let max_gap = 2.0 * self.occupancy * mean_safe;

        let mut out = Vec::new();
        let mut safe = rng.gen_bool(1.0 - self.occupancy);
        let mut t = 0.0;
        while t < self.until {
            if safe {
                let span = rng.uniform(self.min_duration, self.max_duration);
                if span > 0.0 {
                    out.push(Interval::new(t, t + span));
                }
                t += span;
            } else {
                t += rng.uniform(0.0, max_gap);
            }
            safe = !safe;
        }
        out
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Generate a safe-interval graph over the free cells of `map`.
///
/// An edge joins `u` to a neighbouring state `v` whenever `u`'s interval
/// shifted by the move duration overlaps `v`'s interval.  Edges are never
/// blocked themselves (`[0, ∞)`).
pub fn generate(
    map: &GridMap,
    config: &RandomGraphConfig,
    start: Location,
    goal: Location,
) -> GraphResult<SafeIntervalGraph> {
    config.validate()?;
    debug!(?config, %start, %goal, "generating random safe-interval graph");
    for (what, loc) in [("start", start), ("goal", goal)] {
        if map.is_blocked(loc) {
            warn!(%loc, "{what} cell is blocked and gets no safe state");
        }
    }

    // ── States ────────────────────────────────────────────────────────────
    let mut b = SafeIntervalGraphBuilder::new();
    let mut cell_states: Vec<Vec<StateId>> = vec![Vec::new(); map.size()];
    for loc in map.free_cells() {
        let cell = map.index(loc);
        let intervals = if loc == start || loc == goal {
            vec![Interval::new(0.0, INFINITY)]
        } else {
            config.safe_intervals(&mut CellRng::new(config.seed, cell))
        };
        for interval in intervals {
            cell_states[cell].push(b.add_state(loc, interval));
        }
    }

    // ── Edges ─────────────────────────────────────────────────────────────
    for (cell, states) in cell_states.iter().enumerate() {
        let here = map.location(cell);
        for &u in states {
            let ui = b.state(u).interval;
            for next in map.neighbours(here, config.connectivity) {
                let d = here.octile_distance(next);
                let reach = ui.shifted(d);
                for &v in &cell_states[map.index(next)] {
                    if reach.intersects(&b.state(v).interval) {
                        b.add_edge(u, v, d, Interval::ALWAYS);
                    }
                }
            }
        }
    }
    Ok(b.build())
}
