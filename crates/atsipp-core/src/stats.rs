//! Search and learning counters.

use std::fmt;
use std::time::Duration;

/// Counters populated by every search variant.
///
/// Reset with [`init`](Self::init) at the start of each top-level planning
/// call; the real-time variants accumulate across loop iterations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes inserted into the open list for the first time.
    pub generated: u64,
    /// Nodes popped from the open list and expanded.
    pub expanded: u64,
    /// Successful decrease-key operations.
    pub decreased: u64,
    /// Nodes popped by backward learning passes.
    pub learn_expanded: u64,
    /// Wall-clock milliseconds spent searching.
    pub search_time_ms: f64,
    /// Wall-clock milliseconds spent learning.
    pub learning_time_ms: f64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and timer.
    pub fn init(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn add_search_time(&mut self, elapsed: Duration) {
        self.search_time_ms += elapsed.as_secs_f64() * 1_000.0;
    }

    #[inline]
    pub fn add_learning_time(&mut self, elapsed: Duration) {
        self.learning_time_ms += elapsed.as_secs_f64() * 1_000.0;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Nodes generated: {} Nodes decreased: {} Nodes expanded: {} Learning Nodes expanded: {}",
            self.generated, self.decreased, self.expanded, self.learn_expanded,
        )?;
        write!(f, "Search: {} ms Learning: {} ms", self.search_time_ms, self.learning_time_ms)
    }
}
