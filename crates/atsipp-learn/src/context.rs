//! Read-only view of one finished bounded search.

use atsipp_core::{Location, StateId};
use atsipp_graph::TimeDependentGraph;
use atsipp_search::OpenList;

/// Everything a learning pass may read about the last search episode.
///
/// The frontier is `open.frontier()`, the closed set `open.closed()`.
#[derive(Copy, Clone)]
pub struct LearnContext<'a> {
    pub graph: &'a TimeDependentGraph,
    pub open:  &'a OpenList,
    /// State the search started from.
    pub root:  StateId,
}

impl<'a> LearnContext<'a> {
    pub fn new(graph: &'a TimeDependentGraph, open: &'a OpenList, root: StateId) -> Self {
        Self { graph, open, root }
    }

    #[inline]
    pub fn root_location(&self) -> Location {
        self.graph.location(self.root)
    }
}
