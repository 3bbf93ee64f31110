//! Search error type.

use thiserror::Error;

use atsipp_core::{Location, StateId};
use atsipp_graph::GraphError;

/// Errors produced by `atsipp-search`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The open list ran dry before the goal was reached.
    #[error("no path from {start} to {goal}")]
    NoPath { start: StateId, goal: Location },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type SearchResult<T> = Result<T, SearchError>;
