use atsipp_core::{StateId, Time};
use atsipp_graph::GraphError;
use atsipp_search::SearchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("planner configuration error: {0}")]
    Config(String),

    #[error("unknown search variant {0:?} (expected sipp, asipp, rtas, plrts, maxatfs or medatfs)")]
    UnknownVariant(String),

    #[error("search from {state} at t={time} produced no edge to follow")]
    NoMove { state: StateId, time: Time },

    #[error("goal not reached after {0} iterations")]
    IterationLimit(usize),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type PlanResult<T> = Result<T, PlanError>;
