//! Graph-subsystem error type.

use thiserror::Error;

use atsipp_core::{CoreError, Location, Time};

/// Errors produced by `atsipp-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("map format error: {0}")]
    MapFormat(String),

    #[error("unknown map symbol '{symbol}' at ({x}, {y})")]
    UnknownMapSymbol { symbol: char, x: usize, y: usize },

    #[error("scenario format error on line {line}: {reason}")]
    ScenarioFormat { line: usize, reason: String },

    #[error("graph file format error on line {line}: {reason}")]
    GraphFormat { line: usize, reason: String },

    #[error("no safe state at {location} covering t={time}")]
    NoSafeStart { location: Location, time: Time },

    #[error("location {0} is outside the map")]
    OutOfBounds(Location),

    #[error("invalid random graph configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
