//! `atsipp-graph`: grid maps, safe-interval graphs, and their
//! time-dependent compilation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`grid`]        | `GridMap` (octile `.map` reader, blocked/free cells)      |
//! | [`scenario`]    | `Scenario` (`.scen` benchmark records)                    |
//! | [`adjacency`]   | `Adjacency` (CSR lists), `LocationIndex`                  |
//! | [`sipp_graph`]  | `SafeIntervalGraph` arena, `SafeIntervalGraphBuilder`     |
//! | [`random`]      | `RandomGraphConfig`, `generate` (random safe intervals)   |
//! | [`td_graph`]    | `TimeDependentGraph` (one `EdgeAtf` per edge)             |
//! | [`loader`]      | compiled time-dependent graph reader and writer           |
//! | [`error`]       | `GraphError`, `GraphResult<T>`                            |
//!
//! Both graph types are arenas: states and edges live in `Vec`s and refer to
//! each other by `StateId` / `EdgeId`.  A time-dependent graph compiled from a
//! safe-interval graph keeps the same ids for the same states and edges.

pub mod adjacency;
pub mod error;
pub mod grid;
pub mod loader;
pub mod random;
pub mod scenario;
pub mod sipp_graph;
pub mod td_graph;


pub use adjacency::{Adjacency, LocationIndex};
pub use error::{GraphError, GraphResult};
pub use grid::GridMap;
pub use loader::{load_compiled, read_compiled, write_compiled};
pub use random::{RandomGraphConfig, generate};
pub use scenario::Scenario;
pub use sipp_graph::{SafeEdge, SafeIntervalGraph, SafeIntervalGraphBuilder, SafeState};
pub use td_graph::{TdEdge, TimeDependentGraph, compile_edge};
