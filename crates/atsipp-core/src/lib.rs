//! `atsipp-core`: foundational types for arrival-time safe-interval planning.
//!
//! This crate is a dependency of every other `atsipp-*` crate.  It has no
//! `atsipp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                               |
//! |------------------|--------------------------------------------------------|
//! | [`ids`]          | `StateId`, `EdgeId`                                    |
//! | [`geo`]          | `Location`, octile and Manhattan distances             |
//! | [`time`]         | `Time`, `Interval` (half-open safe intervals)          |
//! | [`connectivity`] | `Connectivity` (4- or 8-way grid moves)                |
//! | [`stats`]        | `SearchStats` counters record                          |
//! | [`rng`]          | `CellRng` (per grid cell, seeded)                      |
//! | [`error`]        | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod connectivity;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod stats;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use connectivity::Connectivity;
pub use error::{CoreError, CoreResult};
pub use geo::Location;
pub use ids::{EdgeId, StateId};
pub use rng::CellRng;
pub use stats::SearchStats;
pub use time::{INFINITY, Interval, Time};
