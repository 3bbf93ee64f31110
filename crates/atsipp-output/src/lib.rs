//! `atsipp-output`: plan reports.
//!
//! | Backend | Files created                   |
//! |---------|---------------------------------|
//! | CSV     | `path.csv`, `iterations.csv`    |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`PlanOutputObserver`], which implements `atsipp_planner::PlanObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use atsipp_output::{CsvWriter, PlanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./out"))?;
//! let mut obs = PlanOutputObserver::new(writer, &td, start_time);
//! plan(variant, &problem, budget, &mut stats, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlanOutputObserver;
pub use row::{IterationRow, PathRow, path_rows};
pub use writer::OutputWriter;
