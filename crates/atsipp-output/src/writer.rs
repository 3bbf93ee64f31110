//! The `OutputWriter` trait implemented by report backends.

use crate::{IterationRow, OutputResult, PathRow};

/// Sink for plan reports.
///
/// Errors surface through [`PlanOutputObserver::take_error`] when the writer
/// is driven by the observer.
///
/// [`PlanOutputObserver::take_error`]: crate::PlanOutputObserver::take_error
pub trait OutputWriter {
    /// Write the visited states of a finished plan.
    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()>;

    /// Write one real-time iteration.
    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
