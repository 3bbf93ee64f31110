//! `PlanOutputObserver<W>`: bridges `PlanObserver` to an `OutputWriter`.

use atsipp_core::Time;
use atsipp_graph::TimeDependentGraph;
use atsipp_planner::{IterationRecord, PlanObserver, PlanOutcome};
use atsipp_search::HeuristicTable;

use crate::writer::OutputWriter;
use crate::{IterationRow, OutputError, OutputResult, path_rows};

/// A [`PlanObserver`] that writes iteration rows as the planner runs and the
/// path once it finishes.
///
/// Errors from the writer are stored because observer hooks return nothing.
/// After planning, check with [`take_error`][Self::take_error].
pub struct PlanOutputObserver<'g, W: OutputWriter> {
    writer:     W,
    graph:      &'g TimeDependentGraph,
    start_time: Time,
    last_error: Option<OutputError>,
}

impl<'g, W: OutputWriter> PlanOutputObserver<'g, W> {
    /// `start_time` must be the time the planned path starts at.
    pub fn new(writer: W, graph: &'g TimeDependentGraph, start_time: Time) -> Self {
        Self { writer, graph, start_time, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PlanObserver for PlanOutputObserver<'_, W> {
    fn on_iteration(&mut self, record: &IterationRecord, _table: &HeuristicTable) {
        let result = self.writer.write_iteration(&IterationRow::from(record));
        self.store_err(result);
    }

    fn on_finish(&mut self, outcome: &PlanOutcome) {
        let rows = path_rows(self.graph, &outcome.path, self.start_time);
        let result = self.writer.write_path(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
