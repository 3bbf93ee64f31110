//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `path.csv`
//! - `iterations.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{IterationRow, OutputResult, PathRow};

/// Writes plan output to two CSV files.
pub struct CsvWriter {
    path:       Writer<File>,
    iterations: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut path = Writer::from_path(dir.join("path.csv"))?;
        path.write_record(["step", "x", "y", "safe_lower", "safe_upper", "time"])?;

        let mut iterations = Writer::from_path(dir.join("iterations.csv"))?;
        iterations.write_record([
            "iteration",
            "x",
            "y",
            "time",
            "expanded",
            "learn_expanded",
            "search_ms",
            "learning_ms",
        ])?;

        Ok(Self { path, iterations, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        for row in rows {
            self.path.write_record(&[
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.safe_lower.to_string(),
                row.safe_upper.to_string(),
                row.time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()> {
        self.iterations.write_record(&[
            row.iteration.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.time.to_string(),
            row.expanded.to_string(),
            row.learn_expanded.to_string(),
            format!("{:.3}", row.search_ms),
            format!("{:.3}", row.learning_ms),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.path.flush()?;
        self.iterations.flush()?;
        Ok(())
    }
}
