//! Unit tests for atsipp-output.

#[cfg(test)]
mod fixtures {
    use atsipp_core::Location;
    use atsipp_graph::{GridMap, RandomGraphConfig, TimeDependentGraph, generate};

    /// ```text
    /// S@G
    /// ...
    /// ```
    pub fn detour() -> TimeDependentGraph {
        let map = GridMap::from_rows(&[".@.", "..."]).unwrap();
        let cfg = RandomGraphConfig { until: 100.0, ..Default::default() };
        TimeDependentGraph::compile(&generate(&map, &cfg, Location::new(0, 0), Location::new(2, 0)).unwrap())
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{IterationRow, PathRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn path_row(step: u64) -> PathRow {
        PathRow { step, x: step as u16, y: 0, safe_lower: 0.0, safe_upper: f64::INFINITY, time: step as f64 * 1.5 }
    }

    fn iteration_row(iteration: u64) -> IterationRow {
        IterationRow {
            iteration,
            x: 1,
            y: 2,
            time: 3.5,
            expanded: 7,
            learn_expanded: 11,
            search_ms: 0.25,
            learning_ms: 1.0 / 3.0,
        }
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("path.csv").exists());
        assert!(dir.path().join("iterations.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, "path.csv");
        assert_eq!(headers, ["step", "x", "y", "safe_lower", "safe_upper", "time"]);
        assert!(rows.is_empty());

        let (headers, _) = read(&dir, "iterations.csv");
        assert_eq!(
            headers,
            ["iteration", "x", "y", "time", "expanded", "learn_expanded", "search_ms", "learning_ms"]
        );
    }

    #[test]
    fn path_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_path(&[path_row(0), path_row(1), path_row(2)]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, "path.csv");
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[2][0], "2"); // step
        assert_eq!(&rows[2][4], "inf"); // safe_upper
        assert_eq!(&rows[2][5], "3"); // time
        assert_eq!(&rows[1][5], "1.5");
    }

    #[test]
    fn iteration_timers_rounded() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_iteration(&iteration_row(4)).unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, "iterations.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][4], "7");
        assert_eq!(&rows[0][5], "11");
        assert_eq!(&rows[0][6], "0.250");
        assert_eq!(&rows[0][7], "0.333");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod rows {
    use atsipp_core::{INFINITY, Location};

    use super::fixtures::detour;
    use crate::path_rows;

    #[test]
    fn times_follow_edges() {
        let td = detour();
        let path: Vec<_> = [(0, 0), (0, 1), (1, 1)]
            .into_iter()
            .map(|(x, y)| td.find_earliest(Location::new(x, y), 0.0).unwrap())
            .collect();
        let rows = path_rows(&td, &path, 0.5);
        let times: Vec<f64> = rows.iter().map(|r| r.time).collect();
        assert_eq!(times, vec![0.5, 1.5, 2.5]);
        assert_eq!((rows[1].x, rows[1].y), (0, 1));
        assert_eq!(rows[0].safe_upper, INFINITY);
        assert_eq!(rows[1].safe_upper, 100.0);
        assert_eq!(rows[2].step, 2);
    }

    #[test]
    fn missing_edge_is_infinite() {
        let td = detour();
        let a = td.find_earliest(Location::new(0, 0), 0.0).unwrap();
        let b = td.find_earliest(Location::new(1, 1), 0.0).unwrap();
        let rows = path_rows(&td, &[a, b], 0.0);
        assert_eq!(rows[1].time, INFINITY);
    }
}

#[cfg(test)]
mod observer {
    use tempfile::TempDir;

    use atsipp_core::{Location, SearchStats};
    use atsipp_learn::FrontierPropagation;
    use atsipp_planner::{PlanObserver, PlanOutcome, PlannerBuilder, Problem, SearchVariant, plan};
    use atsipp_search::ExpansionBudget;

    use super::fixtures::detour;
    use crate::{CsvWriter, IterationRow, OutputError, OutputResult, OutputWriter, PathRow, PlanOutputObserver};

    const GOAL: Location = Location::new(2, 0);

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn real_time_run_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let td = detour();
        let start = td.find_earliest(Location::new(0, 0), 0.0).unwrap();
        let mut planner = PlannerBuilder::new(&td, GOAL, FrontierPropagation)
            .budget(ExpansionBudget::Expansions(2))
            .build()
            .unwrap();
        let mut obs = PlanOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &td, 0.0);
        let out = planner.run(start, 0.0, &mut SearchStats::new(), &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let path = records(&dir, "path.csv");
        assert_eq!(path.len(), out.path.len());
        let last = path.last().unwrap();
        assert_eq!(&last[1], "2");
        assert_eq!(&last[2], "0");
        assert_eq!(last[5].parse::<f64>().unwrap(), out.arrival_time);

        let iterations = records(&dir, "iterations.csv");
        assert_eq!(iterations.len(), out.iterations);
        assert_eq!(&iterations[0][0], "0");
    }

    #[test]
    fn offline_run_writes_path_only() {
        let dir = tempfile::tempdir().unwrap();
        let td = detour();
        let problem = Problem::new(&td, Location::new(0, 0), GOAL, 0.0).unwrap();
        let mut obs = PlanOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &td, 0.0);
        let out = plan(SearchVariant::Asipp, &problem, ExpansionBudget::Unbounded, &mut SearchStats::new(), &mut obs)
            .unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(out.arrival_time, 4.0);
        assert_eq!(records(&dir, "path.csv").len(), 5);
        assert!(records(&dir, "iterations.csv").is_empty());
    }

    /// Fails every write.
    struct Broken {
        calls: usize,
    }

    impl OutputWriter for Broken {
        fn write_path(&mut self, _rows: &[PathRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other("path")))
        }

        fn write_iteration(&mut self, _row: &IterationRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other("iteration")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.calls += 1;
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error() {
        let td = detour();
        let mut obs = PlanOutputObserver::new(Broken { calls: 0 }, &td, 0.0);
        let outcome = PlanOutcome { path: vec![], arrival_time: 0.0, iterations: 0 };
        obs.on_finish(&outcome);
        obs.on_finish(&outcome);
        let err = obs.take_error().unwrap();
        assert_eq!(err.to_string(), "I/O error: path");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 4);
    }
}
