//! Benchmark scenario files.
//!
//! ```text
//! version 1
//! 0	maps/room.map	32	32	1	2	30	29	41.5
//! ```
//!
//! Each record: `bucket map width height start_x start_y goal_x goal_y
//! optimal_length`, whitespace separated.

use std::path::Path;

use atsipp_core::Location;

use crate::{GraphError, GraphResult};

/// One start/goal query.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub bucket:         u32,
    pub map:            String,
    pub width:          u16,
    pub height:         u16,
    pub start:          Location,
    pub goal:           Location,
    pub optimal_length: f64,
}

fn field<T: std::str::FromStr>(tok: Option<&str>, line: usize, name: &str) -> GraphResult<T>
where
    T::Err: std::fmt::Display,
{
    let tok = tok.ok_or_else(|| GraphError::ScenarioFormat { line, reason: format!("missing {name}") })?;
    tok.parse()
        .map_err(|e| GraphError::ScenarioFormat { line, reason: format!("{name} {tok:?}: {e}") })
}

impl Scenario {
    /// Parse every record of a scenario file.
    pub fn parse_all(text: &str) -> GraphResult<Vec<Scenario>> {
        let mut lines = text.lines().enumerate();
        match lines.next().map(|(_, l)| l.split_whitespace().next()) {
            Some(Some("version")) => {}
            _ => {
                return Err(GraphError::ScenarioFormat { line: 1, reason: "missing version header".into() });
            }
        }

        let mut out = Vec::new();
        for (i, line) in lines {
            let line_no = i + 1;
            let mut tok = line.split_whitespace();
            let Some(first) = tok.next() else { continue };
            let bucket = field(Some(first), line_no, "bucket")?;
            let map: String = field(tok.next(), line_no, "map")?;
            let width = field(tok.next(), line_no, "width")?;
            let height = field(tok.next(), line_no, "height")?;
            let sx = field(tok.next(), line_no, "start_x")?;
            let sy = field(tok.next(), line_no, "start_y")?;
            let gx = field(tok.next(), line_no, "goal_x")?;
            let gy = field(tok.next(), line_no, "goal_y")?;
            let optimal_length = field(tok.next(), line_no, "optimal_length")?;
            out.push(Scenario {
                bucket,
                map,
                width,
                height,
                start: Location::new(sx, sy),
                goal: Location::new(gx, gy),
                optimal_length,
            });
        }
        Ok(out)
    }

    pub fn load_all(path: &Path) -> GraphResult<Vec<Scenario>> {
        let text = std::fs::read_to_string(path)?;
        Self::parse_all(&text)
    }
}
