//! Compiled time-dependent graph files.
//!
//! # Format
//!
//! ```text
//! <ignored> <ignored> <state_count>
//! x y safe_lower safe_upper          (state_count lines)
//! source dest zeta alpha beta delta  (one per edge, until end of input)
//! ```
//!
//! All numbers are decimal text; times may be `inf`.  States are numbered
//! by their line order from 0.  The writer fills the two ignored header
//! fields with the grid extent.  The reader also accepts the same text
//! gzip-compressed, recognised by the gzip magic bytes.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;
use tracing::{debug, info};

use atsipp_atf::EdgeAtf;
use atsipp_core::{Interval, Location, StateId};

use crate::{GraphError, GraphResult, SafeState, TdEdge, TimeDependentGraph};

fn bad(line: usize, reason: impl Into<String>) -> GraphError {
    GraphError::GraphFormat { line, reason: reason.into() }
}

fn num<T: std::str::FromStr>(tok: Option<&str>, line: usize, name: &str) -> GraphResult<T>
where
    T::Err: std::fmt::Display,
{
    let tok = tok.ok_or_else(|| bad(line, format!("missing {name}")))?;
    tok.parse().map_err(|e| bad(line, format!("{name} {tok:?}: {e}")))
}

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read a compiled graph from any buffered source, plain or gzip-compressed.
pub fn read_compiled<R: BufRead>(mut reader: R) -> GraphResult<TimeDependentGraph> {
    if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
        debug!("compiled graph is gzip-compressed");
        return parse_compiled(BufReader::new(MultiGzDecoder::new(reader)));
    }
    parse_compiled(reader)
}

fn parse_compiled<R: BufRead>(reader: R) -> GraphResult<TimeDependentGraph> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

    // ── Header ────────────────────────────────────────────────────────────
    let (line_no, header) = lines.next().ok_or_else(|| bad(1, "empty file"))?;
    let header = header?;
    let mut tok = header.split_whitespace();
    tok.next();
    tok.next();
    let n: usize = num(tok.next(), line_no, "state count")?;

    // ── States ────────────────────────────────────────────────────────────
    let mut states = Vec::with_capacity(n);
    while states.len() < n {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| bad(0, format!("expected {n} states, found {}", states.len())))?;
        let line = line?;
        let mut tok = line.split_whitespace();
        if tok.clone().next().is_none() {
            continue;
        }
        let x = num(tok.next(), line_no, "x")?;
        let y = num(tok.next(), line_no, "y")?;
        let lower = num(tok.next(), line_no, "safe_lower")?;
        let upper = num(tok.next(), line_no, "safe_upper")?;
        let interval = Interval::try_new(lower, upper).map_err(|e| bad(line_no, e.to_string()))?;
        states.push(SafeState { location: Location::new(x, y), interval });
    }

    // ── Edges ─────────────────────────────────────────────────────────────
    let mut edges = Vec::new();
    for (line_no, line) in lines {
        let line = line?;
        let mut tok = line.split_whitespace();
        if tok.clone().next().is_none() {
            continue;
        }
        let from: u32 = num(tok.next(), line_no, "source")?;
        let to: u32 = num(tok.next(), line_no, "dest")?;
        if from as usize >= n || to as usize >= n {
            return Err(bad(line_no, format!("edge {from} -> {to} references a missing state")));
        }
        let atf = EdgeAtf::new(
            num(tok.next(), line_no, "zeta")?,
            num(tok.next(), line_no, "alpha")?,
            num(tok.next(), line_no, "beta")?,
            num(tok.next(), line_no, "delta")?,
        );
        edges.push(TdEdge { from: StateId(from), to: StateId(to), atf });
    }

    info!(states = states.len(), edges = edges.len(), "compiled graph read");
    TimeDependentGraph::from_parts(states, edges)
}

/// Open and read a compiled graph file.
pub fn load_compiled(path: &Path) -> GraphResult<TimeDependentGraph> {
    let file = std::fs::File::open(path)?;
    read_compiled(BufReader::new(file))
}

/// Write `g` in the compiled format.
pub fn write_compiled<W: Write>(g: &TimeDependentGraph, mut out: W) -> GraphResult<()> {
    let width = g.states().iter().map(|s| s.location.x as u32 + 1).max().unwrap_or(0);
    let height = g.states().iter().map(|s| s.location.y as u32 + 1).max().unwrap_or(0);
    writeln!(out, "{width} {height} {}", g.state_count())?;
    for s in g.states() {
        writeln!(
            out,
            "{} {} {} {}",
            s.location.x,
            s.location.y,
            s.interval.lower(),
            s.interval.upper()
        )?;
    }
    for e in g.edges() {
        let a = &e.atf;
        writeln!(out, "{} {} {} {} {} {}", e.from.0, e.to.0, a.zeta, a.alpha, a.beta, a.delta)?;
    }
    out.flush()?;
    Ok(())
}
