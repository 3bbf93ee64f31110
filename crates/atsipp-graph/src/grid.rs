//! Static occupancy grid.
//!
//! # File format
//!
//! ```text
//! type octile
//! height 3
//! width 4
//! map
//! ..@.
//! .@..
//! ....
//! ```
//!
//! | Symbol      | Cell    |
//! |-------------|---------|
//! | `.` `G` `S` | free    |
//! | `@` `O` `T` `W` | blocked |
//!
//! Row newlines are optional: cells are read row-major until `height * width`
//! symbols have been seen.

use std::path::Path;

use atsipp_core::{Connectivity, Location};

use crate::{GraphError, GraphResult};

fn is_blocked_symbol(c: char) -> Option<bool> {
    match c {
        '.' | 'G' | 'S' => Some(false),
        '@' | 'O' | 'T' | 'W' => Some(true),
        _ => None,
    }
}

/// Rectangular grid of free and blocked cells.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMap {
    width:   u16,
    height:  u16,
    /// Row-major, indexed by `x + width * y`.
    blocked: Vec<bool>,
}

impl GridMap {
    /// A `width × height` grid with every cell free.
    pub fn open(width: u16, height: u16) -> Self {
        Self { width, height, blocked: vec![false; width as usize * height as usize] }
    }

    /// Build from one string of map symbols per row.
    pub fn from_rows(rows: &[&str]) -> GraphResult<Self> {
        let height = u16::try_from(rows.len())
            .map_err(|_| GraphError::MapFormat(format!("{} rows", rows.len())))?;
        let width_usize = rows.first().map_or(0, |r| r.chars().count());
        let width = u16::try_from(width_usize)
            .map_err(|_| GraphError::MapFormat(format!("{width_usize} columns")))?;
        let mut blocked = Vec::with_capacity(width_usize * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width_usize {
                return Err(GraphError::MapFormat(format!("row {y} has the wrong width")));
            }
            for (x, c) in row.chars().enumerate() {
                let b = is_blocked_symbol(c).ok_or(GraphError::UnknownMapSymbol { symbol: c, x, y })?;
                blocked.push(b);
            }
        }
        Ok(Self { width, height, blocked })
    }

    /// Parse the octile map text format.
    pub fn parse(text: &str) -> GraphResult<Self> {
        let mut lines = text.lines();

        // ── Header ────────────────────────────────────────────────────────
        let mut header: Vec<&str> = Vec::with_capacity(7);
        for line in lines.by_ref() {
            header.extend(line.split_whitespace());
            if header.last() == Some(&"map") {
                break;
            }
        }
        let (height, width) = match header.as_slice() {
            ["type", "octile", "height", h, "width", w, "map"] => (
                h.parse::<u16>().map_err(|e| GraphError::MapFormat(format!("height {h:?}: {e}")))?,
                w.parse::<u16>().map_err(|e| GraphError::MapFormat(format!("width {w:?}: {e}")))?,
            ),
            other => {
                return Err(GraphError::MapFormat(format!("unexpected header {other:?}")));
            }
        };

        // ── Cells ─────────────────────────────────────────────────────────
        let size = width as usize * height as usize;
        let mut blocked = Vec::with_capacity(size);
        'rows: for line in lines {
            for c in line.chars().filter(|c| *c != '\r') {
                if blocked.len() == size {
                    break 'rows;
                }
                let idx = blocked.len();
                let (x, y) = (idx % width.max(1) as usize, idx / width.max(1) as usize);
                let b = is_blocked_symbol(c).ok_or(GraphError::UnknownMapSymbol { symbol: c, x, y })?;
                blocked.push(b);
            }
        }
        if blocked.len() != size {
            return Err(GraphError::MapFormat(format!(
                "expected {size} cells, found {}",
                blocked.len()
            )));
        }
        Ok(Self { width, height, blocked })
    }

    /// Read and parse a map file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells, free or not.
    #[inline]
    pub fn size(&self) -> usize {
        self.blocked.len()
    }

    // ── Cells ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, loc: Location) -> bool {
        loc.x < self.width && loc.y < self.height
    }

    /// Row-major cell index.  `loc` must be in bounds.
    #[inline]
    pub fn index(&self, loc: Location) -> usize {
        debug_assert!(self.in_bounds(loc));
        loc.x as usize + self.width as usize * loc.y as usize
    }

    #[inline]
    pub fn location(&self, index: usize) -> Location {
        let w = self.width as usize;
        Location::new((index % w) as u16, (index / w) as u16)
    }

    /// `true` for blocked cells and for anything outside the map.
    #[inline]
    pub fn is_blocked(&self, loc: Location) -> bool {
        !self.in_bounds(loc) || self.blocked[self.index(loc)]
    }

    #[inline]
    pub fn is_free(&self, loc: Location) -> bool {
        !self.is_blocked(loc)
    }

    pub fn set_blocked(&mut self, loc: Location, blocked: bool) -> GraphResult<()> {
        if !self.in_bounds(loc) {
            return Err(GraphError::OutOfBounds(loc));
        }
        let i = self.index(loc);
        self.blocked[i] = blocked;
        Ok(())
    }

    /// Free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.size())
            .filter(|&i| !self.blocked[i])
            .map(|i| self.location(i))
    }

    /// Free cells reachable from `loc` in one step.
    ///
    /// A diagonal step needs both cells it cuts past to be free.
    pub fn neighbours(&self, loc: Location, connectivity: Connectivity) -> impl Iterator<Item = Location> + '_ {
        connectivity.offsets().iter().filter_map(move |&(dx, dy)| {
            let next = loc.offset(dx, dy)?;
            if self.is_blocked(next) {
                return None;
            }
            if dx != 0 && dy != 0 {
                let side_a = loc.offset(dx, 0)?;
                let side_b = loc.offset(0, dy)?;
                if self.is_blocked(side_a) || self.is_blocked(side_b) {
                    return None;
                }
            }
            Some(next)
        })
    }
}
