//! Grid locations and distance metrics.
//!
//! Coordinates are `u16` cell indices (column `x`, row `y`), enough for any
//! benchmark map.  Distances are returned as [`Time`] because a unit grid step
//! takes one time unit.

use std::f64::consts::SQRT_2;
use std::fmt;

use crate::Time;

/// A cell of the 2-D grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: u16,
    pub y: u16,
}

impl Location {
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Eight-way (octile) distance: diagonal steps cost `√2`, straight steps
    /// cost `1`.  Admissible lower bound for 8-connected unit grids.
    pub fn octile_distance(self, other: Location) -> Time {
        let dx = (self.x as i32 - other.x as i32).unsigned_abs();
        let dy = (self.y as i32 - other.y as i32).unsigned_abs();
        let diag = dx.min(dy);
        let flat = dx + dy - 2 * diag;
        flat as Time + SQRT_2 * diag as Time
    }

    pub fn manhattan_distance(self, other: Location) -> Time {
        let dx = (self.x as i32 - other.x as i32).unsigned_abs();
        let dy = (self.y as i32 - other.y as i32).unsigned_abs();
        (dx + dy) as Time
    }

    /// The cell at offset `(dx, dy)`, or `None` if it would leave the `u16`
    /// coordinate range.  Map bounds are checked separately.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Location> {
        let x = u16::try_from(self.x as i32 + dx).ok()?;
        let y = u16::try_from(self.y as i32 + dy).ok()?;
        Some(Location { x, y })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
