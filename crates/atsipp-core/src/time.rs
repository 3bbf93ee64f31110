//! Continuous time model.
//!
//! Time is a plain `f64`.  Safe intervals are half-open `[lower, upper)` and
//! may be unbounded on either side (`±∞`).  Arithmetic is exact IEEE-754 with
//! no tolerance; callers compare with `<`/`<=` exactly as the interval
//! semantics require.

use std::fmt;

use crate::{CoreError, CoreResult};

/// A point in (simulated) time.
pub type Time = f64;

/// Positive infinity: "never" as an arrival time, "forever" as an upper bound.
pub const INFINITY: Time = f64::INFINITY;

// ── Interval ──────────────────────────────────────────────────────────────────

/// Half-open time interval `[lower, upper)`.
///
/// Invariant: `lower <= upper`.  Zero-length intervals are allowed and are
/// treated as empty.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    lower: Time,
    upper: Time,
}

impl Interval {
    /// `[0, ∞)`, the safe interval of an edge that is never blocked.
    pub const ALWAYS: Interval = Interval { lower: 0.0, upper: INFINITY };

    /// Construct `[lower, upper)`.
    ///
    /// # Panics
    /// Panics in debug mode if `lower > upper` or either bound is NaN.
    #[inline]
    pub fn new(lower: Time, upper: Time) -> Self {
        debug_assert!(lower <= upper, "interval [{lower}, {upper}) is inverted");
        Self { lower, upper }
    }

    /// Checked constructor for untrusted input (file loaders).
    pub fn try_new(lower: Time, upper: Time) -> CoreResult<Self> {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(CoreError::InvalidInterval { lower, upper })
        }
    }

    #[inline]
    pub fn lower(&self) -> Time {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> Time {
        self.upper
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.upper <= self.lower
    }

    /// `lower <= t < upper`.
    #[inline]
    pub fn contains(&self, t: Time) -> bool {
        self.lower <= t && t < self.upper
    }

    /// `true` if the two intervals share at least one instant.
    #[inline]
    pub fn intersects(&self, other: &Interval) -> bool {
        self.lower.max(other.lower) < self.upper.min(other.upper)
    }

    /// The interval translated by `d` (both bounds).
    #[inline]
    pub fn shifted(&self, d: Time) -> Interval {
        Interval { lower: self.lower + d, upper: self.upper + d }
    }

    #[inline]
    pub fn length(&self) -> Time {
        self.upper - self.lower
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}
