//! Single-edge arrival-time function.

use std::cmp::Ordering;
use std::fmt;

use atsipp_core::{INFINITY, Time};

/// Arrival-time function `(zeta, alpha, beta, delta)`.
///
/// Departures are possible in `[zeta, beta)`.  Leaving before `alpha` means
/// waiting until `alpha`, so the arrival is the constant `alpha + delta`;
/// leaving at `t >= alpha` arrives at `t + delta`.
///
/// Equality is structural.  Functions are ranked by
/// [`earliest_arrival_time`](Self::earliest_arrival_time) through
/// [`earliest_cmp`](Self::earliest_cmp); there is no `PartialOrd`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeAtf {
    pub zeta:  Time,
    pub alpha: Time,
    pub beta:  Time,
    pub delta: Time,
}

impl EdgeAtf {
    #[inline]
    pub const fn new(zeta: Time, alpha: Time, beta: Time, delta: Time) -> Self {
        Self { zeta, alpha, beta, delta }
    }

    /// `(0, 0, ∞, h)`: leave any time from 0 on, arrive `h` later.
    ///
    /// Used to seed a heuristic envelope with a static estimate `h`.
    #[inline]
    pub const fn shift_identity(h: Time) -> Self {
        Self { zeta: 0.0, alpha: 0.0, beta: INFINITY, delta: h }
    }

    /// `(-∞, t, ∞, 0)`: already standing at the search root at time `t`.
    #[inline]
    pub const fn available_from(t: Time) -> Self {
        Self { zeta: -INFINITY, alpha: t, beta: INFINITY, delta: 0.0 }
    }

    /// Minimum of the function, reached by any departure in `[zeta, alpha]`.
    #[inline]
    pub fn earliest_arrival_time(&self) -> Time {
        self.alpha + self.delta
    }

    /// Least upper bound of arrival times.  The domain may extend to `beta`
    /// with waiting allowed anywhere, so no finite bound is claimed.
    #[inline]
    pub fn supremum_arrival_time(&self) -> Time {
        INFINITY
    }

    /// Arrival when departing at `t`; `∞` outside `[zeta, beta)`.
    #[inline]
    pub fn arrival_time(&self, t: Time) -> Time {
        if t < self.zeta || self.beta <= t {
            return INFINITY;
        }
        if t < self.alpha.min(self.beta) {
            return self.earliest_arrival_time();
        }
        t + self.delta
    }

    /// Same as [`arrival_time`](Self::arrival_time) but with the domain closed
    /// at `beta`, and `alpha` itself still counted as part of the flat piece.
    #[inline]
    pub fn inclusive_arrival_time(&self, t: Time) -> Time {
        if t < self.zeta || self.beta < t {
            return INFINITY;
        }
        if t <= self.alpha.min(self.beta) {
            return self.earliest_arrival_time();
        }
        t + self.delta
    }

    /// `true` when no departure time yields a finite arrival.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.beta <= self.alpha || self.beta <= self.zeta
    }

    /// The same function with `h` added to every arrival.
    #[inline]
    pub fn shifted(&self, h: Time) -> Self {
        Self { delta: self.delta + h, ..*self }
    }

    /// Order by earliest arrival time (total order over `f64`).
    #[inline]
    pub fn earliest_cmp(&self, other: &EdgeAtf) -> Ordering {
        self.earliest_arrival_time().total_cmp(&other.earliest_arrival_time())
    }
}

impl fmt::Display for EdgeAtf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{},{},{}>", self.zeta, self.alpha, self.beta, self.delta)
    }
}

/// `inner` followed by `outer`.
///
/// The result keeps `inner`'s departure domain start and may be empty; check
/// [`EdgeAtf::is_empty`] before using it.
#[inline]
pub fn compose(outer: &EdgeAtf, inner: &EdgeAtf) -> EdgeAtf {
    EdgeAtf {
        zeta:  inner.zeta,
        alpha: inner.alpha.max(outer.alpha - inner.delta),
        beta:  inner.beta.min(outer.beta - inner.delta),
        delta: inner.delta + outer.delta,
    }
}
