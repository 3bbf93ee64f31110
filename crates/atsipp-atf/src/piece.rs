//! Linear pieces of an [`EdgeAtf`] restricted to one envelope segment.
//!
//! Inside a segment `[l, u)` every function stored in the envelope is either
//! waiting for `alpha` (flat) or departing immediately (slope one).  Two such
//! pieces cross at most once, and the crossing has a closed form.

use atsipp_core::Time;

use crate::EdgeAtf;

/// One linear piece of an arrival-time function.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Piece {
    /// Constant arrival `value`.
    Flat(Time),
    /// Arrival `t + offset`.
    Rising(Time),
}

impl Piece {
    /// The piece of `atf` in effect for departures just after `lower`.
    ///
    /// Valid for any segment whose lower bound lies in `[zeta, beta)` and
    /// which does not straddle `alpha`.
    #[inline]
    pub fn of(atf: &EdgeAtf, lower: Time) -> Piece {
        if lower < atf.alpha.min(atf.beta) {
            Piece::Flat(atf.earliest_arrival_time())
        } else {
            Piece::Rising(atf.delta)
        }
    }

    #[inline]
    pub fn value_at(self, t: Time) -> Time {
        match self {
            Piece::Flat(v) => v,
            Piece::Rising(d) => t + d,
        }
    }

    /// Departure time at which the two pieces give the same arrival.
    ///
    /// `None` for parallel pieces, which either coincide or never meet.
    pub fn crossing(self, other: Piece) -> Option<Time> {
        match (self, other) {
            (Piece::Flat(c), Piece::Rising(d)) | (Piece::Rising(d), Piece::Flat(c)) => {
                let t = c - d;
                t.is_finite().then_some(t)
            }
            _ => None,
        }
    }
}
