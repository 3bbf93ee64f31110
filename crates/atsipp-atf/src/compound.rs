//! Exact lower envelope of arrival-time functions.
//!
//! # Layout
//!
//! `CompoundAtf` stores a `Vec` of non-overlapping segments sorted by lower
//! bound.  Each segment owns a half-open departure interval and the single
//! function that is arrival-minimal on it among everything inserted so far.
//! Gaps between segments are departure times no inserted function covers.
//!
//! # Insertion
//!
//! A new function is split at `alpha` into its flat and rising pieces, and
//! each piece is merged separately:
//!
//! | Part of the piece          | Result                                       |
//! |----------------------------|----------------------------------------------|
//! | not covered by any segment | new segment holding only the newcomer        |
//! | overlapping a segment      | segment split at the overlap boundaries; the |
//! |                            | overlap is resolved between both functions   |
//!
//! Resolving an overlap compares the two functions at the segment's lower
//! bound (exclusive evaluation) and upper bound (inclusive evaluation).  If
//! one is no worse at both ends it wins the whole segment, the incumbent on
//! ties.  Otherwise one is flat and the other rising, and the segment is split
//! at their crossing point.

use std::fmt;

use atsipp_core::{INFINITY, Interval, Time};

use crate::{EdgeAtf, Piece};

// ── Segment ───────────────────────────────────────────────────────────────────

/// One departure interval of the envelope and its dominant function.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<P> {
    interval: Interval,
    atf:      EdgeAtf,
    payload:  P,
}

impl<P> Segment<P> {
    fn new(interval: Interval, atf: EdgeAtf, payload: P) -> Self {
        Self { interval, atf, payload }
    }

    #[inline]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    #[inline]
    pub fn atf(&self) -> &EdgeAtf {
        &self.atf
    }

    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }
}

impl<P: Clone> Segment<P> {
    fn restricted(&self, lower: Time, upper: Time) -> Self {
        Segment::new(Interval::new(lower, upper), self.atf, self.payload.clone())
    }
}

// ── Overlap ───────────────────────────────────────────────────────────────────

/// Two candidates competing for the same interval.
struct Overlap<P> {
    incumbent: (EdgeAtf, P),
    newcomer:  (EdgeAtf, P),
}

impl<P: Clone> Overlap<P> {
    /// Replace the two candidates on `interval` by one or two segments.
    fn resolve_into(self, interval: Interval, out: &mut Vec<Segment<P>>) {
        let (l, u) = (interval.lower(), interval.upper());
        let (inc, new) = (self.incumbent.0, self.newcomer.0);

        let inc_y0 = inc.arrival_time(l);
        let inc_y1 = inc.inclusive_arrival_time(u);
        let new_y0 = new.arrival_time(l);
        let new_y1 = new.inclusive_arrival_time(u);

        if inc_y0 <= new_y0 && inc_y1 <= new_y1 {
            out.push(Segment::new(interval, self.incumbent.0, self.incumbent.1));
            return;
        }
        if new_y0 <= inc_y0 && new_y1 <= inc_y1 {
            out.push(Segment::new(interval, self.newcomer.0, self.newcomer.1));
            return;
        }

        // Neither dominates: the left part goes to whichever is lower at `l`.
        let crossing = Piece::of(&inc, l).crossing(Piece::of(&new, l));
        let (left, right) = if inc_y0 < new_y0 {
            (self.incumbent, self.newcomer)
        } else {
            (self.newcomer, self.incumbent)
        };
        match crossing {
            Some(x) if l < x && x < u => {
                out.push(Segment::new(Interval::new(l, x), left.0, left.1));
                out.push(Segment::new(Interval::new(x, u), right.0, right.1));
            }
            _ => out.push(Segment::new(interval, left.0, left.1)),
        }
    }
}

// ── CompoundAtf ───────────────────────────────────────────────────────────────

/// Pointwise minimum of every [`EdgeAtf`] inserted so far.
///
/// Each inserted function carries a payload `P`, returned for the departure
/// times where that function is dominant.
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundAtf<P: Clone = ()> {
    segments: Vec<Segment<P>>,
}

impl<P: Clone> Default for CompoundAtf<P> {
    fn default() -> Self {
        Self { segments: Vec::new() }
    }
}

impl<P: Clone> CompoundAtf<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `atf` into the envelope.  Empty functions leave it unchanged.
    pub fn insert(&mut self, atf: EdgeAtf, payload: P) {
        if atf.beta <= atf.alpha {
            self.insert_piece(atf.zeta, atf.beta, atf, payload);
        } else {
            self.insert_piece(atf.zeta, atf.alpha, atf, payload.clone());
            self.insert_piece(atf.alpha.max(atf.zeta), atf.beta, atf, payload);
        }
    }

    fn insert_piece(&mut self, a: Time, b: Time, atf: EdgeAtf, payload: P) {
        if b <= a {
            return;
        }
        let old = std::mem::take(&mut self.segments);
        let mut out = Vec::with_capacity(old.len() + 3);
        // Start of the part of [a, b) not yet assigned to any segment.
        let mut cursor = a;

        for seg in old {
            let (l, u) = (seg.interval.lower(), seg.interval.upper());
            if u <= a {
                out.push(seg);
                continue;
            }
            if b <= l {
                if cursor < b {
                    out.push(Segment::new(Interval::new(cursor, b), atf, payload.clone()));
                    cursor = b;
                }
                out.push(seg);
                continue;
            }

            let (ol, ou) = (l.max(a), u.min(b));
            if l < a {
                out.push(seg.restricted(l, a));
            }
            if cursor < ol {
                out.push(Segment::new(Interval::new(cursor, ol), atf, payload.clone()));
            }
            let tail = (b < u).then(|| seg.restricted(b, u));
            Overlap {
                incumbent: (seg.atf, seg.payload),
                newcomer:  (atf, payload.clone()),
            }
            .resolve_into(Interval::new(ol, ou), &mut out);
            cursor = ou;
            if let Some(tail) = tail {
                out.push(tail);
            }
        }
        if cursor < b {
            out.push(Segment::new(Interval::new(cursor, b), atf, payload));
        }
        self.segments = out;
    }

    fn segment_index(&self, t: Time) -> Option<usize> {
        let i = self.segments.partition_point(|s| s.interval.upper() <= t);
        self.segments
            .get(i)
            .filter(|s| s.interval.contains(t))
            .map(|_| i)
    }

    /// The segment covering departure `t` and its dominant function.
    pub fn at(&self, t: Time) -> Option<(Interval, &EdgeAtf)> {
        self.segment_index(t).map(|i| {
            let s = &self.segments[i];
            (s.interval, &s.atf)
        })
    }

    /// Payload of the function dominant at `t`.
    pub fn payload_at(&self, t: Time) -> Option<&P> {
        self.segment_index(t).map(|i| &self.segments[i].payload)
    }

    /// Envelope value at departure `t`; `∞` where nothing is defined.
    pub fn arrival_time(&self, t: Time) -> Time {
        self.at(t).map_or(INFINITY, |(_, atf)| atf.arrival_time(t))
    }

    /// Global minimum of the envelope; `∞` when empty.
    pub fn earliest_arrival_time(&self) -> Time {
        self.segments
            .iter()
            .map(|s| s.atf.arrival_time(s.interval.lower()))
            .fold(INFINITY, Time::min)
    }

    /// Distinct dominant functions, in departure-time order.
    pub fn edges(&self) -> Vec<EdgeAtf> {
        let mut out: Vec<EdgeAtf> = Vec::new();
        for s in &self.segments {
            if !out.contains(&s.atf) {
                out.push(s.atf);
            }
        }
        out
    }

    pub fn segments(&self) -> &[Segment<P>] {
        &self.segments
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl<P: Clone> fmt::Display for CompoundAtf<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.segments {
            writeln!(f, "{} {}", s.interval, s.atf)?;
        }
        Ok(())
    }
}
