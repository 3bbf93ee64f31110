//! Unit and property tests for the ATF algebra and envelope.

#[cfg(test)]
mod edge {
    use atsipp_core::INFINITY;

    use crate::{EdgeAtf, compose};

    #[test]
    fn evaluation_boundaries() {
        let e = EdgeAtf::new(0.0, 2.0, 5.0, 1.0);
        assert_eq!(e.arrival_time(1.0), 3.0);
        assert_eq!(e.arrival_time(2.0), 3.0);
        assert_eq!(e.arrival_time(3.0), 4.0);
        assert_eq!(e.arrival_time(5.0), INFINITY);
        assert_eq!(e.inclusive_arrival_time(5.0), 6.0);
        assert_eq!(e.arrival_time(-0.5), INFINITY);
    }

    #[test]
    fn alpha_asymmetry() {
        // At `alpha` both evaluations agree on the flat value.
        let e = EdgeAtf::new(0.0, 2.0, 5.0, 1.0);
        assert_eq!(e.arrival_time(2.0), e.inclusive_arrival_time(2.0));
        assert_eq!(e.earliest_arrival_time(), 3.0);
        assert_eq!(e.supremum_arrival_time(), INFINITY);
    }

    #[test]
    fn composition_shrinks_domain() {
        let inner = EdgeAtf::new(0.0, 0.0, 10.0, 2.0);
        let outer = EdgeAtf::new(0.0, 3.0, 6.0, 1.0);
        let c = compose(&outer, &inner);
        assert_eq!(c, EdgeAtf::new(0.0, 1.0, 4.0, 3.0));

        let mut t = 1.0;
        while t < 4.0 {
            let seq = outer.arrival_time(inner.arrival_time(t));
            assert_eq!(c.arrival_time(t), seq, "t={t}");
            t += 0.25;
        }
    }

    #[test]
    fn composition_can_be_empty() {
        let inner = EdgeAtf::new(0.0, 5.0, 10.0, 2.0);
        let outer = EdgeAtf::new(0.0, 0.0, 6.0, 1.0);
        assert!(compose(&outer, &inner).is_empty());
        assert!(!inner.is_empty());
    }

    #[test]
    fn composition_is_associative() {
        let a = EdgeAtf::new(0.0, 1.0, 20.0, 1.0);
        let b = EdgeAtf::new(0.0, 3.0, 15.0, 2.0);
        let c = EdgeAtf::new(0.0, 8.0, 12.0, 0.5);
        let left = compose(&c, &compose(&b, &a));
        let right = compose(&compose(&c, &b), &a);
        assert_eq!(left, right);
    }

    #[test]
    fn ranking_is_by_earliest_arrival() {
        use std::cmp::Ordering;
        let a = EdgeAtf::new(0.0, 1.0, 5.0, 1.0);
        let b = EdgeAtf::new(-3.0, 0.5, 9.0, 1.0);
        assert_eq!(b.earliest_cmp(&a), Ordering::Less);
        assert_ne!(a, b);
    }

    #[test]
    fn shift_identity_and_shifted() {
        let s = EdgeAtf::shift_identity(4.0);
        assert_eq!(s.arrival_time(10.0), 14.0);
        assert_eq!(s.shifted(1.0).arrival_time(10.0), 15.0);
        assert_eq!(EdgeAtf::available_from(3.0).arrival_time(1.0), 3.0);
    }

    #[test]
    fn display() {
        assert_eq!(EdgeAtf::new(0.0, 2.0, INFINITY, 1.5).to_string(), "<0,2,inf,1.5>");
    }
}

#[cfg(test)]
mod piece {
    use crate::{EdgeAtf, Piece};

    #[test]
    fn piece_selection() {
        let e = EdgeAtf::new(0.0, 2.0, 5.0, 1.0);
        assert_eq!(Piece::of(&e, 0.0), Piece::Flat(3.0));
        assert_eq!(Piece::of(&e, 2.0), Piece::Rising(1.0));
    }

    #[test]
    fn crossing_of_flat_and_rising() {
        assert_eq!(Piece::Flat(5.0).crossing(Piece::Rising(1.0)), Some(4.0));
        assert_eq!(Piece::Rising(1.0).crossing(Piece::Flat(5.0)), Some(4.0));
        assert_eq!(Piece::Rising(1.0).crossing(Piece::Rising(2.0)), None);
        assert_eq!(Piece::Flat(1.0).crossing(Piece::Flat(1.0)), None);
    }
}

#[cfg(test)]
mod compound {
    use atsipp_core::{INFINITY, Interval};

    use crate::{CompoundAtf, EdgeAtf};

    #[test]
    fn empty_envelope() {
        let c: CompoundAtf = CompoundAtf::new();
        assert!(c.is_empty());
        assert_eq!(c.arrival_time(0.0), INFINITY);
        assert_eq!(c.earliest_arrival_time(), INFINITY);
        assert!(c.at(0.0).is_none());
        assert!(c.edges().is_empty());
    }

    #[test]
    fn single_insert_splits_at_alpha() {
        let mut c = CompoundAtf::new();
        let e = EdgeAtf::new(0.0, 2.0, 5.0, 1.0);
        c.insert(e, ());
        assert_eq!(c.len(), 2);
        assert_eq!(c.at(1.0).map(|(i, _)| i), Some(Interval::new(0.0, 2.0)));
        assert_eq!(c.at(3.0).map(|(i, _)| i), Some(Interval::new(2.0, 5.0)));
        assert_eq!(c.arrival_time(1.0), 3.0);
        assert_eq!(c.arrival_time(4.0), 5.0);
        assert_eq!(c.arrival_time(5.0), INFINITY);
        assert_eq!(c.edges(), vec![e]);
    }

    #[test]
    fn empty_function_is_ignored() {
        let mut c = CompoundAtf::new();
        c.insert(EdgeAtf::new(3.0, 4.0, 2.0, 1.0), ());
        assert!(c.is_empty());
    }

    #[test]
    fn dominated_newcomer_is_discarded() {
        let mut c = CompoundAtf::new();
        let good = EdgeAtf::new(0.0, 0.0, 10.0, 1.0);
        let bad = EdgeAtf::new(0.0, 0.0, 10.0, 2.0);
        c.insert(good, ());
        c.insert(bad, ());
        assert_eq!(c.edges(), vec![good]);
        assert_eq!(c.arrival_time(7.0), 8.0);
    }

    #[test]
    fn ties_keep_the_incumbent() {
        let mut c = CompoundAtf::new();
        c.insert(EdgeAtf::new(0.0, 0.0, 10.0, 1.0), 'a');
        c.insert(EdgeAtf::new(0.0, 0.0, 10.0, 1.0), 'b');
        assert_eq!(c.payload_at(5.0), Some(&'a'));
    }

    #[test]
    fn crossing_splits_segment() {
        // Waiting until 4 then +1 (flat 5 before t=4), against leaving now with +3.
        let mut c = CompoundAtf::new();
        let waiter = EdgeAtf::new(0.0, 4.0, 10.0, 1.0);
        let runner = EdgeAtf::new(0.0, 0.0, 10.0, 3.0);
        c.insert(waiter, 'w');
        c.insert(runner, 'r');
        // runner: t+3 < 5 for t < 2, waiter better afterwards.
        assert_eq!(c.payload_at(1.0), Some(&'r'));
        assert_eq!(c.payload_at(2.0), Some(&'w'));
        assert_eq!(c.payload_at(6.0), Some(&'w'));
        assert_eq!(c.arrival_time(1.0), 4.0);
        assert_eq!(c.arrival_time(3.0), 5.0);
        assert_eq!(c.earliest_arrival_time(), 3.0);
        assert_eq!(c.edges(), vec![runner, waiter]);
    }

    #[test]
    fn crossing_with_unbounded_departure() {
        // Search labels start at -inf; the later-inserted runner takes the left part.
        let mut c = CompoundAtf::new();
        c.insert(EdgeAtf::new(-INFINITY, 4.0, INFINITY, 1.0), 'w');
        c.insert(EdgeAtf::new(-INFINITY, 0.0, INFINITY, 3.0), 'r');
        assert_eq!(c.payload_at(-100.0), Some(&'r'));
        assert_eq!(c.payload_at(1.0), Some(&'r'));
        assert_eq!(c.payload_at(3.0), Some(&'w'));
        assert_eq!(c.arrival_time(-100.0), 3.0);
        assert_eq!(c.arrival_time(3.0), 5.0);
        assert_eq!(c.arrival_time(10.0), 11.0);
        assert_eq!(c.earliest_arrival_time(), 3.0);
    }

    #[test]
    fn disjoint_domains_leave_gap() {
        let mut c = CompoundAtf::new();
        c.insert(EdgeAtf::new(5.0, 5.0, 8.0, 1.0), ());
        c.insert(EdgeAtf::new(0.0, 0.0, 2.0, 1.0), ());
        assert_eq!(c.arrival_time(1.0), 2.0);
        assert_eq!(c.arrival_time(3.0), INFINITY);
        assert_eq!(c.arrival_time(6.0), 7.0);
        assert_eq!(c.earliest_arrival_time(), 1.0);
    }

    #[test]
    fn partial_overlap_keeps_outer_parts() {
        let mut c = CompoundAtf::new();
        c.insert(EdgeAtf::new(0.0, 0.0, 10.0, 2.0), 'a');
        c.insert(EdgeAtf::new(3.0, 3.0, 6.0, 1.0), 'b');
        assert_eq!(c.payload_at(1.0), Some(&'a'));
        assert_eq!(c.payload_at(4.0), Some(&'b'));
        assert_eq!(c.payload_at(8.0), Some(&'a'));
        assert_eq!(c.arrival_time(4.0), 5.0);
        assert_eq!(c.arrival_time(8.0), 10.0);
    }

    #[test]
    fn unbounded_domains() {
        let mut c = CompoundAtf::new();
        c.insert(EdgeAtf::available_from(2.0).shifted(3.0), ());
        c.insert(EdgeAtf::shift_identity(4.0), ());
        assert_eq!(c.arrival_time(-100.0), 5.0);
        assert_eq!(c.arrival_time(0.5), 4.5);
        assert_eq!(c.arrival_time(1.5), 5.0);
        assert_eq!(c.arrival_time(50.0), 53.0);
        assert_eq!(c.earliest_arrival_time(), 4.0);
    }

    #[test]
    fn clear_empties() {
        let mut c = CompoundAtf::new();
        c.insert(EdgeAtf::shift_identity(1.0), ());
        c.clear();
        assert!(c.is_empty());
    }
}

#[cfg(test)]
mod envelope_props {
    use proptest::prelude::*;

    use atsipp_core::INFINITY;

    use crate::{CompoundAtf, EdgeAtf};

    /// Quarter-unit times keep all sums and crossings exact in `f64`.
    fn quarter(n: i32) -> f64 {
        n as f64 / 4.0
    }

    fn arb_atf() -> impl Strategy<Value = EdgeAtf> {
        // A quarter of the functions depart from -inf, like search labels do.
        (0..40i32, 0..40i32, 0..60i32, 0..20i32, any::<bool>(), 0..4u8).prop_map(
            |(start, wait, len, delta, open, shape)| {
                let start = quarter(start);
                let zeta = if shape == 0 { -INFINITY } else { start };
                let alpha = start + quarter(wait);
                let beta = if open { INFINITY } else { start + quarter(len) };
                EdgeAtf::new(zeta, alpha, beta, quarter(delta))
            },
        )
    }

    fn oracle(edges: &[EdgeAtf], t: f64) -> f64 {
        edges.iter().map(|e| e.arrival_time(t)).fold(INFINITY, f64::min)
    }

    fn samples() -> impl Iterator<Item = f64> {
        (-4..120).map(|n| n as f64 / 4.0 + 0.125).chain((0..120).map(quarter))
    }

    proptest! {
        #[test]
        fn envelope_is_pointwise_minimum(edges in prop::collection::vec(arb_atf(), 1..8)) {
            let mut c = CompoundAtf::new();
            for e in &edges {
                c.insert(*e, ());
            }
            for t in samples() {
                prop_assert_eq!(c.arrival_time(t), oracle(&edges, t), "t={}", t);
            }
        }

        #[test]
        fn insertion_order_does_not_matter(edges in prop::collection::vec(arb_atf(), 1..8)) {
            let mut forward = CompoundAtf::new();
            let mut backward = CompoundAtf::new();
            for e in &edges {
                forward.insert(*e, ());
            }
            for e in edges.iter().rev() {
                backward.insert(*e, ());
            }
            for t in samples() {
                prop_assert_eq!(forward.arrival_time(t), backward.arrival_time(t), "t={}", t);
            }
            prop_assert_eq!(forward.earliest_arrival_time(), backward.earliest_arrival_time());
        }

        #[test]
        fn earliest_matches_sampled_minimum(edges in prop::collection::vec(arb_atf(), 1..8)) {
            let mut c = CompoundAtf::new();
            for e in &edges {
                c.insert(*e, ());
            }
            let best = edges
                .iter()
                .filter(|e| e.zeta < e.beta)
                .map(EdgeAtf::earliest_arrival_time)
                .fold(INFINITY, f64::min);
            prop_assert_eq!(c.earliest_arrival_time(), best);
        }
    }
}
