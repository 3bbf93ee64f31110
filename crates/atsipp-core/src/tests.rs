//! Unit tests for atsipp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, StateId};

    #[test]
    fn index_roundtrip() {
        let id = StateId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StateId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StateId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::default(), EdgeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(EdgeId(7).to_string(), "EdgeId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{INFINITY, Interval};

    #[test]
    fn half_open_containment() {
        let i = Interval::new(2.0, 5.0);
        assert!(i.contains(2.0));
        assert!(i.contains(4.999));
        assert!(!i.contains(5.0));
        assert!(!i.contains(1.0));
    }

    #[test]
    fn unbounded_upper() {
        let i = Interval::new(0.0, INFINITY);
        assert!(i.contains(1e300));
        assert_eq!(Interval::ALWAYS, i);
    }

    #[test]
    fn touching_intervals_do_not_intersect() {
        let a = Interval::new(0.0, 3.0);
        let b = Interval::new(3.0, 6.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Interval::new(2.5, 3.5)));
    }

    #[test]
    fn shifted_moves_both_bounds() {
        let i = Interval::new(1.0, 4.0).shifted(1.5);
        assert_eq!(i, Interval::new(2.5, 5.5));
    }

    #[test]
    fn try_new_rejects_inverted() {
        assert!(Interval::try_new(3.0, 1.0).is_err());
        assert!(Interval::try_new(1.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Interval::new(1.0, INFINITY).to_string(), "[1, inf)");
    }
}

#[cfg(test)]
mod geo {
    use std::f64::consts::SQRT_2;

    use crate::Location;

    #[test]
    fn octile_straight_and_diagonal() {
        let a = Location::new(0, 0);
        assert_eq!(a.octile_distance(Location::new(3, 0)), 3.0);
        assert_eq!(a.octile_distance(Location::new(2, 2)), 2.0 * SQRT_2);
        let d = a.octile_distance(Location::new(3, 1));
        assert!((d - (2.0 + SQRT_2)).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn octile_is_symmetric() {
        let a = Location::new(5, 1);
        let b = Location::new(0, 7);
        assert_eq!(a.octile_distance(b), b.octile_distance(a));
    }

    #[test]
    fn manhattan() {
        assert_eq!(Location::new(1, 1).manhattan_distance(Location::new(4, 0)), 4.0);
    }

    #[test]
    fn offset_rejects_negative() {
        assert_eq!(Location::new(0, 3).offset(-1, 0), None);
        assert_eq!(Location::new(0, 3).offset(1, -1), Some(Location::new(1, 2)));
    }
}

#[cfg(test)]
mod connectivity {
    use crate::Connectivity;

    #[test]
    fn neighbour_counts() {
        assert_eq!(Connectivity::FourWay.offsets().len(), 4);
        assert_eq!(Connectivity::EightWay.offsets().len(), 8);
        assert_eq!(Connectivity::default(), Connectivity::FourWay);
    }

    #[test]
    fn eight_way_excludes_self() {
        assert!(!Connectivity::EightWay.offsets().contains(&(0, 0)));
    }
}

#[cfg(test)]
mod stats {
    use std::time::Duration;

    use crate::SearchStats;

    #[test]
    fn init_zeroes_everything() {
        let mut s = SearchStats { generated: 3, expanded: 4, ..Default::default() };
        s.add_search_time(Duration::from_millis(2));
        s.init();
        assert_eq!(s, SearchStats::new());
    }

    #[test]
    fn timers_accumulate_in_ms() {
        let mut s = SearchStats::new();
        s.add_learning_time(Duration::from_millis(3));
        s.add_learning_time(Duration::from_millis(4));
        assert!((s.learning_time_ms - 7.0).abs() < 1e-9);
    }

    #[test]
    fn report_format() {
        let s = SearchStats { generated: 1, decreased: 2, expanded: 3, learn_expanded: 4, ..Default::default() };
        let text = s.to_string();
        assert!(text.starts_with(
            "Nodes generated: 1 Nodes decreased: 2 Nodes expanded: 3 Learning Nodes expanded: 4\n"
        ));
        assert!(text.ends_with("Search: 0 ms Learning: 0 ms"));
    }
}

#[cfg(test)]
mod rng {
    use crate::CellRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = CellRng::new(9, 17);
        let mut b = CellRng::new(9, 17);
        let xs: Vec<f64> = (0..8).map(|_| a.uniform(0.0, 1.0)).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.uniform(0.0, 1.0)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_cells_differ() {
        let mut a = CellRng::new(9, 17);
        let mut b = CellRng::new(9, 18);
        let x = a.uniform(0.0, 1.0);
        let y = b.uniform(0.0, 1.0);
        assert_ne!(x, y);
    }

    #[test]
    fn uniform_degenerate_range() {
        let mut r = CellRng::new(0, 0);
        assert_eq!(r.uniform(4.0, 4.0), 4.0);
        let v = r.uniform(1.0, 2.0);
        assert!((1.0..2.0).contains(&v));
    }
}
