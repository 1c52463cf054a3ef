//! Unit tests for fly-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AirlineId, AirportId, AntId, FlightId};

    #[test]
    fn index_roundtrip() {
        let id = AirportId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AirportId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AirportId(0) < AirportId(1));
        assert!(FlightId(100) > FlightId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AirportId::INVALID.0, u32::MAX);
        assert_eq!(AirlineId::INVALID.0, u16::MAX);
        assert_eq!(FlightId::INVALID.0, u32::MAX);
        assert_eq!(AntId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(FlightId(7).to_string(), "FlightId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Stamp, TimeWindow};

    #[test]
    fn stamp_arithmetic() {
        let t = Stamp(10);
        assert_eq!(t + 5, Stamp(15));
        assert_eq!(t.offset(3), Stamp(13));
        assert_eq!(Stamp(15) - Stamp(10), 5i64);
        assert_eq!(Stamp(10).since(Stamp(15)), -5);
    }

    #[test]
    fn epoch_is_zero() {
        assert_eq!(Stamp::from_ymd_hm(1970, 1, 1, 0, 0), Stamp::ZERO);
    }

    #[test]
    fn civil_roundtrip_display() {
        let t = Stamp::from_ymd_hm(2015, 6, 14, 9, 30);
        assert_eq!(t.to_string(), "2015-06-14 09:30");

        // Leap day.
        let leap = Stamp::from_ymd_hm(2016, 2, 29, 23, 59);
        assert_eq!(leap.to_string(), "2016-02-29 23:59");
        assert_eq!(leap + 1, Stamp::from_ymd_hm(2016, 3, 1, 0, 0));
    }

    #[test]
    fn day_spans() {
        let a = Stamp::from_ymd_hm(2015, 1, 1, 0, 0);
        let b = Stamp::from_ymd_hm(2015, 1, 2, 0, 0);
        assert_eq!(b - a, 1_440);
    }

    #[test]
    fn window_contains_and_span() {
        let w = TimeWindow::new(Stamp(100), Stamp(200));
        assert!(w.contains(Stamp(100)));
        assert!(w.contains(Stamp(200)));
        assert!(!w.contains(Stamp(99)));
        assert!(!w.contains(Stamp(201)));
        assert_eq!(w.span_minutes(), 100);
    }

    #[test]
    fn window_fractions_are_equally_spaced() {
        let w = TimeWindow::new(Stamp(0), Stamp(1_000));
        assert_eq!(w.at_fraction(0, 4), Stamp(0));
        assert_eq!(w.at_fraction(1, 4), Stamp(250));
        assert_eq!(w.at_fraction(3, 4), Stamp(750));
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(41.97, -87.90);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }
}

#[cfg(test)]
mod rng {
    use crate::SearchRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SearchRng::new(7);
        let mut b = SearchRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.gen_range(0..1_000_000), b.gen_range(0..1_000_000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SearchRng::new(1);
        let mut b = SearchRng::new(2);
        let sa: Vec<u32> = (0..16).map(|_| a.gen_range(0..u32::MAX)).collect();
        let sb: Vec<u32> = (0..16).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SearchRng::new(3);
        let mut v: Vec<usize> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn pick_weighted_empty_is_none() {
        let mut rng = SearchRng::new(0);
        assert_eq!(rng.pick_weighted(&[]), None);
    }

    #[test]
    fn pick_weighted_single_dominant_weight() {
        let mut rng = SearchRng::new(11);
        // One weight carries all the mass — must always be picked.
        for _ in 0..50 {
            assert_eq!(rng.pick_weighted(&[0.0, 5.0, 0.0]), Some(1));
        }
    }

    #[test]
    fn pick_weighted_all_zero_is_uniform_pick() {
        let mut rng = SearchRng::new(13);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let i = rng.pick_weighted(&[0.0, 0.0, 0.0]).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform fallback should reach every index");
    }

    #[test]
    fn pick_weighted_respects_proportions() {
        let mut rng = SearchRng::new(17);
        let mut counts = [0usize; 2];
        for _ in 0..2_000 {
            counts[rng.pick_weighted(&[1.0, 9.0]).unwrap()] += 1;
        }
        // Index 1 holds 90 % of the mass; allow generous slack.
        assert!(counts[1] > counts[0] * 4, "counts: {counts:?}");
    }
}
