//! Unit tests for fly-ants.
//!
//! Engine tests run real colonies over hand-crafted miniature networks with
//! fixed seeds, so every assertion is reproducible.

#[cfg(test)]
mod helpers {
    use fly_core::{AirportId, FlightId, GeoPoint, Stamp, TimeWindow};
    use fly_network::{Airline, Airport, FlightNetwork, FlightNetworkBuilder};

    use crate::AntColonyConfig;

    pub fn stamp(h: u32, m: u32) -> Stamp {
        Stamp::from_ymd_hm(2015, 6, 1, h, m)
    }

    /// The whole schedule day.
    pub fn day_window() -> TimeWindow {
        TimeWindow::new(stamp(0, 0), stamp(23, 59))
    }

    /// A network whose only A→C itinerary is the two-leg route:
    ///
    ///   A→B  09:00–10:00  $100
    ///   B→C  10:30–11:30  $80
    ///
    /// plus an isolated airport D.
    pub fn two_leg_network() -> (FlightNetwork, [AirportId; 4]) {
        let mut b = FlightNetworkBuilder::new();

        let a = b.airport(Airport::new("AAA", "Alpha", "Alpha City", "AL", "US",
                                       GeoPoint::new(30.0, -90.0)));
        let bb = b.airport(Airport::new("BBB", "Bravo", "Bravo City", "TX", "US",
                                        GeoPoint::new(32.0, -97.0)));
        let c = b.airport(Airport::new("CCC", "Charlie", "Charlie City", "CA", "US",
                                       GeoPoint::new(34.0, -118.0)));
        let d = b.airport(Airport::new("DDD", "Delta", "Delta City", "WA", "US",
                                       GeoPoint::new(47.0, -122.0)));

        let xx = b.airline(Airline::new("XX", "Example Air"));

        b.flight(a, bb, xx, stamp(9, 0), stamp(10, 0), 100.0, None).unwrap();
        b.flight(bb, c, xx, stamp(10, 30), stamp(11, 30), 80.0, None).unwrap();

        (b.build(), [a, bb, c, d])
    }

    /// Same as [`two_leg_network`] plus the direct flight
    /// A→C 09:00–13:00 $300, so the colony has a real route choice.
    pub fn abc_network() -> (FlightNetwork, [AirportId; 4]) {
        let mut b = FlightNetworkBuilder::new();

        let a = b.airport(Airport::new("AAA", "Alpha", "Alpha City", "AL", "US",
                                       GeoPoint::new(30.0, -90.0)));
        let bb = b.airport(Airport::new("BBB", "Bravo", "Bravo City", "TX", "US",
                                        GeoPoint::new(32.0, -97.0)));
        let c = b.airport(Airport::new("CCC", "Charlie", "Charlie City", "CA", "US",
                                       GeoPoint::new(34.0, -118.0)));
        let d = b.airport(Airport::new("DDD", "Delta", "Delta City", "WA", "US",
                                       GeoPoint::new(47.0, -122.0)));

        let xx = b.airline(Airline::new("XX", "Example Air"));

        b.flight(a, bb, xx, stamp(9, 0), stamp(10, 0), 100.0, None).unwrap();
        b.flight(bb, c, xx, stamp(10, 30), stamp(11, 30), 80.0, None).unwrap();
        b.flight(a, c, xx, stamp(9, 0), stamp(13, 0), 300.0, None).unwrap();

        (b.build(), [a, bb, c, d])
    }

    /// A small but thorough colony configuration for the miniature
    /// networks: a 30-minute connection floor keeps the B connection
    /// feasible while still exercising the slack check.
    pub fn small_config(seed: u64) -> AntColonyConfig {
        let mut cfg = AntColonyConfig::new(day_window()).with_seed(seed);
        cfg.warmup_events = 400;
        cfg.result_samples = 25;
        cfg.ants_number = 30;
        cfg.spawn_waves = 5;
        cfg.min_connection_minutes = 30;
        cfg
    }

    /// Assert that `path` is a temporally consistent A→C-style itinerary
    /// within the colony's journey constraints.
    pub fn assert_valid_sample(
        net: &FlightNetwork,
        cfg: &AntColonyConfig,
        path: &[FlightId],
        origin: AirportId,
        destination: AirportId,
    ) {
        assert!(!path.is_empty());
        assert!(path.len() <= cfg.max_connections);
        assert_eq!(net.flight(path[0]).origin, origin);
        assert_eq!(net.flight(*path.last().unwrap()).destination, destination);

        let price: f64 = path.iter().map(|&f| net.flight(f).price).sum();
        assert!(price <= cfg.max_price);

        for &f in path {
            assert!(cfg.window.contains(net.flight(f).departure));
            assert!(cfg.window.contains(net.flight(f).arrival));
        }
        for pair in path.windows(2) {
            let prev = net.flight(pair[0]);
            let next = net.flight(pair[1]);
            assert_eq!(next.origin, prev.destination, "legs must chain");
            assert!(
                next.departure >= prev.arrival + cfg.min_connection_minutes,
                "connection too tight: arrive {}, depart {}",
                prev.arrival,
                next.departure,
            );
        }
    }
}

// ── Event ordering ───────────────────────────────────────────────────────────

#[cfg(test)]
mod events {
    use fly_core::AntId;

    use super::helpers::stamp;
    use crate::{EventQueue, Phase};

    #[test]
    fn outbound_drains_before_inbound() {
        let mut q = EventQueue::new();
        q.push(Phase::Inbound, stamp(8, 0), AntId(0));
        q.push(Phase::Outbound, stamp(20, 0), AntId(1));

        // The later Outbound event still pops first.
        let first = q.pop().unwrap();
        assert_eq!(first.phase, Phase::Outbound);
        assert_eq!(first.ant, AntId(1));
        assert_eq!(q.pop().unwrap().phase, Phase::Inbound);
        assert!(q.pop().is_none());
    }

    #[test]
    fn time_orders_within_a_phase() {
        let mut q = EventQueue::new();
        q.push(Phase::Outbound, stamp(12, 0), AntId(0));
        q.push(Phase::Outbound, stamp(9, 0), AntId(1));
        q.push(Phase::Outbound, stamp(10, 30), AntId(2));

        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|e| e.ant).collect();
        assert_eq!(order, vec![AntId(1), AntId(2), AntId(0)]);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut q = EventQueue::new();
        for i in 0..5u32 {
            q.push(Phase::Outbound, stamp(9, 0), AntId(4 - i));
        }
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|e| e.ant).collect();
        assert_eq!(order, vec![AntId(4), AntId(3), AntId(2), AntId(1), AntId(0)]);
    }
}

// ── Pheromone field ──────────────────────────────────────────────────────────

#[cfg(test)]
mod pheromone {
    use fly_core::{FlightId, Stamp};

    use crate::PheromoneField;

    #[test]
    fn deposit_accumulates() {
        let mut field = PheromoneField::new(3);
        let f = FlightId(1);
        field.deposit(f);
        field.deposit(f);
        assert_eq!(field.level(f), 2.0);
        assert_eq!(field.level(FlightId(0)), 0.0);
    }

    #[test]
    fn whole_periods_halve_the_level() {
        let mut field = PheromoneField::new(1);
        let f = FlightId(0);
        field.deposit(f);
        field.deposit(f);

        // 2.5 half-lives elapsed: exactly two halvings apply.
        field.decay(f, Stamp(250), 100);
        assert_eq!(field.level(f), 0.5);
        assert_eq!(field.stamped_at(f), Stamp(250));
    }

    #[test]
    fn partial_period_leaves_the_level_but_moves_the_stamp() {
        let mut field = PheromoneField::new(1);
        let f = FlightId(0);
        field.deposit(f);

        field.decay(f, Stamp(99), 100);
        assert_eq!(field.level(f), 1.0);
        assert_eq!(field.stamped_at(f), Stamp(99));

        // Two 99-minute steps never complete a period between them.
        field.decay(f, Stamp(198), 100);
        assert_eq!(field.level(f), 1.0);
    }

    #[test]
    fn backward_clock_never_grows_the_trail() {
        let mut field = PheromoneField::new(1);
        let f = FlightId(0);
        field.deposit(f);
        field.decay(f, Stamp(1_000), 100);

        // An Inbound agent considering the edge at an earlier instant.
        field.decay(f, Stamp(0), 100);
        assert!(field.level(f) <= 1.0);
        assert_eq!(field.stamped_at(f), Stamp(0));
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut field = PheromoneField::new(2);
        field.deposit(FlightId(0));
        field.decay(FlightId(1), Stamp(500), 100);

        field.reset();
        assert_eq!(field.level(FlightId(0)), 0.0);
        assert_eq!(field.stamped_at(FlightId(1)), Stamp::ZERO);
    }
}

// ── Colony runs ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod colony {
    use fly_core::FlightId;

    use super::helpers::{abc_network, assert_valid_sample, small_config, two_leg_network};
    use crate::{AntColonyEngine, ColonyObserver};

    #[test]
    fn finds_the_only_route() {
        let (net, [a, _, c, _]) = two_leg_network();
        let mut engine = AntColonyEngine::new(&net, small_config(42));

        let best = engine.run(a, c).expect("the two-leg route is reachable");
        assert_eq!(best.len(), 2);
        assert_valid_sample(&net, engine.config(), &best, a, c);
    }

    #[test]
    fn all_samples_are_valid_itineraries() {
        let (net, [a, _, c, _]) = abc_network();
        let mut engine = AntColonyEngine::new(&net, small_config(7));

        engine.run(a, c).expect("A and C are connected");
        assert!(!engine.samples().is_empty());
        for path in engine.samples() {
            assert_valid_sample(&net, engine.config(), path, a, c);
        }
    }

    #[test]
    fn selection_returns_the_best_sample() {
        let (net, [a, _, c, _]) = abc_network();
        let mut cfg = small_config(11);
        cfg.time_impact_choice = 0.0; // price alone decides
        let mut engine = AntColonyEngine::new(&net, cfg);

        let best = engine.run(a, c).expect("A and C are connected");
        let price = |p: &[FlightId]| p.iter().map(|&f| net.flight(f).price).sum::<f64>();

        let cheapest = engine
            .samples()
            .iter()
            .map(|p| price(p))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(price(&best), cheapest);
    }

    #[test]
    fn price_only_selection_prefers_the_cheap_route() {
        let (net, [a, _, c, _]) = abc_network();
        let mut cfg = small_config(13);
        // Tone down the direct-flight shortcut so the colony explores the
        // connection through B often enough to sample it.
        cfg.direct_connection_impact = 0.2;
        cfg.time_impact_choice = 0.0; // price alone decides
        let mut engine = AntColonyEngine::new(&net, cfg);

        let best = engine.run(a, c).expect("A and C are connected");
        assert_eq!(best.len(), 2, "the $180 two-leg route beats the $300 direct");
        let price: f64 = best.iter().map(|&f| net.flight(f).price).sum();
        assert_eq!(price, 180.0);
    }

    #[test]
    fn unreachable_destination_terminates_with_none() {
        let (net, [a, .., d]) = abc_network();
        let mut cfg = small_config(3);
        cfg.warmup_events = 200;
        cfg.ants_number = 5;
        let mut engine = AntColonyEngine::new(&net, cfg);

        assert!(engine.run(a, d).is_none());
        assert!(engine.samples().is_empty());
    }

    #[test]
    fn same_seed_same_result() {
        let (net, [a, _, c, _]) = abc_network();

        let run = |seed| {
            let mut engine = AntColonyEngine::new(&net, small_config(seed));
            let best = engine.run(a, c);
            (best, engine.samples().to_vec())
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn rerun_resets_the_field_and_samples() {
        let (net, [a, _, c, _]) = two_leg_network();
        let mut engine = AntColonyEngine::new(&net, small_config(5));

        let first = engine.run(a, c);
        let first_samples = engine.samples().to_vec();
        let second = engine.run(a, c);

        // Identical seed, fresh state: the second run replays the first.
        assert_eq!(first, second);
        assert_eq!(first_samples, engine.samples());
    }

    #[test]
    fn observer_sees_every_phase() {
        #[derive(Default)]
        struct Counting {
            warmup_events: usize,
            samples_seen: usize,
            run_ended: bool,
        }
        impl ColonyObserver for Counting {
            fn on_warmup_end(&mut self, events: usize) {
                self.warmup_events = events;
            }
            fn on_sample(&mut self, index: usize, path: &[FlightId]) {
                assert_eq!(index, self.samples_seen);
                assert!(!path.is_empty());
                self.samples_seen += 1;
            }
            fn on_run_end(&mut self, samples: usize) {
                assert_eq!(samples, self.samples_seen);
                self.run_ended = true;
            }
        }

        let (net, [a, _, c, _]) = two_leg_network();
        let cfg = small_config(21);
        let budget = cfg.warmup_events;
        let mut engine = AntColonyEngine::new(&net, cfg);

        let mut obs = Counting::default();
        engine.run_with(a, c, &mut obs);

        assert!(obs.warmup_events <= budget);
        assert!(obs.run_ended);
        assert_eq!(obs.samples_seen, engine.samples().len());
    }
}
