//! The colony engine and its event loop.
//!
//! # Run structure
//!
//! 1. **Reset**: every pheromone level and decay stamp is zeroed; one run
//!    exclusively owns the field.
//! 2. **Spawn**: `ants_number` Outbound agents at the origin, distributed
//!    round-robin over `spawn_waves` equally spaced instants of the window.
//! 3. **Warm-up**: `warmup_events` agent activations build the trails.
//!    An Outbound agent reaching the destination turns around (Inbound)
//!    and walks home backward in time, reinforcing the same corridors;
//!    completed walks are not recorded.
//! 4. **Sampling**: activations continue, but an Outbound agent reaching
//!    the destination now contributes its outward path as a sample and is
//!    replaced.  Sampling stops at `result_samples` collected paths or
//!    after a second `warmup_events` budget, whichever comes first.
//! 5. **Selection**: total price and total duration are min-max normalized
//!    across the sample set and combined via `time_impact_choice`; the
//!    minimum wins.

use rustc_hash::FxHashMap;

use fly_core::{AirportId, AntId, FlightId, SearchRng, Stamp};
use fly_network::FlightNetwork;

use crate::agent::Ant;
use crate::config::AntColonyConfig;
use crate::event::{Event, EventQueue, Phase};
use crate::observer::{ColonyObserver, NoopObserver};
use crate::pheromone::PheromoneField;

/// Which run phase an activation is processed under.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Stage {
    Warmup,
    Sampling,
}

// ── AntColonyEngine ──────────────────────────────────────────────────────────

/// One ant-colony run over a shared, read-only [`FlightNetwork`].
///
/// The engine owns the mutable pheromone field; the network is only ever
/// read, so any number of engines may search the same network concurrently.
pub struct AntColonyEngine<'net> {
    net: &'net FlightNetwork,
    config: AntColonyConfig,
    pheromone: PheromoneField,
    samples: Vec<Vec<FlightId>>,
}

impl<'net> AntColonyEngine<'net> {
    pub fn new(net: &'net FlightNetwork, config: AntColonyConfig) -> Self {
        Self {
            net,
            config,
            pheromone: PheromoneField::new(net.flight_count()),
            samples: Vec::new(),
        }
    }

    pub fn config(&self) -> &AntColonyConfig {
        &self.config
    }

    /// The pheromone field of the most recent (or current) run.
    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    /// The outward itineraries collected by the most recent run.
    pub fn samples(&self) -> &[Vec<FlightId>] {
        &self.samples
    }

    /// Run without progress callbacks.
    pub fn run(
        &mut self,
        origin: AirportId,
        destination: AirportId,
    ) -> Option<Vec<FlightId>> {
        self.run_with(origin, destination, &mut NoopObserver)
    }

    /// Execute one full run and return the best sampled itinerary, or
    /// `None` if no agent completed an outward journey within budget.
    pub fn run_with<O: ColonyObserver>(
        &mut self,
        origin: AirportId,
        destination: AirportId,
        observer: &mut O,
    ) -> Option<Vec<FlightId>> {
        self.pheromone.reset();
        self.samples.clear();

        let mut rng = SearchRng::new(self.config.seed);
        let mut queue = EventQueue::new();
        let mut ants: Vec<Ant> = Vec::with_capacity(self.config.ants_number);

        // Spawn waves: wave w sits at fraction w / spawn_waves of the
        // window; ants are dealt round-robin so wave populations differ by
        // at most one.
        let waves = self.config.spawn_waves.max(1);
        for i in 0..self.config.ants_number {
            let wave = (i % waves) as i64;
            let at = self.config.window.at_fraction(wave, waves as i64);
            let id = AntId(ants.len() as u32);
            ants.push(Ant::spawn(origin, at));
            queue.push(Phase::Outbound, at, id);
        }

        // ── Warm-up ───────────────────────────────────────────────────────
        let mut processed = 0;
        while processed < self.config.warmup_events {
            let Some(ev) = queue.pop() else { break };
            self.step(ev, origin, destination, &mut ants, &mut queue, &mut rng, Stage::Warmup);
            processed += 1;
        }
        observer.on_warmup_end(processed);

        // ── Sampling ──────────────────────────────────────────────────────
        //
        // Bounded by a second warm-up-sized event budget so a network with
        // no feasible itinerary still terminates (with zero samples).
        let mut budget = self.config.warmup_events;
        while self.samples.len() < self.config.result_samples && budget > 0 {
            let Some(ev) = queue.pop() else { break };
            let before = self.samples.len();
            self.step(ev, origin, destination, &mut ants, &mut queue, &mut rng, Stage::Sampling);
            if self.samples.len() > before {
                if let Some(path) = self.samples.last() {
                    observer.on_sample(self.samples.len() - 1, path);
                }
            }
            budget -= 1;
        }
        observer.on_run_end(self.samples.len());

        self.select_best()
    }

    // ── Event processing ──────────────────────────────────────────────────

    /// Process one agent activation: sample candidates, decay their edges,
    /// choose one, and transition (advance / flip / retire-and-replace).
    fn step(
        &mut self,
        ev: Event,
        origin: AirportId,
        destination: AirportId,
        ants: &mut [Ant],
        queue: &mut EventQueue,
        rng: &mut SearchRng,
        stage: Stage,
    ) {
        let max_hops = self.config.max_connections;
        let ant = &mut ants[ev.ant.index()];

        let candidates = if ant.hops >= max_hops {
            Vec::new()
        } else {
            self.candidates(ant)
        };

        if candidates.is_empty() {
            Self::respawn(&self.config, origin, ant, ev.ant, queue, rng);
            return;
        }

        // Bring every considered edge's trail up to the agent's clock.
        for &f in &candidates {
            self.pheromone.decay(f, ant.at, self.config.pheromone_half_life);
        }

        // A candidate landing directly on the goal short-circuits scoring
        // with probability `direct_connection_impact`.
        let goal = match ant.phase {
            Phase::Outbound => destination,
            Phase::Inbound => origin,
        };
        let direct = candidates.iter().position(|&id| {
            let f = self.net.flight(id);
            match ant.phase {
                Phase::Outbound => f.destination == goal,
                Phase::Inbound => f.origin == goal,
            }
        });

        let chosen = match direct {
            Some(i) if rng.gen_bool(self.config.direct_connection_impact) => candidates[i],
            _ => {
                let scores = self.score(&candidates, ant);
                candidates[rng.pick_weighted(&scores).unwrap_or(0)]
            }
        };
        self.pheromone.deposit(chosen);

        // ── Transition ────────────────────────────────────────────────────
        let flight = *self.net.flight(chosen);
        ant.spent += flight.price;
        ant.hops += 1;

        match ant.phase {
            Phase::Outbound => {
                ant.at = flight.arrival;
                ant.airport = flight.destination;
                ant.legs.push(chosen);

                if ant.airport == destination {
                    match stage {
                        // Trail building: turn around and walk home.
                        Stage::Warmup => {
                            ant.flip_inbound();
                            queue.push(Phase::Inbound, ant.at, ev.ant);
                        }
                        // Harvest the outward path; the slot gets a fresh agent.
                        Stage::Sampling => {
                            self.samples.push(std::mem::take(&mut ant.legs));
                            Self::respawn(&self.config, origin, ant, ev.ant, queue, rng);
                        }
                    }
                } else {
                    queue.push(Phase::Outbound, ant.at, ev.ant);
                }
            }
            Phase::Inbound => {
                ant.at = flight.departure;
                ant.airport = flight.origin;

                if ant.airport == origin {
                    // Home again — the return leg itself is discarded.
                    Self::respawn(&self.config, origin, ant, ev.ant, queue, rng);
                } else {
                    queue.push(Phase::Inbound, ant.at, ev.ant);
                }
            }
        }
    }

    /// Overwrite a retired agent's slot with a fresh Outbound agent at a
    /// uniformly random instant of the window, and queue its activation.
    fn respawn(
        config: &AntColonyConfig,
        origin: AirportId,
        ant: &mut Ant,
        id: AntId,
        queue: &mut EventQueue,
        rng: &mut SearchRng,
    ) {
        let at = Stamp(rng.gen_range(config.window.opens.0..=config.window.closes.0));
        *ant = Ant::spawn(origin, at);
        queue.push(Phase::Outbound, at, id);
    }

    // ── Candidate sampling ────────────────────────────────────────────────

    /// Feasible candidate flights from the agent's airport in its current
    /// direction, at most `connection_samples` per distinct neighboring
    /// airport — earliest-departing first when Outbound, latest-arriving
    /// first when Inbound (the CSR views are pre-sorted for exactly this).
    fn candidates(&self, ant: &Ant) -> Vec<FlightId> {
        let cfg = &self.config;
        let mut per_airport: FxHashMap<AirportId, usize> = FxHashMap::default();
        let mut picked = Vec::new();

        match ant.phase {
            Phase::Outbound => {
                for id in self.net.out_flights(ant.airport) {
                    let f = self.net.flight(id);
                    let seen = per_airport.entry(f.destination).or_insert(0);
                    if *seen >= cfg.connection_samples {
                        continue;
                    }
                    if f.departure < ant.at + cfg.min_connection_minutes {
                        continue;
                    }
                    if f.arrival > cfg.window.closes {
                        continue;
                    }
                    if ant.spent + f.price > cfg.max_price {
                        continue;
                    }
                    *seen += 1;
                    picked.push(id);
                }
            }
            Phase::Inbound => {
                for &id in self.net.in_flights(ant.airport).iter().rev() {
                    let f = self.net.flight(id);
                    let seen = per_airport.entry(f.origin).or_insert(0);
                    if *seen >= cfg.connection_samples {
                        continue;
                    }
                    if f.arrival + cfg.min_connection_minutes > ant.at {
                        continue;
                    }
                    if f.departure < cfg.window.opens {
                        continue;
                    }
                    if ant.spent + f.price > cfg.max_price {
                        continue;
                    }
                    *seen += 1;
                    picked.push(id);
                }
            }
        }

        picked
    }

    // ── Scoring ───────────────────────────────────────────────────────────

    /// Roulette weights for a candidate set: cubed complements of the
    /// normalized wait and price plus the linear normalized pheromone
    /// level, mixed by the configured impact weights.
    fn score(&self, candidates: &[FlightId], ant: &Ant) -> Vec<f64> {
        let waits: Vec<f64> = candidates
            .iter()
            .map(|&id| {
                let f = self.net.flight(id);
                let wait = match ant.phase {
                    Phase::Outbound => f.departure - ant.at,
                    Phase::Inbound => ant.at - f.arrival,
                };
                wait as f64
            })
            .collect();
        let prices: Vec<f64> = candidates.iter().map(|&id| self.net.flight(id).price).collect();
        let trails: Vec<f64> = candidates.iter().map(|&id| self.pheromone.level(id)).collect();

        let norm_wait = min_max_normalize(&waits);
        let norm_price = min_max_normalize(&prices);
        let norm_trail = min_max_normalize(&trails);

        let ti = self.config.time_impact_nodes;
        let pi = self.config.pheromone_impact;
        let w_time = ti * (1.0 - pi);
        let w_price = 1.0 - pi - w_time;

        (0..candidates.len())
            .map(|i| {
                w_time * (1.0 - norm_wait[i]).powi(3)
                    + w_price * (1.0 - norm_price[i]).powi(3)
                    + pi * norm_trail[i]
            })
            .collect()
    }

    // ── Final selection ───────────────────────────────────────────────────

    /// Min-max normalize total price and duration across the sample set,
    /// combine via `time_impact_choice`, and return the minimum.
    fn select_best(&self) -> Option<Vec<FlightId>> {
        if self.samples.is_empty() {
            return None;
        }

        let prices: Vec<f64> = self
            .samples
            .iter()
            .map(|p| p.iter().map(|&f| self.net.flight(f).price).sum())
            .collect();
        let durations: Vec<f64> = self
            .samples
            .iter()
            .map(|p| match (p.first(), p.last()) {
                (Some(&a), Some(&b)) => {
                    (self.net.flight(b).arrival - self.net.flight(a).departure) as f64
                }
                _ => 0.0,
            })
            .collect();

        let norm_price = min_max_normalize(&prices);
        let norm_duration = min_max_normalize(&durations);
        let w = self.config.time_impact_choice;

        let mut best = 0;
        let mut best_score = f64::INFINITY;
        for i in 0..self.samples.len() {
            let score = norm_price[i] * (1.0 - w) + norm_duration[i] * w;
            if score < best_score {
                best_score = score;
                best = i;
            }
        }

        Some(self.samples[best].clone())
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Map values onto [0, 1] by min-max.  A flat (or single-element) input
/// maps everything to 0.
fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }

    let span = hi - lo;
    if !(span > 0.0) || !span.is_finite() {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| (v - lo) / span).collect()
}

#[cfg(test)]
mod unit {
    use super::min_max_normalize;

    #[test]
    fn normalize_spans_zero_to_one() {
        let n = min_max_normalize(&[10.0, 20.0, 30.0]);
        assert_eq!(n, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn normalize_flat_input_is_all_zero() {
        assert_eq!(min_max_normalize(&[5.0, 5.0, 5.0]), vec![0.0, 0.0, 0.0]);
        assert_eq!(min_max_normalize(&[7.0]), vec![0.0]);
        assert!(min_max_normalize(&[]).is_empty());
    }
}
