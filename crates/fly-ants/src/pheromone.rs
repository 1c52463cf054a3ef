//! Per-edge pheromone state.
//!
//! The levels live in a plain array keyed by `FlightId`, owned by exactly
//! one engine run at a time and zeroed at run start — never embedded in the
//! shared, read-only `FlightNetwork`.  Decay is lazy: an edge's level is
//! brought up to date only when an agent considers it.

use fly_core::{FlightId, Stamp};

/// Mutable pheromone fields of the simulation multigraph.
pub struct PheromoneField {
    level: Vec<f64>,
    /// Virtual time of each edge's last decay application.
    stamped: Vec<Stamp>,
}

impl PheromoneField {
    /// One field per flight edge, all zeroed.
    pub fn new(edge_count: usize) -> Self {
        Self {
            level: vec![0.0; edge_count],
            stamped: vec![Stamp::ZERO; edge_count],
        }
    }

    /// Zero every level and update stamp.  Called at the start of every run.
    pub fn reset(&mut self) {
        self.level.fill(0.0);
        self.stamped.fill(Stamp::ZERO);
    }

    #[inline]
    pub fn level(&self, flight: FlightId) -> f64 {
        self.level[flight.index()]
    }

    #[inline]
    pub fn stamped_at(&self, flight: FlightId) -> Stamp {
        self.stamped[flight.index()]
    }

    pub fn edge_count(&self) -> usize {
        self.level.len()
    }

    /// Apply exponential decay with the given half-life and stamp the edge
    /// with `now`.
    ///
    /// `level *= 0.5 ^ floor(elapsed / half_life)` — whole half-life
    /// periods only.  Elapsed time is clamped at zero: Inbound agents move
    /// backward along the virtual clock, and a negative exponent would
    /// *grow* the trail.
    pub fn decay(&mut self, flight: FlightId, now: Stamp, half_life: i64) {
        let i = flight.index();
        let elapsed = (now - self.stamped[i]).max(0);
        let periods = elapsed / half_life.max(1);
        if periods > 0 {
            self.level[i] *= 0.5f64.powi(periods.min(i32::MAX as i64) as i32);
        }
        self.stamped[i] = now;
    }

    /// Reinforce an edge an agent just traversed.
    #[inline]
    pub fn deposit(&mut self, flight: FlightId) {
        self.level[flight.index()] += 1.0;
    }
}
