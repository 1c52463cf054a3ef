//! Ant colony run configuration.
//!
//! All parameter relationships (spawn waves not exceeding the ant count,
//! a non-degenerate window, distinct endpoints) are validated by the caller
//! before a run starts; the engine itself does not re-check them.

use fly_core::TimeWindow;

/// Configuration for one [`AntColonyEngine`][crate::AntColonyEngine] run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntColonyConfig {
    // ── Technical parameters ──────────────────────────────────────────────
    /// Events processed during warm-up (trail building, no samples kept).
    /// Doubles as the sampling phase's event budget, so a run over an
    /// infeasible network still terminates.
    pub warmup_events: usize,
    /// Completed outward itineraries to collect before final selection.
    pub result_samples: usize,
    /// Total number of concurrently live agents.
    pub ants_number: usize,
    /// Number of equally spaced spawn waves across the window.
    pub spawn_waves: usize,
    /// Per-step cap on feasible candidate flights kept per distinct
    /// neighboring airport.
    pub connection_samples: usize,

    // ── Hyperparameters ───────────────────────────────────────────────────
    /// Probability of taking a candidate that lands directly on the goal.
    pub direct_connection_impact: f64,
    /// Weight of the wait-time term in per-step candidate scoring.
    pub time_impact_nodes: f64,
    /// Weight of the pheromone term in per-step candidate scoring.
    pub pheromone_impact: f64,
    /// Pheromone half-life in virtual minutes.
    pub pheromone_half_life: i64,

    // ── Journey constraints ───────────────────────────────────────────────
    /// Earliest departure / latest arrival of the whole journey.
    pub window: TimeWindow,
    /// Minimum connection slack between consecutive legs, in minutes.
    pub min_connection_minutes: i64,
    /// Maximum number of legs per itinerary.
    pub max_connections: usize,
    /// Maximum cumulative ticket price.
    pub max_price: f64,

    // ── Final selection ───────────────────────────────────────────────────
    /// Cross-sample trade-off: 0 picks by normalized price alone, 1 by
    /// normalized duration alone.
    pub time_impact_choice: f64,

    /// RNG seed — the run's only nondeterminism source.
    pub seed: u64,
}

impl AntColonyConfig {
    /// A configuration with the application defaults, searching `window`.
    pub fn new(window: TimeWindow) -> Self {
        Self {
            warmup_events: 1_000,
            result_samples: 10,
            ants_number: 100,
            spawn_waves: 10,
            connection_samples: 3,
            direct_connection_impact: 0.8,
            time_impact_nodes: 0.6,
            pheromone_impact: 0.4,
            pheromone_half_life: 1_000,
            window,
            min_connection_minutes: 90,
            max_connections: 5,
            max_price: 10_000.0,
            time_impact_choice: 0.5,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
