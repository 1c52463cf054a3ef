//! Bee colony run configuration.
//!
//! As with the ant engine, parameter relationships (elite sites within
//! best sites within scouts, a non-degenerate window, distinct endpoints)
//! are validated by the caller before a run starts.

use fly_core::TimeWindow;

/// Configuration for one [`BeeColonyEngine`][crate::BeeColonyEngine] run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeeColonyConfig {
    // ── Journey constraints ───────────────────────────────────────────────
    /// Scouts start their searches at `window.opens`.
    pub window: TimeWindow,
    /// Maximum cumulative ticket price.
    pub max_cost: f64,
    /// Connection-slack floor in minutes, applied on top of each airport's
    /// own transfer time.
    pub transfer_minutes: i64,
    /// Maximum number of transfers, so at most `max_transfers + 1` legs.
    pub max_transfers: usize,
    /// Price/duration trade-off of the cost function: 0 is price-only,
    /// 1 is duration-only.
    pub time_priority: f64,

    // ── Colony shape ──────────────────────────────────────────────────────
    /// Refinement iterations after the initial scouting round.
    pub iterations: usize,
    /// Population size: live sites are replenished back to this count.
    pub scout_bees: usize,
    /// Sites retained after ranking each iteration.
    pub best_sites: usize,
    /// The best-ranked retained sites, which recruit more foragers.
    pub elite_sites: usize,
    /// Foragers assigned to each elite site.
    pub elite_sites_bees: usize,
    /// Foragers assigned to each remaining retained site.
    pub rest_sites_bees: usize,
    /// Shrinkages a site survives before abandonment.
    pub max_shrinkages: usize,

    /// RNG seed — the run's only nondeterminism source.
    pub seed: u64,
}

impl BeeColonyConfig {
    /// A configuration with the application defaults, searching `window`.
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            max_cost: 10_000.0,
            transfer_minutes: 30,
            max_transfers: 5,
            time_priority: 0.5,
            iterations: 100,
            scout_bees: 20,
            best_sites: 10,
            elite_sites: 4,
            elite_sites_bees: 4,
            rest_sites_bees: 2,
            max_shrinkages: 3,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
