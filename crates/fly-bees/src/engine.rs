//! The swarm engine and its iteration loop.
//!
//! # Run structure
//!
//! 1. **Scouting**: `scout_bees` independent randomized searches seed the
//!    site population; scouts that find nothing are dropped.  Zero initial
//!    successes fails the whole run.
//! 2. **Iterations** (`iterations` total): rank sites by cost, keep the top
//!    `best_sites`, record the global best from the top-ranked site, assign
//!    foragers (elite sites recruit more), run each site's local search,
//!    shrink sites that did not improve, drop abandoned sites, and
//!    replenish the population with fresh scouts — one attempt per vacancy.
//! 3. **Result**: the best itinerary recorded across all iterations.
//!
//! Local search keeps the site's frozen leading legs and re-searches from
//! the last frozen leg's arrival to the target under the remaining depth
//! and cost budget; the site's center is replaced only on strict cost
//! improvement, so the recorded global best is non-increasing.

use fly_core::{AirportId, FlightId, SearchRng};
use fly_network::{path_cost, random_search, FlightNetwork, SearchBounds};

use crate::config::BeeColonyConfig;
use crate::observer::{NoopObserver, SwarmObserver};
use crate::site::Site;

// ── BeeColonyEngine ──────────────────────────────────────────────────────────

/// One bee-colony run over a shared, read-only [`FlightNetwork`].
///
/// The engine holds no cross-run state; the site population lives on the
/// stack of [`run_with`](Self::run_with).
pub struct BeeColonyEngine<'net> {
    net: &'net FlightNetwork,
    config: BeeColonyConfig,
}

impl<'net> BeeColonyEngine<'net> {
    pub fn new(net: &'net FlightNetwork, config: BeeColonyConfig) -> Self {
        Self { net, config }
    }

    pub fn config(&self) -> &BeeColonyConfig {
        &self.config
    }

    /// Run without progress callbacks.
    pub fn run(
        &self,
        origin: AirportId,
        destination: AirportId,
    ) -> Option<Vec<FlightId>> {
        self.run_with(origin, destination, &mut NoopObserver)
    }

    /// Execute one full run and return the best recorded itinerary, or
    /// `None` if the initial scouting round found nothing at all.
    pub fn run_with<O: SwarmObserver>(
        &self,
        origin: AirportId,
        destination: AirportId,
        observer: &mut O,
    ) -> Option<Vec<FlightId>> {
        let mut rng = SearchRng::new(self.config.seed);

        // ── Initial scouting ──────────────────────────────────────────────
        let mut sites: Vec<Site> = Vec::with_capacity(self.config.scout_bees);
        for _ in 0..self.config.scout_bees {
            if let Some(site) = self.scout(origin, destination, &mut rng) {
                sites.push(site);
            }
        }
        if sites.is_empty() {
            observer.on_run_end(f64::INFINITY);
            return None;
        }

        let mut best_path: Option<Vec<FlightId>> = None;
        let mut best_cost = f64::INFINITY;

        // ── Refinement ────────────────────────────────────────────────────
        for iteration in 0..self.config.iterations {
            sites.sort_by(|a, b| a.cost.total_cmp(&b.cost));
            sites.truncate(self.config.best_sites);

            if let Some(top) = sites.first() {
                if top.cost < best_cost {
                    best_cost = top.cost;
                    best_path = Some(top.path.clone());
                }
            }

            for (rank, site) in sites.iter_mut().enumerate() {
                site.foragers = if rank < self.config.elite_sites {
                    self.config.elite_sites_bees
                } else {
                    self.config.rest_sites_bees
                };
            }

            for site in &mut sites {
                if !self.forage(site, origin, destination, &mut rng) {
                    site.shrink(self.config.max_shrinkages);
                }
            }
            sites.retain(|s| !s.abandoned);

            let vacancies = self.config.scout_bees.saturating_sub(sites.len());
            for _ in 0..vacancies {
                if let Some(site) = self.scout(origin, destination, &mut rng) {
                    sites.push(site);
                }
            }

            observer.on_iteration(iteration, sites.len(), best_cost);
        }

        observer.on_run_end(best_cost);
        best_path
    }

    // ── Scouting ──────────────────────────────────────────────────────────

    /// One randomized search over the full journey budget, wrapped into a
    /// fresh site.
    fn scout(
        &self,
        origin: AirportId,
        destination: AirportId,
        rng: &mut SearchRng,
    ) -> Option<Site> {
        let cfg = &self.config;
        let bounds = SearchBounds::new(cfg.max_transfers + 1, cfg.max_cost)
            .with_min_transfer(cfg.transfer_minutes);
        let path = random_search(self.net, rng, origin, destination, cfg.window.opens, bounds)?;
        let cost = path_cost(self.net, &path, cfg.time_priority);
        Some(Site::scouted(path, cost))
    }

    // ── Local search ──────────────────────────────────────────────────────

    /// Run the site's assigned foragers.  Each keeps the frozen prefix and
    /// re-searches the tail under the remaining depth and cost budget.
    /// Returns whether any forager improved the site.
    fn forage(
        &self,
        site: &mut Site,
        origin: AirportId,
        destination: AirportId,
        rng: &mut SearchRng,
    ) -> bool {
        let cfg = &self.config;
        let mut improved = false;

        for _ in 0..site.foragers {
            let (from, start, spent) = if site.frozen == 0 {
                (origin, cfg.window.opens, 0.0)
            } else {
                let prefix = &site.path[..site.frozen];
                let last = self.net.flight(prefix[prefix.len() - 1]);
                let spent: f64 = prefix.iter().map(|&f| self.net.flight(f).price).sum();
                (last.destination, last.arrival, spent)
            };

            let depth = (cfg.max_transfers + 1).saturating_sub(site.frozen);
            let bounds = SearchBounds::new(depth, cfg.max_cost - spent)
                .with_min_transfer(cfg.transfer_minutes);

            let Some(extension) = random_search(self.net, rng, from, destination, start, bounds)
            else {
                continue;
            };

            let mut candidate: Vec<FlightId> = site.path[..site.frozen].to_vec();
            candidate.extend(extension);

            let cost = path_cost(self.net, &candidate, cfg.time_priority);
            if cost < site.cost {
                site.path = candidate;
                site.cost = cost;
                improved = true;
            }
        }

        improved
    }
}
