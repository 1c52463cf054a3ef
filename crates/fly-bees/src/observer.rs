//! Run observer trait for progress reporting.

/// Callbacks invoked by [`BeeColonyEngine::run_with`][crate::BeeColonyEngine::run_with]
/// at iteration boundaries.
///
/// All methods have default no-op implementations.
pub trait SwarmObserver {
    /// Called at the end of each refinement iteration with the live-site
    /// count after replenishment and the best cost recorded so far.
    fn on_iteration(&mut self, _iteration: usize, _live_sites: usize, _best_cost: f64) {}

    /// Called once after the final iteration.  `best_cost` is infinite if
    /// the run never recorded a path.
    fn on_run_end(&mut self, _best_cost: f64) {}
}

/// A [`SwarmObserver`] that does nothing.  Used by
/// [`BeeColonyEngine::run`][crate::BeeColonyEngine::run].
pub struct NoopObserver;

impl SwarmObserver for NoopObserver {}
