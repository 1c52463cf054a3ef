//! Run observer trait for progress reporting.

use fly_core::FlightId;

/// Callbacks invoked by [`AntColonyEngine::run_with`][crate::AntColonyEngine::run_with]
/// at phase boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait ColonyObserver {
    /// Called once when the warm-up phase completes.  `events` is the number
    /// of agent activations actually processed (it can fall short of the
    /// configured budget if the colony is empty).
    fn on_warmup_end(&mut self, _events: usize) {}

    /// Called for every completed outward itinerary collected during the
    /// sampling phase.
    fn on_sample(&mut self, _index: usize, _path: &[FlightId]) {}

    /// Called once after sampling stops, before final selection.
    fn on_run_end(&mut self, _samples: usize) {}
}

/// A [`ColonyObserver`] that does nothing.  Used by
/// [`AntColonyEngine::run`][crate::AntColonyEngine::run].
pub struct NoopObserver;

impl ColonyObserver for NoopObserver {}
