//! One neighborhood's state.

use fly_core::FlightId;

/// A site: a candidate itinerary and the state of its local search.
///
/// The first `frozen` legs of `path` are fixed; foragers only re-search
/// everything behind them.  Freezing grows by one on every shrink, so a
/// site's search space narrows monotonically until it improves again or
/// runs out of legs.
#[derive(Clone, Debug)]
pub struct Site {
    /// Current center itinerary, in travel order.
    pub path: Vec<FlightId>,
    /// Scalarized cost of `path` under the run's time priority.
    pub cost: f64,
    /// Number of leading legs foragers must keep.
    pub frozen: usize,
    /// Shrinks performed so far.
    pub shrinkages: usize,
    /// Set when the site ran out of search space; abandoned sites are
    /// dropped at the end of the iteration.
    pub abandoned: bool,
    /// Foragers assigned this iteration (elite sites get more).
    pub foragers: usize,
}

impl Site {
    /// A fresh site around a scouted itinerary.
    pub fn scouted(path: Vec<FlightId>, cost: f64) -> Self {
        Self {
            path,
            cost,
            frozen: 0,
            shrinkages: 0,
            abandoned: false,
            foragers: 0,
        }
    }

    /// Freeze one more leading leg.  Abandons the site once every leg is
    /// frozen or the shrink budget is spent.
    pub fn shrink(&mut self, max_shrinkages: usize) {
        self.frozen += 1;
        self.shrinkages += 1;
        if self.frozen >= self.path.len() || self.shrinkages > max_shrinkages {
            self.abandoned = true;
        }
    }
}
