//! One agent's walk state.

use fly_core::{AirportId, FlightId, Stamp};

use crate::event::Phase;

/// A transient simulation agent.
///
/// Created at spawn and overwritten in place at retirement — the
/// replacement agent reuses the slot (and `AntId`) of the retired one.
#[derive(Clone, Debug)]
pub struct Ant {
    /// The agent's position on the virtual clock.
    pub at: Stamp,
    pub airport: AirportId,
    pub phase: Phase,
    /// Cumulative ticket price of the legs taken this phase.
    pub spent: f64,
    /// Legs taken this phase.
    pub hops: usize,
    /// Flight sequence accumulated this phase, in travel order.
    pub legs: Vec<FlightId>,
}

impl Ant {
    /// A fresh Outbound agent standing at `airport` at virtual time `at`.
    pub fn spawn(airport: AirportId, at: Stamp) -> Self {
        Self {
            at,
            airport,
            phase: Phase::Outbound,
            spent: 0.0,
            hops: 0,
            legs: Vec::new(),
        }
    }

    /// Turn around at the destination during warm-up: continue as Inbound
    /// with cost and hop counters reset.
    pub fn flip_inbound(&mut self) {
        self.phase = Phase::Inbound;
        self.spent = 0.0;
        self.hops = 0;
        self.legs.clear();
    }
}
