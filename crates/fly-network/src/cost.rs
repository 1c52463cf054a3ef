//! Price/duration scalarization.
//!
//! `time_priority` slides between the two objectives: 0 compares paths by
//! price alone, 1 by door-to-door duration alone.  Price is in raw currency
//! units and duration in raw minutes — the mix is intentionally left
//! unnormalized here to match the per-step comparisons of the reference
//! behavior; only the ant engine's final cross-sample selection normalizes
//! the two axes (see `fly-ants`).

use fly_core::FlightId;

use crate::network::FlightNetwork;

/// Scalarized cost of a flight sequence.
///
/// `total_price * (1 - time_priority) + total_duration_minutes * time_priority`,
/// where duration runs from the first leg's departure to the last leg's
/// arrival.  An absent (empty) sequence costs `f64::INFINITY`.
pub fn path_cost(net: &FlightNetwork, path: &[FlightId], time_priority: f64) -> f64 {
    let (first, last) = match (path.first(), path.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return f64::INFINITY,
    };

    let total_price: f64 = path.iter().map(|&id| net.flight(id).price).sum();
    let duration = (net.flight(last).arrival - net.flight(first).departure) as f64;

    total_price * (1.0 - time_priority) + duration * time_priority
}
