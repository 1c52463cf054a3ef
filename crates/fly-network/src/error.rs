//! Network construction errors.
//!
//! Construction failures are hard errors; search exhaustion is not — a
//! search that finds no feasible itinerary returns `None`.  The two
//! channels are deliberately kept apart so "no itinerary exists" is never
//! mistaken for "invalid input".

use thiserror::Error;

use fly_core::{AirlineId, AirportId, Stamp};

/// Errors raised while assembling a [`FlightNetwork`][crate::FlightNetwork].
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("flight departs at {departure} but arrives at {arrival}")]
    DepartureAfterArrival { departure: Stamp, arrival: Stamp },

    #[error("airport {0} not found")]
    AirportNotFound(AirportId),

    #[error("airline {0} not found")]
    AirlineNotFound(AirlineId),
}

/// Shorthand result type for network construction.
pub type NetworkResult<T> = Result<T, NetworkError>;
