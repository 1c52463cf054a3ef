//! Immutable domain value types.
//!
//! Airports and airlines are identified by their code alone: two `Airport`
//! values with the same code are the same airport no matter what the other
//! attributes say.  Equality and hashing reflect that.  Inside a
//! [`FlightNetwork`][crate::FlightNetwork] the types are stored once in
//! index-addressable tables and referenced by typed ID, never by shared
//! mutable reference.

use std::hash::{Hash, Hasher};

use fly_core::{AirlineId, AirportId, GeoPoint, Stamp};

// ── Airport ──────────────────────────────────────────────────────────────────

/// Default minimum transfer time when nothing better is known, in minutes.
pub const DEFAULT_TRANSFER_MINUTES: i64 = 15;

/// One airport: identity, location, and the minimum time a passenger needs
/// between a landing and the next take-off there.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airport {
    /// IATA-style code — the airport's identity.
    pub code: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub position: GeoPoint,
    pub terminals: u32,
    /// Minimum connection slack applied whenever a path passes through here.
    pub transfer_minutes: i64,
}

impl Airport {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        position: GeoPoint,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            position,
            terminals: 1,
            transfer_minutes: DEFAULT_TRANSFER_MINUTES,
        }
    }

    pub fn with_terminals(mut self, terminals: u32) -> Self {
        self.terminals = terminals;
        self
    }

    pub fn with_transfer_minutes(mut self, minutes: i64) -> Self {
        self.transfer_minutes = minutes;
        self
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Airport {}

impl Hash for Airport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// ── Airline ──────────────────────────────────────────────────────────────────

/// One carrier.  Identity is the code; the name is display-only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airline {
    pub code: String,
    pub name: String,
}

impl Airline {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }
}

impl PartialEq for Airline {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Airline {}

impl Hash for Airline {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// ── Flight ───────────────────────────────────────────────────────────────────

/// One scheduled flight — an edge of the time-expanded multigraph.
///
/// Invariant: `departure <= arrival`, enforced by the network builder.
/// Endpoints and the carrier are stored as typed IDs into the owning
/// network's tables.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flight {
    pub origin: AirportId,
    pub destination: AirportId,
    pub airline: AirlineId,
    pub departure: Stamp,
    pub arrival: Stamp,
    pub price: f64,
    /// Great-circle distance in metres.  Display-only; excluded from equality.
    pub distance_m: f32,
}

impl Flight {
    /// Scheduled block time in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.arrival - self.departure
    }
}

impl PartialEq for Flight {
    /// Equality by (origin, destination, airline, departure, arrival, price).
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.destination == other.destination
            && self.airline == other.airline
            && self.departure == other.departure
            && self.arrival == other.arrival
            && self.price == other.price
    }
}
