//! Flight network representation and builder.
//!
//! # Data layout
//!
//! The flight table is stored once, in **Compressed Sparse Row (CSR)** order
//! by (origin, departure).  Given an `AirportId a`, its outgoing flights
//! occupy the contiguous `FlightId` range:
//!
//! ```text
//! out_start[a] .. out_start[a+1]
//! ```
//!
//! and are already sorted by ascending departure — exactly the order the
//! ant engine samples Outbound candidates in.  A second, permuted view
//! (`in_order` + `in_start`) indexes the same flights by (destination,
//! arrival) so Inbound agents can walk edges against their direction.
//! Together the two views form the undirected multigraph of the simulation;
//! the mutable pheromone fields live with the ant engine, keyed by
//! `FlightId`, never inside the shared network.

use rustc_hash::FxHashMap;

use fly_core::{AirlineId, AirportId, FlightId, Stamp, TimeWindow};

use crate::domain::{Airline, Airport, Flight};
use crate::error::{NetworkError, NetworkResult};

// ── FlightNetwork ────────────────────────────────────────────────────────────

/// An immutable, bounded-date-range flight network.
///
/// Constructed once by [`FlightNetworkBuilder`] (typically fed by an external
/// ingestion collaborator) and then shared read-only by any number of engine
/// runs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightNetwork {
    airports: Vec<Airport>,
    airlines: Vec<Airline>,

    /// All flights, sorted by (origin, departure).  `FlightId` = index here.
    flights: Vec<Flight>,

    /// CSR row pointer for outgoing flights.  Length = airport count + 1.
    out_start: Vec<u32>,

    /// Permutation of all `FlightId`s sorted by (destination, arrival).
    in_order: Vec<FlightId>,

    /// CSR row pointer into `in_order`.  Length = airport count + 1.
    in_start: Vec<u32>,

    airport_index: FxHashMap<String, AirportId>,
    airline_index: FxHashMap<String, AirlineId>,
}

impl FlightNetwork {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn airline_count(&self) -> usize {
        self.airlines.len()
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    // ── Table access ──────────────────────────────────────────────────────

    #[inline]
    pub fn airport(&self, id: AirportId) -> &Airport {
        &self.airports[id.index()]
    }

    #[inline]
    pub fn airline(&self, id: AirlineId) -> &Airline {
        &self.airlines[id.index()]
    }

    #[inline]
    pub fn flight(&self, id: FlightId) -> &Flight {
        &self.flights[id.index()]
    }

    pub fn airports(&self) -> impl Iterator<Item = (AirportId, &Airport)> {
        self.airports.iter().enumerate().map(|(i, a)| (AirportId(i as u32), a))
    }

    pub fn flights(&self) -> impl Iterator<Item = (FlightId, &Flight)> {
        self.flights.iter().enumerate().map(|(i, f)| (FlightId(i as u32), f))
    }

    /// Look up an airport by its code.
    pub fn airport_id(&self, code: &str) -> Option<AirportId> {
        self.airport_index.get(code).copied()
    }

    /// Look up an airline by its code.
    pub fn airline_id(&self, code: &str) -> Option<AirlineId> {
        self.airline_index.get(code).copied()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over all flights departing `airport`, ascending by departure.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_flights(&self, airport: AirportId) -> impl Iterator<Item = FlightId> + '_ {
        let start = self.out_start[airport.index()] as usize;
        let end = self.out_start[airport.index() + 1] as usize;
        (start..end).map(|i| FlightId(i as u32))
    }

    /// All flights arriving at `airport`, ascending by arrival.
    #[inline]
    pub fn in_flights(&self, airport: AirportId) -> &[FlightId] {
        let start = self.in_start[airport.index()] as usize;
        let end = self.in_start[airport.index() + 1] as usize;
        &self.in_order[start..end]
    }

    /// Number of flights departing `airport`.
    #[inline]
    pub fn out_degree(&self, airport: AirportId) -> usize {
        (self.out_start[airport.index() + 1] - self.out_start[airport.index()]) as usize
    }

    // ── Windowing ─────────────────────────────────────────────────────────

    /// A new network with the same airports and airlines but only the
    /// flights that lie entirely inside `window`.
    pub fn restrict(&self, window: TimeWindow) -> FlightNetwork {
        let flights = self
            .flights
            .iter()
            .filter(|f| window.contains(f.departure) && window.contains(f.arrival))
            .copied()
            .collect();

        assemble(
            self.airports.clone(),
            self.airlines.clone(),
            flights,
            self.airport_index.clone(),
            self.airline_index.clone(),
        )
    }
}

// ── FlightNetworkBuilder ─────────────────────────────────────────────────────

/// Construct a [`FlightNetwork`] incrementally, then call [`build`](Self::build).
///
/// Airports and airlines are deduplicated by code: registering a code twice
/// returns the existing ID.  `flight` validates the temporal invariant and
/// endpoint existence; it is the only way a `Flight` enters the system.
///
/// # Example
///
/// ```
/// use fly_core::{GeoPoint, Stamp};
/// use fly_network::{Airline, Airport, FlightNetworkBuilder};
///
/// let mut b = FlightNetworkBuilder::new();
/// let ord = b.airport(Airport::new("ORD", "O'Hare", "Chicago", "IL", "US",
///                                  GeoPoint::new(41.98, -87.90)));
/// let lax = b.airport(Airport::new("LAX", "Los Angeles Intl", "Los Angeles", "CA", "US",
///                                  GeoPoint::new(33.94, -118.41)));
/// let ua = b.airline(Airline::new("UA", "United"));
/// b.flight(ord, lax, ua,
///          Stamp::from_ymd_hm(2015, 6, 1, 9, 0),
///          Stamp::from_ymd_hm(2015, 6, 1, 13, 30),
///          240.0, None).unwrap();
/// let net = b.build();
/// assert_eq!(net.flight_count(), 1);
/// ```
pub struct FlightNetworkBuilder {
    airports: Vec<Airport>,
    airlines: Vec<Airline>,
    flights: Vec<Flight>,
    airport_index: FxHashMap<String, AirportId>,
    airline_index: FxHashMap<String, AirlineId>,
}

impl FlightNetworkBuilder {
    pub fn new() -> Self {
        Self {
            airports: Vec::new(),
            airlines: Vec::new(),
            flights: Vec::new(),
            airport_index: FxHashMap::default(),
            airline_index: FxHashMap::default(),
        }
    }

    /// Pre-allocate for the expected table sizes to reduce reallocations
    /// when bulk-loading a snapshot.
    pub fn with_capacity(airports: usize, flights: usize) -> Self {
        Self {
            airports: Vec::with_capacity(airports),
            airlines: Vec::new(),
            flights: Vec::with_capacity(flights),
            airport_index: FxHashMap::default(),
            airline_index: FxHashMap::default(),
        }
    }

    /// Register an airport; returns the existing ID if the code is known.
    pub fn airport(&mut self, airport: Airport) -> AirportId {
        if let Some(&id) = self.airport_index.get(&airport.code) {
            return id;
        }
        let id = AirportId(self.airports.len() as u32);
        self.airport_index.insert(airport.code.clone(), id);
        self.airports.push(airport);
        id
    }

    /// Register an airline; returns the existing ID if the code is known.
    pub fn airline(&mut self, airline: Airline) -> AirlineId {
        if let Some(&id) = self.airline_index.get(&airline.code) {
            return id;
        }
        let id = AirlineId(self.airlines.len() as u16);
        self.airline_index.insert(airline.code.clone(), id);
        self.airlines.push(airline);
        id
    }

    /// Add one flight edge.
    ///
    /// Rejects `departure > arrival` and references to unregistered
    /// airports/airlines.  When `distance_m` is `None` the great-circle
    /// distance between the endpoints is used.
    pub fn flight(
        &mut self,
        origin: AirportId,
        destination: AirportId,
        airline: AirlineId,
        departure: Stamp,
        arrival: Stamp,
        price: f64,
        distance_m: Option<f32>,
    ) -> NetworkResult<()> {
        if departure > arrival {
            return Err(NetworkError::DepartureAfterArrival { departure, arrival });
        }
        if origin.index() >= self.airports.len() {
            return Err(NetworkError::AirportNotFound(origin));
        }
        if destination.index() >= self.airports.len() {
            return Err(NetworkError::AirportNotFound(destination));
        }
        if airline.index() >= self.airlines.len() {
            return Err(NetworkError::AirlineNotFound(airline));
        }

        let distance_m = distance_m.unwrap_or_else(|| {
            self.airports[origin.index()]
                .position
                .distance_m(self.airports[destination.index()].position)
        });

        self.flights.push(Flight {
            origin,
            destination,
            airline,
            departure,
            arrival,
            price,
            distance_m,
        });
        Ok(())
    }

    /// Sort the flight table, build both CSR views, and freeze the network.
    pub fn build(self) -> FlightNetwork {
        assemble(
            self.airports,
            self.airlines,
            self.flights,
            self.airport_index,
            self.airline_index,
        )
    }
}

impl Default for FlightNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── CSR assembly ─────────────────────────────────────────────────────────────

/// Shared by `build` and `restrict`: sort flights into CSR order and derive
/// both row-pointer arrays.
fn assemble(
    airports: Vec<Airport>,
    airlines: Vec<Airline>,
    mut flights: Vec<Flight>,
    airport_index: FxHashMap<String, AirportId>,
    airline_index: FxHashMap<String, AirlineId>,
) -> FlightNetwork {
    let n = airports.len();

    flights.sort_by_key(|f| (f.origin, f.departure));

    // Outgoing row pointers: counting sort over origins.
    let mut out_start = vec![0u32; n + 1];
    for f in &flights {
        out_start[f.origin.index() + 1] += 1;
    }
    for i in 0..n {
        out_start[i + 1] += out_start[i];
    }

    // Incoming view: permutation sorted by (destination, arrival).
    let mut in_order: Vec<FlightId> = (0..flights.len() as u32).map(FlightId).collect();
    in_order.sort_by_key(|&id| {
        let f = &flights[id.index()];
        (f.destination, f.arrival)
    });

    let mut in_start = vec![0u32; n + 1];
    for f in &flights {
        in_start[f.destination.index() + 1] += 1;
    }
    for i in 0..n {
        in_start[i + 1] += in_start[i];
    }

    FlightNetwork {
        airports,
        airlines,
        flights,
        out_start,
        in_order,
        in_start,
        airport_index,
        airline_index,
    }
}
