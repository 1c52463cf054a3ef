//! `fly-network` — the time-expanded flight multigraph and its search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`domain`] | `Airport`, `Airline`, `Flight` value types                |
//! | [`network`]| `FlightNetwork` (CSR, both directions), builder, windowing|
//! | [`search`] | randomized depth/cost-bounded path search                 |
//! | [`cost`]   | price/duration scalarization                              |
//! | [`error`]  | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Graph model
//!
//! Every flight is one edge of a time-expanded multigraph: feasibility of a
//! path depends on the temporal ordering of its legs, not just adjacency.
//! The network keeps two CSR views over one flight table — outgoing edges
//! sorted by departure and incoming edges sorted by arrival — so the ant
//! engine can walk the graph in either direction without a second copy of
//! the edge data.

pub mod cost;
pub mod domain;
pub mod error;
pub mod network;
pub mod search;


pub use cost::path_cost;
pub use domain::{Airline, Airport, Flight};
pub use error::{NetworkError, NetworkResult};
pub use network::{FlightNetwork, FlightNetworkBuilder};
pub use search::{random_search, SearchBounds};
