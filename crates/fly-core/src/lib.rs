//! `fly-core` — foundational types for the `flyway` itinerary search workspace.
//!
//! This crate is a dependency of every other `fly-*` crate.  It intentionally
//! has no `fly-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                              |
//! |----------|-------------------------------------------------------|
//! | [`ids`]  | `AirportId`, `AirlineId`, `FlightId`, `AntId`         |
//! | [`geo`]  | `GeoPoint`, haversine distance                        |
//! | [`time`] | `Stamp` (minutes since epoch), `TimeWindow`           |
//! | [`rng`]  | `SearchRng` (seeded, injected per engine run)         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{AirlineId, AirportId, AntId, FlightId};
pub use rng::SearchRng;
pub use time::{Stamp, TimeWindow};
