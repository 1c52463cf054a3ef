//! `fly-ants` — ant-colony discrete-event itinerary search.
//!
//! Many lightweight agents walk the time-expanded flight graph, laying
//! pheromone on the edges they choose.  A virtual clock advances event by
//! event; edge pheromone decays exponentially in virtual time and is
//! reinforced by traversal, so historically successful connections attract
//! later agents.  After a warm-up phase builds the trails, a sampling phase
//! collects completed outward itineraries and the best one (by normalized
//! price/duration trade-off) is returned.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`config`]    | `AntColonyConfig`                                    |
//! | [`event`]     | `Phase`, `Event`, deterministic `EventQueue`         |
//! | [`agent`]     | `Ant` — one agent's walk state                       |
//! | [`pheromone`] | `PheromoneField` — per-edge level + decay stamp      |
//! | [`engine`]    | `AntColonyEngine` — the run loop                     |
//! | [`observer`]  | `ColonyObserver` progress callbacks                  |

pub mod agent;
pub mod config;
pub mod engine;
pub mod event;
pub mod observer;
pub mod pheromone;

#[cfg(test)]
mod tests;

pub use agent::Ant;
pub use config::AntColonyConfig;
pub use engine::AntColonyEngine;
pub use event::{Event, EventQueue, Phase};
pub use observer::{ColonyObserver, NoopObserver};
pub use pheromone::PheromoneField;
