//! `fly-bees` — bee-colony neighborhood itinerary search.
//!
//! A population of *sites* (candidate itineraries found by randomized
//! scouting) is refined iteratively: the best sites recruit foragers that
//! re-search the tail of the itinerary behind a frozen leading prefix,
//! sites that stop improving shrink their search space by freezing one
//! more leg, and exhausted sites are abandoned and replaced by fresh
//! scouts.  The best itinerary recorded across all iterations wins.
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`config`]   | `BeeColonyConfig`                               |
//! | [`site`]     | `Site` — one neighborhood's state               |
//! | [`engine`]   | `BeeColonyEngine` — the iteration loop          |
//! | [`observer`] | `SwarmObserver` progress callbacks              |

pub mod config;
pub mod engine;
pub mod observer;
pub mod site;


pub use config::BeeColonyConfig;
pub use engine::BeeColonyEngine;
pub use observer::{NoopObserver, SwarmObserver};
pub use site::Site;
