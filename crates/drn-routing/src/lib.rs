//! `drn-routing` — plain and battery-aware shortest-path search (C6).
//!
//! | Module     | Contents                                               |
//! |------------|---------------------------------------------------------|
//! | [`mode_a`] | Plain single-source Dijkstra, `all_shortest`             |
//! | [`mode_b`] | Battery-aware optimum search, path-info derivation       |
//! | [`mode_c`] | Multi-strategy battery-aware BFS with preemptive refuel  |
//! | [`router`] | `Router` trait, `PlainDijkstra`, `StrategicBfs`          |
//! | [`types`]  | `RouteOutcome`, `ChargingStop`, `SearchStrategy`         |
//! | [`error`]  | `RoutingError`, `RoutingResult`                          |

pub mod error;
pub mod mode_a;
pub mod mode_b;
pub mod mode_c;
pub mod router;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{RoutingError, RoutingResult};
pub use mode_c::BfsOptions;
pub use router::{PlainDijkstra, Router, StrategicBfs};
pub use types::{ChargingStop, RouteOutcome, SearchStrategy};
