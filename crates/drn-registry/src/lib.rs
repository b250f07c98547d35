//! `drn-registry` — route frequency index (C9) and per-vertex visit
//! statistics (C10).
//!
//! | Module       | Contents                                   |
//! |--------------|----------------------------------------------|
//! | [`route`]    | `RouteRecord`, `route_id`                     |
//! | [`registry`] | `RouteRegistry`, `UsageStatistics`             |
//! | [`visits`]   | `VisitCounters`                                |

pub mod registry;
pub mod route;
pub mod visits;


pub use registry::{RouteRegistry, UsageStatistics};
pub use route::{route_id, RouteRecord};
pub use visits::VisitCounters;
