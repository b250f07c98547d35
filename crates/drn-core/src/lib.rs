//! `drn-core` — foundational types for the drone-routing core.
//!
//! This crate is a dependency of every other `drn-*` crate. It intentionally
//! has no `drn-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                             |
//! |-----------|-------------------------------------------------------|
//! | [`ids`]   | `VertexId`, `EdgeIndex`, `DroneId`, `StationId`       |
//! | [`attrs`] | `AttrValue`, `AttrBag`, `Role`                        |
//! | [`rng`]   | `GraphRng` — single seeded source for C5              |
//! | [`error`] | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public value types.|

pub mod attrs;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use attrs::{AttrBag, AttrValue, Role};
pub use error::{CoreError, CoreResult};
pub use ids::{DroneId, EdgeIndex, StationId, VertexId};
pub use rng::GraphRng;
