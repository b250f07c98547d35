//! `drn-graph` — the undirected weighted graph model and its random,
//! quota-respecting, guaranteed-connected generator.
//!
//! | Module        | Contents                                   |
//! |----------------|--------------------------------------------|
//! | [`graph`]      | `Graph`, `Vertex`, `Edge`, `EdgeTag`        |
//! | [`generator`]  | `generate`, `RoleQuotas`                   |
//! | [`error`]      | `GraphError`, `GraphResult`                |

pub mod error;
pub mod generator;
pub mod graph;


pub use error::{GraphError, GraphResult};
pub use generator::{generate, RoleQuotas};
pub use graph::{Edge, EdgeTag, Graph, Vertex};
