use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoutingError {
    /// Raised by `all_shortest`, which has no `RouteOutcome` to report a
    /// non-success result through. The three single-target search entry
    /// points (`mode_a::shortest`, `mode_b::shortest_battery_aware`,
    /// `mode_c::search`) surface an unknown location as a non-success
    /// `RouteOutcome` instead, per the engine's non-abrupt failure policy.
    #[error("start or end vertex not present in the graph")]
    UnknownLocation,

    #[error(transparent)]
    Core(#[from] drn_core::CoreError),

    #[error(transparent)]
    Graph(#[from] drn_graph::GraphError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
