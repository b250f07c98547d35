use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FleetError {
    #[error("state transition rejected")]
    IllegalTransition,

    #[error("route not feasible under the given battery constraints: {0}")]
    NotFeasible(String),

    #[error("station has no spare charging capacity")]
    StationAtCapacity,

    #[error(transparent)]
    Core(#[from] drn_core::CoreError),

    #[error(transparent)]
    Graph(#[from] drn_graph::GraphError),
}

pub type FleetResult<T> = Result<T, FleetError>;
