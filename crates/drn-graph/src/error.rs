use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex not found")]
    VertexNotFound,

    #[error(transparent)]
    Core(#[from] drn_core::CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
