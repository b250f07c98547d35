use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration row: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] drn_core::CoreError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
