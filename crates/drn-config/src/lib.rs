//! `drn-config` — recognized-option configuration map, CSV ingestion, and
//! the configuration validator (C8).
//!
//! | Module        | Contents                                     |
//! |---------------|-----------------------------------------------|
//! | [`config_map`]| `ConfigMap`                                    |
//! | [`loader`]    | `load_csv`, `load_csv_reader`                  |
//! | [`validator`] | `validate`, `ValidationReport`, `preset`       |
//! | [`error`]     | `ConfigError`, `ConfigResult`                  |

pub mod config_map;
pub mod error;
pub mod loader;
pub mod validator;

#[cfg(test)]
mod tests;

pub use config_map::ConfigMap;
pub use error::{ConfigError, ConfigResult};
pub use validator::{preset, validate, ConfigIssue, ValidationReport};
