//! `drn-fleet` — drone/station state machines and the battery route
//! validator (C7).
//!
//! | Module        | Contents                                       |
//! |---------------|--------------------------------------------------|
//! | [`drone`]     | `Drone`, `DroneState`, `ChargerKind`              |
//! | [`station`]   | `Station`, `StationState`, `StationTotals`        |
//! | [`validator`] | `validate`, `ValidationOptions`, `ValidationResult` |
//! | [`error`]     | `FleetError`, `FleetResult`                       |

pub mod drone;
pub mod error;
pub mod station;
pub mod validator;

#[cfg(test)]
mod tests;

pub use drone::{ChargerKind, Drone, DroneState};
pub use error::{FleetError, FleetResult};
pub use station::{Station, StationState, StationTotals};
pub use validator::{validate, RequiredRefuel, ValidationOptions, ValidationResult};
