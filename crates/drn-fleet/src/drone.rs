//! Drone state machine.
//!
//! Plain tagged enum plus an explicit transition-table function, mirroring
//! the teacher's `MovementState`/`Intent` pattern: small data, a dedicated
//! apply function, no polymorphic dispatch.

use drn_core::{AttrBag, DroneId, VertexId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DroneState {
    Available,
    Flying,
    Charging,
    Maintenance,
    OutOfService,
}

/// The kind of charger connector a drone or station supports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChargerKind {
    Normal,
    Fast,
    Slow,
}

/// Is `to` a legal next state from `from`?
fn transition_allowed(from: DroneState, to: DroneState) -> bool {
    use DroneState::*;
    matches!(
        (from, to),
        (Available, Flying)
            | (Available, Charging)
            | (Available, Maintenance)
            | (Flying, Available)
            | (Flying, Charging)
            | (Charging, Available)
            | (Maintenance, Available)
            | (Maintenance, OutOfService)
            | (OutOfService, Maintenance)
    )
}

#[derive(Clone, Debug)]
pub struct Drone {
    pub id: DroneId,
    pub state: DroneState,
    pub position: VertexId,
    pub battery: f64,
    pub capacity: f64,
    pub consumption_per_unit: f64,
    pub kind: ChargerKind,
    pub attrs: AttrBag,
}

impl Drone {
    pub fn new(
        id: DroneId,
        position: VertexId,
        capacity: f64,
        consumption_per_unit: f64,
        kind: ChargerKind,
    ) -> Self {
        Self {
            id,
            state: DroneState::Available,
            position,
            battery: capacity,
            capacity,
            consumption_per_unit,
            kind,
            attrs: AttrBag::new(),
        }
    }

    /// Attempt a state transition. Returns `false` without mutating state if
    /// the transition is illegal.
    pub fn try_transition(&mut self, target: DroneState) -> bool {
        if !transition_allowed(self.state, target) {
            tracing::debug!(drone = %self.id, from = ?self.state, to = ?target, "rejected drone transition");
            return false;
        }
        self.state = target;
        true
    }

    pub fn battery_fraction(&self) -> f64 {
        if self.capacity <= 0.0 {
            0.0
        } else {
            self.battery / self.capacity
        }
    }
}
