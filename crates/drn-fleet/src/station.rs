//! Charging station state machine.

use drn_core::{AttrBag, DroneId, StationId, VertexId};

use crate::drone::{ChargerKind, Drone, DroneState};
use crate::error::{FleetError, FleetResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationState {
    Available,
    Occupied,
    Maintenance,
    OutOfService,
}

fn transition_allowed(from: StationState, to: StationState) -> bool {
    use StationState::*;
    matches!(
        (from, to),
        (Available, Occupied)
            | (Available, Maintenance)
            | (Occupied, Available)
            | (Occupied, Maintenance)
            | (Maintenance, Available)
            | (Maintenance, OutOfService)
            | (OutOfService, Maintenance)
    )
}

/// Cumulative usage counters for a station, updated by `finish_charge`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationTotals {
    pub sessions: u64,
    pub energy_delivered_pct: f64,
}

#[derive(Clone, Debug)]
pub struct Station {
    pub id: StationId,
    pub vertex: VertexId,
    pub state: StationState,
    pub capacity: usize,
    pub kinds: Vec<ChargerKind>,
    /// Weak references only: the station holds ids of charging drones, not
    /// the drones themselves, per the "no back-reference" design note.
    pub charging: Vec<DroneId>,
    pub efficiency: f64,
    pub totals: StationTotals,
    pub attrs: AttrBag,
}

impl Station {
    pub fn new(
        id: StationId,
        vertex: VertexId,
        capacity: usize,
        kinds: Vec<ChargerKind>,
        efficiency: f64,
    ) -> Self {
        Self {
            id,
            vertex,
            state: StationState::Available,
            capacity,
            kinds,
            charging: Vec::new(),
            efficiency,
            totals: StationTotals::default(),
            attrs: AttrBag::new(),
        }
    }

    pub fn try_transition(&mut self, target: StationState) -> bool {
        if !transition_allowed(self.state, target) {
            tracing::debug!(station = %self.id, from = ?self.state, to = ?target, "rejected station transition");
            return false;
        }
        self.state = target;
        true
    }

    pub fn has_spare_capacity(&self) -> bool {
        self.charging.len() < self.capacity
    }

    /// Begin a charging session for `drone` at this station.
    ///
    /// Preconditions: the station is available with spare capacity and the
    /// drone isn't already charging. The requested connector kind is used if
    /// the station supports it, otherwise the station's first kind is used.
    /// On success the drone moves to this station's vertex and to the
    /// `Charging` state; the station moves to `Occupied` iff it is now at
    /// capacity.
    pub fn start_charge(
        &mut self,
        drone: &mut Drone,
        requested_kind: ChargerKind,
    ) -> FleetResult<ChargerKind> {
        if self.state != StationState::Available || !self.has_spare_capacity() {
            return Err(FleetError::StationAtCapacity);
        }
        if drone.state == DroneState::Charging {
            return Err(FleetError::IllegalTransition);
        }

        let effective_kind = if self.kinds.contains(&requested_kind) {
            requested_kind
        } else {
            *self
                .kinds
                .first()
                .ok_or_else(|| FleetError::NotFeasible("station has no charger kinds".into()))?
        };

        if !drone.try_transition(DroneState::Charging) {
            return Err(FleetError::IllegalTransition);
        }
        drone.position = self.vertex;
        self.charging.push(drone.id);
        if !self.has_spare_capacity() {
            self.try_transition(StationState::Occupied);
        }
        Ok(effective_kind)
    }

    /// Complete a charging session, delivering `theoretical_pct` battery
    /// scaled by this station's efficiency and the connector kind's
    /// efficiency, and return the drone to `Available`.
    pub fn finish_charge(
        &mut self,
        drone: &mut Drone,
        theoretical_pct: f64,
        kind_efficiency: f64,
    ) -> FleetResult<f64> {
        let pos = self.charging.iter().position(|&id| id == drone.id);
        let Some(pos) = pos else {
            return Err(FleetError::IllegalTransition);
        };
        self.charging.swap_remove(pos);

        let delivered_pct = theoretical_pct * self.efficiency * kind_efficiency;
        drone.battery = (drone.battery + delivered_pct * drone.capacity / 100.0).min(drone.capacity);
        self.totals.sessions += 1;
        self.totals.energy_delivered_pct += delivered_pct;

        if !drone.try_transition(DroneState::Available) {
            return Err(FleetError::IllegalTransition);
        }
        if self.state == StationState::Occupied {
            self.try_transition(StationState::Available);
        }
        Ok(delivered_pct)
    }
}
