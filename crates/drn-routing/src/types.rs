//! Shared result and strategy types for every search mode.

use drn_core::VertexId;

/// A charging stop recorded along a battery-aware path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChargingStop {
    /// Index of the stop within the path (0 = origin).
    pub position: usize,
    pub vertex: VertexId,
    pub name: String,
}

/// Strategy used by Mode C to pick among multiple candidate solutions that
/// all reach the destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStrategy {
    ShortestDistance,
    MinConsumption,
    FewestRefuels,
    MinTime,
}

/// Uniform result shape every search mode returns.
///
/// Failures retain `message` and zero every numeric field; the `success`
/// flag — not an error return — distinguishes "no route" from "found a
/// route", per the engine's non-abrupt failure policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteOutcome {
    pub success: bool,
    pub path: Vec<VertexId>,
    pub refuels: Vec<ChargingStop>,
    pub total_distance: f64,
    pub total_battery: f64,
    pub time_est: f64,
    pub refuel_count: usize,
    pub message: String,
    pub nodes_explored: usize,
    /// Wall-clock search duration. The core never calls into a system clock
    /// (see the crate's timestamp policy); this is left at 0.0 unless the
    /// caller measures the call externally and fills it in.
    pub search_time: f64,
}

impl RouteOutcome {
    pub fn failure(message: impl Into<String>, nodes_explored: usize) -> Self {
        Self {
            success: false,
            path: Vec::new(),
            refuels: Vec::new(),
            total_distance: 0.0,
            total_battery: 0.0,
            time_est: 0.0,
            refuel_count: 0,
            message: message.into(),
            nodes_explored,
            search_time: 0.0,
        }
    }

    pub fn trivial(vertex: VertexId) -> Self {
        Self {
            success: true,
            path: vec![vertex],
            refuels: Vec::new(),
            total_distance: 0.0,
            total_battery: 0.0,
            time_est: 0.0,
            refuel_count: 0,
            message: "start equals end".into(),
            nodes_explored: 1,
            search_time: 0.0,
        }
    }
}
