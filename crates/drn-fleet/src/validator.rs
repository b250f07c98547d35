//! Battery Route Validator (C7).
//!
//! Simulates a candidate path segment by segment under a drone's battery
//! capacity, consumption rate, and a safety margin, optionally searching for
//! a nearby charging station to refuel at when a segment would otherwise
//! breach the margin.

use drn_core::{Role, VertexId};
use drn_graph::graph::Graph;

use crate::error::FleetResult;

/// Tunables for C7. The default margin (0.15) is intentionally different
/// from Mode C's preemptive-refuel margin (0.10) — the spec keeps the two
/// separate rather than unifying them (see the workspace's open-question
/// notes).
#[derive(Copy, Clone, Debug)]
pub struct ValidationOptions {
    pub safety_margin: f64,
    pub search_radius: f64,
    pub allow_refuels: bool,
    pub autonomy_km: f64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            safety_margin: 0.15,
            search_radius: 50.0,
            allow_refuels: true,
            autonomy_km: 500.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RequiredRefuel {
    pub segment_index: usize,
    pub vertex: VertexId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidationResult {
    pub feasible: bool,
    pub final_battery: f64,
    pub critical_segments: Vec<usize>,
    pub required_refuels: Vec<RequiredRefuel>,
    pub total_consumption: f64,
    pub total_distance: f64,
    pub total_time: f64,
    pub message: String,
}

fn nearest_charging_station(graph: &Graph, from: VertexId, search_radius: f64) -> Option<VertexId> {
    graph
        .incident_edges(from)
        .ok()?
        .filter(|e| e.weight <= search_radius)
        .filter_map(|e| {
            let other = e.other(from);
            graph
                .vertex(other)
                .ok()
                .filter(|v| v.role == Role::Charging)
                .map(|_| (e.weight, other))
        })
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, v)| v)
}

/// Validate `path` for a drone with `battery_capacity`, starting at
/// `initial_battery`, under `options`.
pub fn validate(
    graph: &Graph,
    path: &[VertexId],
    battery_capacity: f64,
    initial_battery: f64,
    options: &ValidationOptions,
) -> FleetResult<ValidationResult> {
    let margin = options.safety_margin * battery_capacity;
    let mut battery = initial_battery;
    let mut total_distance = 0.0;
    let mut total_consumption = 0.0;
    let mut total_time = 0.0;
    let mut critical_segments = Vec::new();
    let mut required_refuels = Vec::new();

    for (i, window) in path.windows(2).enumerate() {
        let (from, to) = (window[0], window[1]);
        let Some(edge_idx) = graph.find_edge(from, to) else {
            return Ok(ValidationResult {
                feasible: false,
                final_battery: battery,
                critical_segments,
                required_refuels,
                total_consumption,
                total_distance,
                total_time,
                message: format!("segment {i}: no edge between {from} and {to}"),
            });
        };
        let edge = graph.edge(edge_idx).expect("index came from find_edge");
        let distance = edge.weight;
        let consumption = distance * (battery_capacity / options.autonomy_km);
        let mut remaining = battery - consumption;

        if remaining < margin {
            if !options.allow_refuels {
                return Ok(ValidationResult {
                    feasible: false,
                    final_battery: battery,
                    critical_segments,
                    required_refuels,
                    total_consumption,
                    total_distance,
                    total_time,
                    message: format!("segment {i}: battery would drop below the safety margin"),
                });
            }
            match nearest_charging_station(graph, from, options.search_radius) {
                Some(station) => {
                    battery = battery_capacity;
                    total_time += 0.5;
                    required_refuels.push(RequiredRefuel {
                        segment_index: i,
                        vertex: station,
                    });
                    remaining = battery - consumption;
                    if remaining < margin {
                        return Ok(ValidationResult {
                            feasible: false,
                            final_battery: battery,
                            critical_segments,
                            required_refuels,
                            total_consumption,
                            total_distance,
                            total_time,
                            message: format!(
                                "segment {i}: infeasible even after refueling at {station}"
                            ),
                        });
                    }
                }
                None => {
                    return Ok(ValidationResult {
                        feasible: false,
                        final_battery: battery,
                        critical_segments,
                        required_refuels,
                        total_consumption,
                        total_distance,
                        total_time,
                        message: format!(
                            "segment {i}: no charging station within {} of {from}",
                            options.search_radius
                        ),
                    });
                }
            }
        }

        battery = remaining;
        total_distance += distance;
        total_consumption += consumption;
        total_time += distance;

        let arriving_charging = graph
            .vertex(to)
            .map(|v| v.role == Role::Charging)
            .unwrap_or(false);
        if arriving_charging && battery < 0.80 * battery_capacity {
            battery = battery_capacity;
            required_refuels.push(RequiredRefuel {
                segment_index: i,
                vertex: to,
            });
        }

        if battery < margin + 0.10 * battery_capacity {
            critical_segments.push(i);
        }
    }

    Ok(ValidationResult {
        feasible: true,
        final_battery: battery,
        critical_segments,
        required_refuels,
        total_consumption,
        total_distance,
        total_time,
        message: "path is battery-feasible".into(),
    })
}
