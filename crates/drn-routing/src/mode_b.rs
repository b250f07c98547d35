//! Mode B: battery-aware optimum search.
//!
//! Not classical Dijkstra, because the "battery" dimension can *increase* at
//! charging vertices. Distance stays monotone, so a priority queue ordered on
//! cumulative distance remains correct; states are deduplicated on
//! `(vertex, battery-bucket)` rather than `(vertex)` alone, admitting only
//! finitely many distinct states per vertex. States with worse distance but a
//! higher, differently-bucketed battery are never pruned against each other.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use drn_core::{Role, VertexId};
use drn_graph::graph::Graph;

use crate::error::RoutingResult;
use crate::types::{ChargingStop, RouteOutcome};

const BUCKET_WIDTH_FRACTION: f64 = 1.0 / 100.0;

/// Fraction of `battery_capacity` below which the starting battery is
/// rejected outright, mirroring Mode C's default preemptive-refuel margin.
const SAFETY_MARGIN_FRACTION: f64 = 0.10;

fn bucket(battery: f64, battery_capacity: f64) -> i64 {
    let width = battery_capacity * BUCKET_WIDTH_FRACTION;
    (battery / width).floor() as i64
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
struct StateKey {
    vertex: VertexId,
    bucket: i64,
}

struct HeapItem {
    dist: f64,
    seq: u64,
    vertex: VertexId,
    battery: f64,
    bucket: i64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.seq == other.seq
    }
}
impl Eq for HeapItem {}
impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist
            .partial_cmp(&other.dist)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Battery-aware optimum search from `start` to `end`.
///
/// `battery_capacity` is `B_max`; `initial_battery` is the drone's battery
/// at `start`, in the same units.
pub fn shortest_battery_aware(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    battery_capacity: f64,
    initial_battery: f64,
) -> RoutingResult<RouteOutcome> {
    if graph.vertex(start).is_err() || graph.vertex(end).is_err() {
        return Ok(RouteOutcome::failure(
            "start or end vertex not present in the graph",
            0,
        ));
    }

    if start == end {
        return Ok(RouteOutcome::trivial(start));
    }
    if initial_battery < 0.0 || initial_battery > battery_capacity {
        return Ok(RouteOutcome::failure(
            format!("initial battery {initial_battery} is outside [0, {battery_capacity}]"),
            0,
        ));
    }
    if initial_battery < SAFETY_MARGIN_FRACTION * battery_capacity {
        return Ok(RouteOutcome::failure(
            format!(
                "initial battery {initial_battery} is below the {:.0}% safety margin",
                SAFETY_MARGIN_FRACTION * 100.0
            ),
            0,
        ));
    }

    let charging: Vec<bool> = graph
        .vertices()
        .map(|v| v.role == Role::Charging)
        .collect();

    let start_key = StateKey {
        vertex: start,
        bucket: bucket(initial_battery, battery_capacity),
    };
    let mut best_dist: HashMap<StateKey, f64> = HashMap::new();
    let mut predecessor: HashMap<StateKey, (StateKey, VertexId, f64)> = HashMap::new();
    let mut battery_of: HashMap<StateKey, f64> = HashMap::new();

    best_dist.insert(start_key, 0.0);
    battery_of.insert(start_key, initial_battery);

    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;
    heap.push(Reverse(HeapItem {
        dist: 0.0,
        seq,
        vertex: start,
        battery: initial_battery,
        bucket: start_key.bucket,
    }));
    seq += 1;

    let mut nodes_explored = 0usize;
    let mut goal_key = None;

    while let Some(Reverse(item)) = heap.pop() {
        let key = StateKey {
            vertex: item.vertex,
            bucket: item.bucket,
        };
        if item.dist > *best_dist.get(&key).unwrap_or(&f64::INFINITY) {
            continue;
        }
        nodes_explored += 1;

        if item.vertex == end {
            goal_key = Some(key);
            break;
        }

        for edge in graph.incident_edges(item.vertex)? {
            let u = edge.other(item.vertex);
            let mut next_battery = item.battery - edge.weight;
            if charging[u.index()] {
                next_battery = battery_capacity;
            } else if next_battery < 0.0 {
                continue;
            }
            let next_key = StateKey {
                vertex: u,
                bucket: bucket(next_battery, battery_capacity),
            };
            let next_dist = item.dist + edge.weight;
            let improves = next_dist < *best_dist.get(&next_key).unwrap_or(&f64::INFINITY);
            if improves {
                best_dist.insert(next_key, next_dist);
                battery_of.insert(next_key, next_battery);
                predecessor.insert(next_key, (key, item.vertex, next_battery));
                heap.push(Reverse(HeapItem {
                    dist: next_dist,
                    seq,
                    vertex: u,
                    battery: next_battery,
                    bucket: next_key.bucket,
                }));
                seq += 1;
            }
        }
    }

    let Some(goal_key) = goal_key else {
        return Ok(RouteOutcome::failure(
            format!("no reachable battery-feasible path from {start} to {end}"),
            nodes_explored,
        ));
    };

    // Walk predecessor states back to the start.
    let mut vertex_path = vec![goal_key.vertex];
    let mut cur = goal_key;
    while cur != start_key {
        match predecessor.get(&cur) {
            Some(&(prev_key, _from_vertex, _battery)) => {
                vertex_path.push(prev_key.vertex);
                cur = prev_key;
            }
            None => break,
        }
    }
    vertex_path.reverse();

    Ok(derive_path_info(
        graph,
        &vertex_path,
        battery_capacity,
        initial_battery,
        nodes_explored,
    ))
}

/// Re-simulate battery draw along an already-known path, resetting to full
/// at every charging vertex, and report peak draw / charging stops / the
/// validity flag. Separated from the search so Mode C can reuse it for
/// whatever path it settles on.
pub fn derive_path_info(
    graph: &Graph,
    path: &[VertexId],
    battery_capacity: f64,
    initial_battery: f64,
    nodes_explored: usize,
) -> RouteOutcome {
    let mut total_distance = 0.0;
    let mut battery = initial_battery;
    let mut peak_draw = 0.0f64;
    let mut segment_draw_since_refuel = 0.0f64;
    let mut refuels = Vec::new();
    let mut valid = true;

    for (i, window) in path.windows(2).enumerate() {
        let (a, b) = (window[0], window[1]);
        let Some(edge_idx) = graph.find_edge(a, b) else {
            valid = false;
            continue;
        };
        let edge = graph.edge(edge_idx).expect("looked-up edge index exists");
        total_distance += edge.weight;
        battery -= edge.weight;
        segment_draw_since_refuel += edge.weight;
        peak_draw = peak_draw.max(segment_draw_since_refuel);

        let vertex_is_charging = graph
            .vertex(b)
            .map(|v| v.role == Role::Charging)
            .unwrap_or(false);
        if vertex_is_charging {
            battery = battery_capacity;
            segment_draw_since_refuel = 0.0;
            let name = graph.vertex(b).map(|v| v.name.clone()).unwrap_or_default();
            refuels.push(ChargingStop {
                position: i + 1,
                vertex: b,
                name,
            });
        } else if battery < 0.0 {
            valid = false;
        }
    }

    if peak_draw > battery_capacity && refuels.is_empty() {
        valid = false;
    }

    RouteOutcome {
        success: valid,
        path: path.to_vec(),
        refuel_count: refuels.len(),
        refuels,
        total_distance,
        total_battery: peak_draw,
        time_est: total_distance,
        message: if valid {
            "battery-aware path found".into()
        } else {
            "path exceeds battery capacity without an intervening charge".into()
        },
        nodes_explored,
        search_time: 0.0,
    }
}
