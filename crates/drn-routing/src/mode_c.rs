//! Mode C: multi-strategy battery-aware breadth-first search.
//!
//! A coarser alternative to Mode B for callers that value latency over
//! finding the true optimum. Explores the same battery/vertex state space
//! with a FIFO queue instead of a priority queue, adds preemptive-refuel
//! logic, and picks a winner among every candidate solution reaching the
//! destination according to a caller-selected strategy.

use std::collections::VecDeque;

use drn_core::{Role, VertexId};
use drn_graph::graph::Graph;

use crate::error::RoutingResult;
use crate::types::{ChargingStop, RouteOutcome, SearchStrategy};

/// Tunables for Mode C. Defaults match the spec's stated defaults.
#[derive(Copy, Clone, Debug)]
pub struct BfsOptions {
    /// Fraction of `battery_capacity` below which a preemptive refuel is
    /// taken if the current vertex is a charging station. Default 0.10.
    pub safety_margin: f64,
    /// Total states dequeued before giving up. Default 10_000.
    pub max_explored_nodes: usize,
    /// Vertices per candidate path before that branch is abandoned. Default 20.
    pub max_path_vertices: usize,
}

impl Default for BfsOptions {
    fn default() -> Self {
        Self {
            safety_margin: 0.10,
            max_explored_nodes: 10_000,
            max_path_vertices: 20,
        }
    }
}

#[derive(Clone)]
struct BfsState {
    vertex: VertexId,
    battery: f64,
    distance: f64,
    time: f64,
    refuel_count: usize,
    path: Vec<VertexId>,
    refuels: Vec<ChargingStop>,
}

fn is_charging(graph: &Graph, v: VertexId) -> bool {
    graph.vertex(v).map(|vx| vx.role == Role::Charging).unwrap_or(false)
}

pub fn search(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    battery_capacity: f64,
    initial_battery: f64,
    strategy: SearchStrategy,
    options: &BfsOptions,
) -> RoutingResult<RouteOutcome> {
    if graph.vertex(start).is_err() || graph.vertex(end).is_err() {
        return Ok(RouteOutcome::failure(
            "start or end vertex not present in the graph",
            0,
        ));
    }

    if initial_battery < options.safety_margin * battery_capacity {
        return Ok(RouteOutcome::failure(
            format!(
                "initial battery {initial_battery} is below the {:.0}% safety margin",
                options.safety_margin * 100.0
            ),
            0,
        ));
    }
    if start == end {
        return Ok(RouteOutcome::trivial(start));
    }

    let mut queue = VecDeque::new();
    queue.push_back(BfsState {
        vertex: start,
        battery: initial_battery,
        distance: 0.0,
        time: 0.0,
        refuel_count: 0,
        path: vec![start],
        refuels: Vec::new(),
    });

    let mut nodes_explored = 0usize;
    let mut candidates: Vec<BfsState> = Vec::new();

    while let Some(state) = queue.pop_front() {
        if nodes_explored >= options.max_explored_nodes {
            break;
        }
        nodes_explored += 1;

        if state.vertex == end {
            candidates.push(state);
            continue;
        }
        if state.path.len() >= options.max_path_vertices {
            continue;
        }

        for edge in graph.incident_edges(state.vertex)? {
            let u = edge.other(state.vertex);

            let mut battery = state.battery;
            let mut refuel_count = state.refuel_count;
            let mut time = state.time;
            let mut refuels = state.refuels.clone();

            let would_breach = battery - edge.weight < options.safety_margin * battery_capacity;
            if would_breach && battery < battery_capacity && is_charging(graph, state.vertex) {
                battery = battery_capacity;
                refuel_count += 1;
                time += 0.5;
                let name = graph
                    .vertex(state.vertex)
                    .map(|v| v.name.clone())
                    .unwrap_or_default();
                refuels.push(ChargingStop {
                    position: state.path.len() - 1,
                    vertex: state.vertex,
                    name,
                });
            }

            let mut next_battery = battery - edge.weight;
            if is_charging(graph, u) {
                next_battery = battery_capacity;
            } else if next_battery < 0.0 {
                continue;
            }

            let mut path = state.path.clone();
            path.push(u);

            queue.push_back(BfsState {
                vertex: u,
                battery: next_battery,
                distance: state.distance + edge.weight,
                time: time + edge.weight,
                refuel_count,
                path,
                refuels,
            });
        }
    }

    if candidates.is_empty() {
        return Ok(RouteOutcome::failure(
            format!("no path from {start} to {end} within the explored-node cap"),
            nodes_explored,
        ));
    }

    let consumption = |c: &BfsState| {
        initial_battery + (c.refuel_count as f64) * battery_capacity - c.battery
    };
    let primary_key = |c: &BfsState| match strategy {
        SearchStrategy::ShortestDistance => c.distance,
        SearchStrategy::MinConsumption => consumption(c),
        SearchStrategy::FewestRefuels => c.refuel_count as f64,
        SearchStrategy::MinTime => c.time,
    };

    let winner = candidates
        .iter()
        .min_by(|a, b| {
            primary_key(a)
                .partial_cmp(&primary_key(b))
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal))
        })
        .expect("candidates is non-empty");

    Ok(RouteOutcome {
        success: true,
        path: winner.path.clone(),
        refuel_count: winner.refuel_count,
        refuels: winner.refuels.clone(),
        total_distance: winner.distance,
        total_battery: consumption(winner),
        time_est: winner.time,
        message: format!("{} candidate(s) explored, winner by {:?}", candidates.len(), strategy),
        nodes_explored,
        search_time: 0.0,
    })
}
