//! Pluggable search trait.
//!
//! Mirrors the teacher's `dt-spatial::router::Router`: callers drive routing
//! through this trait so `drn-fleet`/`drn-cli` never depend on a concrete
//! search implementation. Mode A and Mode C are substitutable via `search`;
//! Mode B is the provided default for `route_with_battery` since it is the
//! canonical battery-aware optimum and most callers have no reason to
//! override it.

use drn_core::VertexId;
use drn_graph::graph::Graph;

use crate::error::RoutingResult;
use crate::mode_a;
use crate::mode_b;
use crate::mode_c::{self, BfsOptions};
use crate::types::{RouteOutcome, SearchStrategy};

pub trait Router: Send + Sync {
    /// Plain or coarse search, depending on the implementor (Mode A or C).
    fn search(&self, graph: &Graph, start: VertexId, end: VertexId) -> RoutingResult<RouteOutcome>;

    /// Canonical battery-aware optimum search (Mode B by default).
    fn route_with_battery(
        &self,
        graph: &Graph,
        start: VertexId,
        end: VertexId,
        battery_capacity: f64,
        initial_battery: f64,
    ) -> RoutingResult<RouteOutcome> {
        mode_b::shortest_battery_aware(graph, start, end, battery_capacity, initial_battery)
    }
}

/// Mode A: classical uniform-cost search, ignoring battery entirely.
pub struct PlainDijkstra;

impl Router for PlainDijkstra {
    fn search(&self, graph: &Graph, start: VertexId, end: VertexId) -> RoutingResult<RouteOutcome> {
        mode_a::shortest(graph, start, end)
    }
}

/// Mode C: multi-strategy battery-aware BFS, used when latency matters more
/// than finding the true optimum.
pub struct StrategicBfs {
    pub strategy: SearchStrategy,
    pub options: BfsOptions,
    pub battery_capacity: f64,
    pub initial_battery: f64,
}

impl Router for StrategicBfs {
    fn search(&self, graph: &Graph, start: VertexId, end: VertexId) -> RoutingResult<RouteOutcome> {
        mode_c::search(
            graph,
            start,
            end,
            self.battery_capacity,
            self.initial_battery,
            self.strategy,
            &self.options,
        )
    }
}
