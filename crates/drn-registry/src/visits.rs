//! Per-vertex Visit Statistics (C10).
//!
//! Integer counters incremented whenever a computed path traverses a vertex,
//! with top-k queries filterable by role.

use drn_collections::OrderedMap;
use drn_core::{Role, VertexId};
use drn_graph::graph::Graph;

pub struct VisitCounters {
    counts: OrderedMap<VertexId, u64>,
}

impl VisitCounters {
    pub fn new() -> Self {
        Self {
            counts: OrderedMap::new(),
        }
    }

    pub fn record_visit(&mut self, vertex: VertexId) {
        let current = self.counts.get(&vertex).copied().unwrap_or(0);
        self.counts.insert(vertex, current + 1);
    }

    /// Record a visit for every vertex in `path`, in order.
    pub fn record_path(&mut self, path: &[VertexId]) {
        for &v in path {
            self.record_visit(v);
        }
    }

    pub fn visits(&self, vertex: VertexId) -> u64 {
        self.counts.get(&vertex).copied().unwrap_or(0)
    }

    /// The `k` most-visited vertices of `role`, descending by visit count.
    /// Vertices with zero recorded visits are excluded.
    pub fn top_k_by_role(&self, graph: &Graph, role: Role, k: usize) -> Vec<(VertexId, u64)> {
        let mut counted: Vec<(VertexId, u64)> = graph
            .vertices_by_role(role)
            .filter_map(|v| {
                let count = self.visits(v.id);
                (count > 0).then_some((v.id, count))
            })
            .collect();
        counted.sort_by(|a, b| b.1.cmp(&a.1));
        counted.truncate(k);
        counted
    }
}

impl Default for VisitCounters {
    fn default() -> Self {
        Self::new()
    }
}
