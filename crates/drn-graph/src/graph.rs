//! Undirected weighted graph model (C4).
//!
//! Vertices live in a dense `Vec<Vertex>` indexed by [`VertexId`]; edges live
//! in an insertion-ordered `Vec<Edge>`. A `(VertexId, VertexId) -> EdgeIndex`
//! lookup map (an `OrderedMap` instantiation) gives O(1) duplicate detection
//! and pair lookup, and a per-vertex adjacency list gives O(1) incident-edge
//! iteration. This mirrors the teacher's CSR-plus-index layout but stays
//! mutable after construction, since generation interleaves a spanning pass
//! with a densification pass and callers may attach attributes afterwards.

use std::collections::VecDeque;

use drn_core::{AttrBag, Role, VertexId};
use drn_collections::OrderedMap;

use crate::error::{GraphError, GraphResult};

/// Whether an edge was placed by the generator's spanning-tree pass or its
/// densification pass. Purely informational.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeTag {
    Spanning,
    Extra,
}

#[derive(Clone, Debug)]
pub struct Vertex {
    pub id: VertexId,
    pub role: Role,
    pub name: String,
    pub attrs: AttrBag,
}

#[derive(Clone, Debug)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub tag: EdgeTag,
    pub attrs: AttrBag,
}

impl Edge {
    /// The endpoint that isn't `v`. Panics if `v` isn't one of the endpoints.
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.from == v {
            self.to
        } else if self.to == v {
            self.from
        } else {
            panic!("vertex {v} is not an endpoint of this edge");
        }
    }
}

fn canonical_pair(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    edge_lookup: OrderedMap<(VertexId, VertexId), usize>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            edge_lookup: OrderedMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Append a vertex with a densely-assigned id (the next free index).
    pub fn add_vertex(&mut self, role: Role, name: impl Into<String>) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex {
            id,
            role,
            name: name.into(),
            attrs: AttrBag::new(),
        });
        self.adjacency.push(Vec::new());
        id
    }

    /// Insert an undirected edge between `a` and `b`. Duplicate unordered
    /// pairs are rejected by returning the existing edge's index unchanged
    /// (the weight/tag of the new call are discarded) — a no-op is simpler
    /// for callers to reason about than a hard error here, consistent with
    /// I2 (no duplicate unordered edge pair).
    pub fn add_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: f64,
        tag: EdgeTag,
    ) -> GraphResult<usize> {
        self.vertex(a)?;
        self.vertex(b)?;
        let key = canonical_pair(a, b);
        if let Ok(&existing) = self.edge_lookup.get(&key) {
            return Ok(existing);
        }
        let idx = self.edges.len();
        self.edges.push(Edge {
            from: a,
            to: b,
            weight,
            tag,
            attrs: AttrBag::new(),
        });
        self.edge_lookup.insert(key, idx);
        self.adjacency[a.index()].push(idx);
        if a != b {
            self.adjacency[b.index()].push(idx);
        }
        Ok(idx)
    }

    pub fn vertex(&self, id: VertexId) -> GraphResult<&Vertex> {
        self.vertices.get(id.index()).ok_or(GraphError::VertexNotFound)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex> {
        self.vertices
            .get_mut(id.index())
            .ok_or(GraphError::VertexNotFound)
    }

    pub fn edge(&self, idx: usize) -> Option<&Edge> {
        self.edges.get(idx)
    }

    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<usize> {
        self.edge_lookup.get(&canonical_pair(a, b)).ok().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Edges incident to `v`, in insertion order.
    pub fn incident_edges(&self, v: VertexId) -> GraphResult<impl Iterator<Item = &Edge> + '_> {
        self.vertex(v)?;
        Ok(self.adjacency[v.index()].iter().map(|&i| &self.edges[i]))
    }

    pub fn degree(&self, v: VertexId) -> GraphResult<usize> {
        self.vertex(v)?;
        Ok(self.adjacency[v.index()].len())
    }

    pub fn neighbors(&self, v: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        self.vertex(v)?;
        Ok(self.adjacency[v.index()]
            .iter()
            .map(move |&i| self.edges[i].other(v)))
    }

    pub fn vertices_by_role(&self, role: Role) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter().filter(move |v| v.role == role)
    }

    /// `true` iff every vertex is reachable from vertex 0 (vacuously true for
    /// an empty or single-vertex graph).
    pub fn is_connected(&self) -> bool {
        if self.vertices.is_empty() {
            return true;
        }
        let mut seen = vec![false; self.vertices.len()];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back(VertexId(0));
        let mut visited = 1;
        while let Some(v) = queue.pop_front() {
            for &edge_idx in &self.adjacency[v.index()] {
                let u = self.edges[edge_idx].other(v);
                if !seen[u.index()] {
                    seen[u.index()] = true;
                    visited += 1;
                    queue.push_back(u);
                }
            }
        }
        visited == self.vertices.len()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
