//! Route records and id generation.

use drn_core::{AttrBag, VertexId};

/// Format: `ruta_<origin>_<destination>` if `index` is 0, else
/// `ruta_<origin>_<destination>_<index>`.
pub fn route_id(origin: VertexId, destination: VertexId, index: usize) -> String {
    if index == 0 {
        format!("ruta_{}_{}", origin.index(), destination.index())
    } else {
        format!("ruta_{}_{}_{}", origin.index(), destination.index(), index)
    }
}

#[derive(Clone, Debug)]
pub struct RouteRecord {
    pub id: String,
    pub origin: VertexId,
    pub destination: VertexId,
    pub path: Vec<VertexId>,
    pub total_distance: f64,
    pub frequency: u64,
    pub last_used: u64,
    pub avg_traversal_time: f64,
    pub attrs: AttrBag,
}

impl RouteRecord {
    pub fn new(
        id: String,
        origin: VertexId,
        destination: VertexId,
        path: Vec<VertexId>,
        total_distance: f64,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            path,
            total_distance,
            frequency: 1,
            last_used: 0,
            avg_traversal_time: total_distance,
            attrs: AttrBag::new(),
        }
    }
}
