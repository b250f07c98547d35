//! Route Frequency Index (C9).
//!
//! Wraps [`AvlTree`] with route-specific conveniences: id generation,
//! frequency increments, top-k-by-frequency queries, and lookup by
//! (origin, destination). The underlying tree stays balanced after every
//! mutation because every insert/delete goes through `AvlTree`'s rebalancing.

use drn_collections::{AvlTree, OrderedMap};
use drn_core::VertexId;

use crate::route::{route_id, RouteRecord};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsageStatistics {
    pub total_routes: usize,
    pub total_uses: u64,
    pub busiest: Option<String>,
    pub least_used: Option<String>,
    pub never_used: usize,
}

pub struct RouteRegistry {
    tree: AvlTree<String, RouteRecord>,
    by_od: OrderedMap<(VertexId, VertexId), Vec<String>>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
            by_od: OrderedMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Register a new path between `origin` and `destination`, generating a
    /// fresh route id from the next free index for this (origin,
    /// destination) pair. Returns the id of the inserted record.
    pub fn register_path(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        path: Vec<VertexId>,
        total_distance: f64,
    ) -> String {
        let key = (origin, destination);
        let index = self.by_od.get(&key).map(|ids| ids.len()).unwrap_or(0);
        let id = route_id(origin, destination, index);

        match self.by_od.get_mut(&key) {
            Ok(ids) => ids.push(id.clone()),
            Err(_) => {
                self.by_od.insert(key, vec![id.clone()]);
            }
        }

        let record = RouteRecord::new(id.clone(), origin, destination, path, total_distance);
        self.tree.insert(id.clone(), record);
        id
    }

    /// Increment `id`'s usage frequency by `by`. A missing id is localized to
    /// this operation — it returns `false` and never panics or aborts.
    pub fn increment_frequency(&mut self, id: &str, by: u64) -> bool {
        match self.tree.get_mut(&id.to_string()) {
            Some(record) => {
                record.frequency += by;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&RouteRecord> {
        self.tree.get(&id.to_string())
    }

    pub fn delete(&mut self, id: &str) -> Option<RouteRecord> {
        self.tree.delete(&id.to_string())
    }

    pub fn is_balanced(&self) -> bool {
        self.tree.is_balanced()
    }

    pub fn height(&self) -> i64 {
        self.tree.height()
    }

    /// All records for a given (origin, destination) pair, ordered by the
    /// index suffix in their generated id.
    pub fn query_by_od(&self, origin: VertexId, destination: VertexId) -> Vec<&RouteRecord> {
        let Ok(ids) = self.by_od.get(&(origin, destination)) else {
            return Vec::new();
        };
        ids.iter().filter_map(|id| self.tree.get(id)).collect()
    }

    /// The `k` most-frequently-used routes, descending by frequency.
    pub fn top_k(&self, k: usize) -> Vec<&RouteRecord> {
        let mut all: Vec<&RouteRecord> = self.tree.in_order().into_iter().map(|(_, v)| v).collect();
        all.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        all.truncate(k);
        all
    }

    pub fn usage_statistics(&self) -> UsageStatistics {
        let records: Vec<&RouteRecord> = self.tree.in_order().into_iter().map(|(_, v)| v).collect();
        let total_uses = records.iter().map(|r| r.frequency).sum();
        let busiest = records
            .iter()
            .max_by_key(|r| r.frequency)
            .map(|r| r.id.clone());
        let least_used = records
            .iter()
            .min_by_key(|r| r.frequency)
            .map(|r| r.id.clone());
        let never_used = records.iter().filter(|r| r.frequency == 0).count();
        UsageStatistics {
            total_routes: records.len(),
            total_uses,
            busiest,
            least_used,
            never_used,
        }
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
