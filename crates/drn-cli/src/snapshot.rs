//! JSON snapshot types.
//!
//! These describe the wire shape a caller can serialize a run into; nothing
//! in `drn-core`/`drn-graph`/... reads this format back. Mirrors the
//! teacher's `dt-output::row` types, which describe an output shape without
//! the writer crate owning simulation state.

use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    Pendiente,
    #[serde(rename = "En Progreso")]
    EnProgreso,
    Entregado,
    Cancelado,
}

impl OrderStatus {
    /// Pendiente/En Progreso -> Entregado. No-op (returns false) from a
    /// terminal state.
    pub fn complete(&mut self) -> bool {
        match self {
            OrderStatus::Pendiente | OrderStatus::EnProgreso => {
                *self = OrderStatus::Entregado;
                true
            }
            OrderStatus::Entregado | OrderStatus::Cancelado => false,
        }
    }

    /// Pendiente/En Progreso -> Cancelado. No-op (returns false) from a
    /// terminal state.
    pub fn cancel(&mut self) -> bool {
        match self {
            OrderStatus::Pendiente | OrderStatus::EnProgreso => {
                *self = OrderStatus::Cancelado;
                true
            }
            OrderStatus::Entregado | OrderStatus::Cancelado => false,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ClientRecord {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub order_count: usize,
    pub node_id: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct OrderRecord {
    pub id: u32,
    pub client_id: u32,
    pub origin: u32,
    pub destination: u32,
    pub status: OrderStatus,
    pub priority: u8,
    pub created_at: String,
    pub delivered_at: Option<String>,
    pub total_cost: f64,
    pub route: Vec<u32>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct VisitStatEntry {
    pub name: String,
    pub visits: u64,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct VisitStatistics {
    pub clients: Vec<VisitStatEntry>,
    pub recharges: Vec<VisitStatEntry>,
    pub storages: Vec<VisitStatEntry>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ConfigTotals {
    pub num_nodes: usize,
    pub prob_edge: f64,
    pub seed: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub order_count: usize,
    pub most_visited_client: Option<String>,
    pub most_visited_recharge: Option<String>,
    pub most_visited_storage: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub is_active: bool,
    pub initialized_at: String,
    pub last_updated: String,
    pub config: ConfigTotals,
    pub clients: Vec<ClientRecord>,
    pub orders: Vec<OrderRecord>,
    pub visit_statistics: VisitStatistics,
    pub summary: Summary,
}
