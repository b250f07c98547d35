//! drn-cli — wires graph generation, config validation, routing, and fleet
//! state into a single demo run, emitting a JSON snapshot.
//!
//! Generates a synthetic 12-node delivery network, validates the run
//! configuration, routes one order per client against the network's
//! storage vertex, and prints a snapshot document to stdout. Scale comment:
//! swap NUM_NODES and the quota split for a production-sized network; the
//! routing and registry calls are unchanged either way.

mod snapshot;

use std::process::ExitCode;

use anyhow::{Context, Result};

use drn_config::{validate, ConfigMap};
use drn_core::{Role, VertexId};
use drn_graph::generator::{self, RoleQuotas};
use drn_registry::{RouteRegistry, VisitCounters};
use drn_routing::{PlainDijkstra, Router};

use snapshot::{
    ClientRecord, ConfigTotals, OrderRecord, OrderStatus, Snapshot, Summary, VisitStatEntry,
    VisitStatistics,
};

const NUM_NODES: usize = 12;
const PROB_EDGE: f64 = 0.25;
const SEED: u64 = 303;
const ORDERS_PER_CLIENT: usize = 2;

fn build_config() -> ConfigMap {
    let mut config = ConfigMap::new();
    config.set("num_nodes", NUM_NODES as f64);
    config.set("prob_edge", PROB_EDGE);
    config.set("seed", SEED as f64);
    config.set("pct_storage", 20.0);
    config.set("pct_charging", 10.0);
    config.set("pct_client", 70.0);
    config.set("clients_per_node", 2.0);
    config.set("orders_per_client", ORDERS_PER_CLIENT as f64);
    config.set("drone_battery", 1000.0);
    config.set("drone_consumption", 2.0);
    config.set("station_capacity", 4.0);
    config.set("recharge_cost", 10.0);
    config.set("max_route_distance", 500.0);
    config.set("battery_margin", 15.0);
    config
}

fn run() -> Result<Snapshot> {
    println!("=== drn-cli — drone delivery routing demo ===");
    println!("Nodes: {NUM_NODES}  |  Edge probability: {PROB_EDGE}  |  Seed: {SEED}");
    println!();

    // 1. Validate the run configuration before touching the engine.
    let config = build_config();
    let report = validate(&config);
    for warning in &report.warnings {
        println!("warning[{}]: {}", warning.option, warning.message);
    }
    if !report.valid {
        for error in &report.errors {
            eprintln!("error[{}]: {}", error.option, error.message);
        }
        anyhow::bail!("configuration failed validation with {} critical error(s)", report.errors.len());
    }
    println!("Configuration valid ({} info note(s)).", report.infos.len());

    // 2. Generate the delivery network.
    let quotas = RoleQuotas::Fractions {
        storage: 0.20,
        charging: 0.10,
        client: 0.70,
    };
    let graph = generator::generate(NUM_NODES, PROB_EDGE, quotas, SEED)
        .context("graph generation failed")?;
    println!(
        "Network: {} vertices, {} edges, connected = {}",
        graph.vertex_count(),
        graph.edge_count(),
        graph.is_connected()
    );

    let storage_vertex = graph
        .vertices_by_role(Role::Storage)
        .next()
        .map(|v| v.id)
        .context("generated network has no storage vertex")?;

    // 3. Build clients and orders, one storage -> client route per order.
    let router = PlainDijkstra;
    let mut registry = RouteRegistry::new();
    let mut visits = VisitCounters::new();

    let mut clients = Vec::new();
    let mut orders = Vec::new();
    let mut next_order_id: u32 = 0;

    for (client_idx, vertex) in graph.vertices_by_role(Role::Client).enumerate() {
        clients.push(ClientRecord {
            id: client_idx as u32,
            name: vertex.name.clone(),
            kind: "standard".to_string(),
            order_count: ORDERS_PER_CLIENT,
            node_id: vertex.id.index() as u32,
        });

        for _ in 0..ORDERS_PER_CLIENT {
            let outcome = router.search(&graph, storage_vertex, vertex.id)?;
            let mut status = if outcome.success {
                OrderStatus::Pendiente
            } else {
                OrderStatus::Cancelado
            };

            if outcome.success {
                visits.record_path(&outcome.path);
                registry.register_path(storage_vertex, vertex.id, outcome.path.clone(), outcome.total_distance);
                status.complete();
            }

            orders.push(OrderRecord {
                id: next_order_id,
                client_id: client_idx as u32,
                origin: storage_vertex.index() as u32,
                destination: vertex.id.index() as u32,
                status,
                priority: 1,
                created_at: "1970-01-01T00:00:00Z".to_string(),
                delivered_at: None,
                total_cost: outcome.total_distance,
                route: outcome.path.iter().map(|v: &VertexId| v.index() as u32).collect(),
            });
            next_order_id += 1;
        }
    }

    println!(
        "Routed {} order(s) across {} client(s); registry holds {} route record(s).",
        orders.len(),
        clients.len(),
        registry.len()
    );
    debug_assert!(registry.is_balanced());

    // 4. Visit-statistics top-k per role.
    let top_clients = visits.top_k_by_role(&graph, Role::Client, 5);
    let top_recharges = visits.top_k_by_role(&graph, Role::Charging, 5);
    let top_storages = visits.top_k_by_role(&graph, Role::Storage, 5);

    let entry = |v: VertexId, n: u64| VisitStatEntry {
        name: graph.vertex(v).map(|vx| vx.name.clone()).unwrap_or_default(),
        visits: n,
    };

    let visit_statistics = VisitStatistics {
        clients: top_clients.iter().map(|&(v, n)| entry(v, n)).collect(),
        recharges: top_recharges.iter().map(|&(v, n)| entry(v, n)).collect(),
        storages: top_storages.iter().map(|&(v, n)| entry(v, n)).collect(),
    };

    let summary = Summary {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        order_count: orders.len(),
        most_visited_client: visit_statistics.clients.first().map(|e| e.name.clone()),
        most_visited_recharge: visit_statistics.recharges.first().map(|e| e.name.clone()),
        most_visited_storage: visit_statistics.storages.first().map(|e| e.name.clone()),
    };

    Ok(Snapshot {
        is_active: true,
        initialized_at: "1970-01-01T00:00:00Z".to_string(),
        last_updated: "1970-01-01T00:00:00Z".to_string(),
        config: ConfigTotals {
            num_nodes: NUM_NODES,
            prob_edge: PROB_EDGE,
            seed: SEED,
        },
        clients,
        orders,
        visit_statistics,
        summary,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run() {
        Ok(snapshot) => match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => {
                println!();
                println!("{json}");
                ExitCode::from(0)
            }
            Err(e) => {
                eprintln!("failed to serialize snapshot: {e}");
                ExitCode::from(1)
            }
        },
        Err(e) => {
            eprintln!("drn-cli failed: {e:#}");
            ExitCode::from(1)
        }
    }
}
