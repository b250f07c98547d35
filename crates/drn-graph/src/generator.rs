//! Connected random-graph generator with role quotas (C5).
//!
//! Draws from a single [`GraphRng`] in the fixed order the determinism
//! guarantee depends on: role shuffle, then spanning-tree vertex choices,
//! then spanning-tree edge weights, then densification Bernoulli draws, then
//! densification edge weights.

use drn_core::{CoreError, GraphRng, Role, VertexId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeTag, Graph};

const MIN_WEIGHT: f64 = 1.0;
const MAX_WEIGHT: f64 = 10.0;

/// Role composition for a generated graph: either exact counts or fractions
/// of the vertex count summing to 1.0.
#[derive(Clone, Copy, Debug)]
pub enum RoleQuotas {
    Counts {
        storage: usize,
        charging: usize,
        client: usize,
    },
    Fractions {
        storage: f64,
        charging: f64,
        client: f64,
    },
}

fn round_weight(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}

/// Resolve `quotas` into exact per-role counts summing to `n`, per the
/// generator's quota-computation rule.
fn resolve_quotas(n: usize, quotas: RoleQuotas) -> GraphResult<(usize, usize, usize)> {
    let (mut storage, mut charging, client_fraction_hint) = match quotas {
        RoleQuotas::Counts {
            storage,
            charging,
            client,
        } => {
            if storage as i64 + charging as i64 + client as i64 == 0 {
                return Err(CoreError::InvalidQuotas("quotas sum to zero".into()).into());
            }
            return finalize_counts(n, storage, charging, client);
        }
        RoleQuotas::Fractions {
            storage,
            charging,
            client,
        } => {
            if storage < 0.0 || charging < 0.0 || client < 0.0 {
                return Err(CoreError::InvalidQuotas("negative quota fraction".into()).into());
            }
            let sum = storage + charging + client;
            if sum <= 0.0 {
                return Err(CoreError::InvalidQuotas("quotas sum to zero".into()).into());
            }
            if n == 1 {
                let winner = if storage >= charging && storage >= client {
                    Role::Storage
                } else if charging >= client {
                    Role::Charging
                } else {
                    Role::Client
                };
                return Ok(match winner {
                    Role::Storage => (1, 0, 0),
                    Role::Charging => (0, 1, 0),
                    Role::Client => (0, 0, 1),
                });
            }
            let s = (storage * n as f64).round() as i64;
            let c = (charging * n as f64).round() as i64;
            (s.max(0) as usize, c.max(0) as usize, client)
        }
    };

    if n >= 2 {
        if storage == 0 {
            storage = 1;
        }
        if charging == 0 {
            charging = 1;
        }
    }
    let _ = client_fraction_hint;
    let client = n.saturating_sub(storage + charging);
    finalize_counts(n, storage, charging, client)
}

/// Shared tail of quota resolution: enforce storage/charging >= 1 when n >=
/// 2 by absorbing the deficit from the largest remaining quota, then let
/// client soak up whatever remains.
fn finalize_counts(
    n: usize,
    mut storage: usize,
    mut charging: usize,
    mut client: usize,
) -> GraphResult<(usize, usize, usize)> {
    if n == 1 {
        let total = storage + charging + client;
        if total == 0 {
            return Err(CoreError::InvalidQuotas("quotas sum to zero".into()).into());
        }
        return if storage >= charging && storage >= client {
            Ok((1, 0, 0))
        } else if charging >= client {
            Ok((0, 1, 0))
        } else {
            Ok((0, 0, 1))
        };
    }

    if n >= 2 {
        while storage == 0 {
            if charging > 1 {
                charging -= 1;
            } else if client > 0 {
                client -= 1;
            } else {
                break;
            }
            storage += 1;
        }
        while charging == 0 {
            if storage > 1 {
                storage -= 1;
            } else if client > 0 {
                client -= 1;
            } else {
                break;
            }
            charging += 1;
        }
    }

    let total = storage + charging + client;
    match total.cmp(&n) {
        std::cmp::Ordering::Equal => {}
        std::cmp::Ordering::Less => client += n - total,
        std::cmp::Ordering::Greater => {
            let excess = total - n;
            client = client.saturating_sub(excess);
            let remaining = storage + charging + client;
            if remaining > n {
                return Err(CoreError::InvalidQuotas(
                    "storage and charging quotas alone exceed node count".into(),
                )
                .into());
            }
        }
    }
    Ok((storage, charging, client))
}

/// Generate a connected graph of `n` vertices satisfying role quotas, edge
/// probability `p` for the densification pass, and the given seed.
pub fn generate(n: usize, p: f64, quotas: RoleQuotas, seed: u64) -> GraphResult<Graph> {
    if !(1..=1000).contains(&n) {
        return Err(CoreError::InvalidParameter(format!(
            "n must be in [1, 1000], got {n}"
        ))
        .into());
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(CoreError::InvalidParameter(format!(
            "edge probability must be in [0, 1], got {p}"
        ))
        .into());
    }

    let (n_storage, n_charging, n_client) = resolve_quotas(n, quotas)?;
    let mut rng = GraphRng::new(seed);

    // Role shuffle.
    let mut roles = Vec::with_capacity(n);
    roles.extend(std::iter::repeat(Role::Storage).take(n_storage));
    roles.extend(std::iter::repeat(Role::Charging).take(n_charging));
    roles.extend(std::iter::repeat(Role::Client).take(n_client));
    rng.shuffle(&mut roles);

    let mut graph = Graph::new();
    let mut counters = [0usize; 3];
    for role in roles {
        let counter = match role {
            Role::Storage => &mut counters[0],
            Role::Charging => &mut counters[1],
            Role::Client => &mut counters[2],
        };
        let name = format!("{}_{}", role.to_string(), counter);
        *counter += 1;
        graph.add_vertex(role, name);
    }

    // Spanning-tree pass: first choose all (v, u) pairs, then draw all
    // weights, preserving the fixed global draw order.
    let mut connected = vec![VertexId(0)];
    let mut remaining: Vec<VertexId> = (1..n as u32).map(VertexId).collect();
    let mut spanning_pairs = Vec::with_capacity(n.saturating_sub(1));
    while !remaining.is_empty() {
        let v = connected[rng.gen_index(connected.len())];
        let u_idx = rng.gen_index(remaining.len());
        let u = remaining.swap_remove(u_idx);
        spanning_pairs.push((v, u));
        connected.push(u);
    }
    let spanning_weights: Vec<f64> = spanning_pairs
        .iter()
        .map(|_| round_weight(rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT)))
        .collect();
    for ((v, u), w) in spanning_pairs.into_iter().zip(spanning_weights) {
        graph.add_edge(v, u, w, EdgeTag::Spanning)?;
    }

    // Densification pass: Bernoulli draws over every still-missing pair in a
    // fixed (i, j) order, then weights for the accepted pairs.
    let mut candidates = Vec::new();
    for i in 0..n as u32 {
        for j in (i + 1)..n as u32 {
            let (a, b) = (VertexId(i), VertexId(j));
            if graph.find_edge(a, b).is_none() {
                candidates.push((a, b));
            }
        }
    }
    let accepted: Vec<(VertexId, VertexId)> = candidates
        .into_iter()
        .filter(|_| rng.gen_bool(p))
        .collect();
    let extra_weights: Vec<f64> = accepted
        .iter()
        .map(|_| round_weight(rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT)))
        .collect();
    for ((a, b), w) in accepted.into_iter().zip(extra_weights) {
        graph.add_edge(a, b, w, EdgeTag::Extra)?;
    }

    tracing::debug!(
        n,
        p,
        edges = graph.edge_count(),
        connected = graph.is_connected(),
        "generated graph"
    );

    Ok(graph)
}
