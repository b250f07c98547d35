//! Unit tests for drn-fleet.

#[cfg(test)]
mod drone_transitions {
    use crate::drone::{ChargerKind, Drone, DroneState};
    use drn_core::{DroneId, VertexId};

    fn new_drone() -> Drone {
        Drone::new(DroneId(0), VertexId(0), 1000.0, 2.0, ChargerKind::Normal)
    }

    #[test]
    fn available_to_flying_is_legal() {
        let mut d = new_drone();
        assert!(d.try_transition(DroneState::Flying));
        assert_eq!(d.state, DroneState::Flying);
    }

    #[test]
    fn flying_to_maintenance_is_illegal() {
        let mut d = new_drone();
        d.try_transition(DroneState::Flying);
        assert!(!d.try_transition(DroneState::Maintenance));
        assert_eq!(d.state, DroneState::Flying);
    }

    #[test]
    fn maintenance_round_trip() {
        let mut d = new_drone();
        assert!(d.try_transition(DroneState::Maintenance));
        assert!(d.try_transition(DroneState::OutOfService));
        assert!(!d.try_transition(DroneState::Available));
        assert!(d.try_transition(DroneState::Maintenance));
        assert!(d.try_transition(DroneState::Available));
    }
}

#[cfg(test)]
mod station_charging {
    use crate::drone::{ChargerKind, Drone, DroneState};
    use crate::station::{Station, StationState};
    use drn_core::{DroneId, StationId, VertexId};

    #[test]
    fn start_and_finish_charge_round_trip() {
        let mut station = Station::new(
            StationId(0),
            VertexId(5),
            1,
            vec![ChargerKind::Normal],
            0.95,
        );
        let mut drone = Drone::new(DroneId(0), VertexId(0), 1000.0, 2.0, ChargerKind::Normal);
        drone.battery = 200.0;

        let kind = station.start_charge(&mut drone, ChargerKind::Normal).unwrap();
        assert_eq!(kind, ChargerKind::Normal);
        assert_eq!(drone.state, DroneState::Charging);
        assert_eq!(drone.position, VertexId(5));
        assert_eq!(station.state, StationState::Occupied);

        let delivered = station.finish_charge(&mut drone, 50.0, 1.0).unwrap();
        assert!(delivered > 0.0);
        assert_eq!(drone.state, DroneState::Available);
        assert_eq!(station.state, StationState::Available);
        assert_eq!(station.totals.sessions, 1);
    }

    #[test]
    fn start_charge_falls_back_to_first_kind() {
        let mut station = Station::new(
            StationId(0),
            VertexId(5),
            2,
            vec![ChargerKind::Fast],
            1.0,
        );
        let mut drone = Drone::new(DroneId(0), VertexId(0), 1000.0, 2.0, ChargerKind::Normal);
        let kind = station.start_charge(&mut drone, ChargerKind::Normal).unwrap();
        assert_eq!(kind, ChargerKind::Fast);
    }

    #[test]
    fn station_at_capacity_rejects_new_session() {
        let mut station = Station::new(
            StationId(0),
            VertexId(5),
            1,
            vec![ChargerKind::Normal],
            1.0,
        );
        let mut d1 = Drone::new(DroneId(0), VertexId(0), 1000.0, 2.0, ChargerKind::Normal);
        let mut d2 = Drone::new(DroneId(1), VertexId(0), 1000.0, 2.0, ChargerKind::Normal);
        station.start_charge(&mut d1, ChargerKind::Normal).unwrap();
        assert!(station.start_charge(&mut d2, ChargerKind::Normal).is_err());
    }
}

#[cfg(test)]
mod battery_validator {
    use drn_core::{Role, VertexId};
    use drn_graph::graph::{EdgeTag, Graph};

    use crate::validator::{validate, ValidationOptions};

    fn chain_graph(c_is_charging: bool) -> (Graph, [VertexId; 4]) {
        let mut g = Graph::new();
        let a = g.add_vertex(Role::Storage, "A");
        let b = g.add_vertex(Role::Client, "B");
        let c_role = if c_is_charging { Role::Charging } else { Role::Client };
        let c = g.add_vertex(c_role, "C");
        let d = g.add_vertex(Role::Client, "D");
        g.add_edge(a, b, 30.0, EdgeTag::Extra).unwrap();
        g.add_edge(b, c, 40.0, EdgeTag::Extra).unwrap();
        g.add_edge(c, d, 35.0, EdgeTag::Extra).unwrap();
        (g, [a, b, c, d])
    }

    #[test]
    fn ample_battery_is_feasible() {
        let (g, v) = chain_graph(false);
        let path = vec![v[0], v[1], v[2], v[3]];
        let options = ValidationOptions {
            autonomy_km: 500.0,
            ..ValidationOptions::default()
        };
        let result = validate(&g, &path, 1000.0, 1000.0, &options).unwrap();
        assert!(result.feasible);
        assert_eq!(result.total_distance, 105.0);
    }

    #[test]
    fn low_battery_without_refuel_support_is_infeasible() {
        let (g, v) = chain_graph(false);
        let path = vec![v[0], v[1], v[2], v[3]];
        let options = ValidationOptions {
            allow_refuels: false,
            autonomy_km: 500.0,
            safety_margin: 0.15,
            ..ValidationOptions::default()
        };
        let result = validate(&g, &path, 1000.0, 50.0, &options).unwrap();
        assert!(!result.feasible);
    }

    #[test]
    fn refuel_at_charging_vertex_keeps_route_feasible() {
        let (g, v) = chain_graph(true);
        let path = vec![v[0], v[1], v[2], v[3]];
        let options = ValidationOptions {
            autonomy_km: 500.0,
            ..ValidationOptions::default()
        };
        let result = validate(&g, &path, 1000.0, 1000.0, &options).unwrap();
        assert!(result.feasible);
        assert!(!result.required_refuels.is_empty());
    }
}
