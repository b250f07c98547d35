//! Unit tests for drn-config.

#[cfg(test)]
mod ranges {
    use crate::config_map::ConfigMap;
    use crate::validator::validate;

    fn base_config() -> ConfigMap {
        let mut c = ConfigMap::new();
        c.set("num_nodes", 50.0);
        c.set("prob_edge", 0.3);
        c.set("seed", 303.0);
        c.set("pct_storage", 20.0);
        c.set("pct_charging", 10.0);
        c.set("pct_client", 70.0);
        c.set("clients_per_node", 3.0);
        c.set("orders_per_client", 5.0);
        c.set("drone_battery", 1000.0);
        c.set("drone_consumption", 2.0);
        c.set("station_capacity", 4.0);
        c.set("recharge_cost", 10.0);
        c.set("max_route_distance", 500.0);
        c.set("battery_margin", 15.0);
        c
    }

    #[test]
    fn in_range_config_is_valid_with_no_errors() {
        let report = validate(&base_config());
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn num_nodes_out_of_range_is_critical() {
        let mut c = base_config();
        c.set("num_nodes", 0.0);
        let report = validate(&c);
        assert!(!report.valid);
        assert_eq!(report.errors.iter().filter(|e| e.option == "num_nodes").count(), 1);
    }

    #[test]
    fn num_nodes_above_500_warns_but_stays_valid() {
        let mut c = base_config();
        c.set("num_nodes", 600.0);
        let report = validate(&c);
        assert!(report.valid);
        assert!(report.warnings.iter().any(|w| w.option == "num_nodes"));
    }

    #[test]
    fn prob_edge_out_of_range_is_critical() {
        let mut c = base_config();
        c.set("prob_edge", 1.5);
        let report = validate(&c);
        assert!(!report.valid);
    }

    #[test]
    fn prob_edge_extreme_density_warns() {
        let mut c = base_config();
        c.set("prob_edge", 0.05);
        let report = validate(&c);
        assert!(report.valid);
        assert!(report.warnings.iter().any(|w| w.option == "prob_edge"));
    }

    #[test]
    fn seed_out_of_range_is_critical() {
        let mut c = base_config();
        c.set("seed", 0.0);
        let report = validate(&c);
        assert!(!report.valid);
    }

    #[test]
    fn role_percentage_sum_violation_is_a_single_critical_error() {
        let mut c = base_config();
        c.set("pct_storage", 50.0);
        let report = validate(&c);
        assert!(!report.valid);
        assert_eq!(
            report
                .errors
                .iter()
                .filter(|e| e.option.contains("pct_storage+pct_charging+pct_client"))
                .count(),
            1
        );
    }

    #[test]
    fn zero_storage_percentage_with_multiple_nodes_warns() {
        let mut c = base_config();
        c.set("pct_storage", 0.0);
        c.set("pct_client", 90.0);
        let report = validate(&c);
        assert!(report.warnings.iter().any(|w| w.option == "pct_storage"));
    }

    #[test]
    fn clients_per_node_out_of_range_is_critical() {
        let mut c = base_config();
        c.set("clients_per_node", 20.0);
        assert!(!validate(&c).valid);
    }

    #[test]
    fn orders_per_client_out_of_range_is_critical() {
        let mut c = base_config();
        c.set("orders_per_client", 100.0);
        assert!(!validate(&c).valid);
    }

    #[test]
    fn drone_battery_out_of_range_is_critical() {
        let mut c = base_config();
        c.set("drone_battery", 50.0);
        assert!(!validate(&c).valid);
    }

    #[test]
    fn drone_consumption_out_of_range_is_critical() {
        let mut c = base_config();
        c.set("drone_consumption", 20.0);
        assert!(!validate(&c).valid);
    }

    #[test]
    fn station_capacity_out_of_range_is_critical() {
        let mut c = base_config();
        c.set("station_capacity", 30.0);
        assert!(!validate(&c).valid);
    }

    #[test]
    fn recharge_cost_out_of_range_is_critical() {
        let mut c = base_config();
        c.set("recharge_cost", 0.01);
        assert!(!validate(&c).valid);
    }

    #[test]
    fn max_route_distance_above_1000_warns() {
        let mut c = base_config();
        c.set("max_route_distance", 2000.0);
        let report = validate(&c);
        assert!(report.valid);
        assert!(report.warnings.iter().any(|w| w.option == "max_route_distance"));
    }

    #[test]
    fn battery_margin_below_5_percent_warns() {
        let mut c = base_config();
        c.set("battery_margin", 2.0);
        let report = validate(&c);
        assert!(report.valid);
        assert!(report.warnings.iter().any(|w| w.option == "battery_margin"));
    }

    #[test]
    fn missing_keys_are_skipped_not_flagged() {
        let c = ConfigMap::new();
        let report = validate(&c);
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn infos_include_density_and_scenario_tag() {
        let report = validate(&base_config());
        assert_eq!(report.infos.len(), 3);
    }
}

#[cfg(test)]
mod presets {
    use crate::validator::preset;

    #[test]
    fn known_presets_resolve() {
        assert!(preset("small_town").is_some());
        assert!(preset("mid_city").is_some());
        assert!(preset("large_city").is_some());
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(preset("metropolis").is_none());
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::loader::load_csv_reader;

    #[test]
    fn loads_numeric_and_text_values() {
        let csv = "key,value\nnum_nodes,50\nprob_edge,0.3\nscenario_tag,small_town\n";
        let map = load_csv_reader(Cursor::new(csv)).unwrap();
        assert_eq!(map.get_f64("num_nodes"), Some(50.0));
        assert_eq!(map.get_f64("prob_edge"), Some(0.3));
        assert!(map.contains("scenario_tag"));
        assert_eq!(map.get_f64("scenario_tag"), None);
    }
}
