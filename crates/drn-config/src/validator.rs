//! Configuration Validator (C8).
//!
//! Checks a [`ConfigMap`] against the recognized-option range table and
//! produces a [`ValidationReport`]. Errors are critical and block execution;
//! warnings are advisory; infos are purely descriptive. Missing keys are
//! treated as unset and are not validated.

use crate::config_map::ConfigMap;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigIssue {
    pub option: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ConfigIssue>,
    pub warnings: Vec<ConfigIssue>,
    pub infos: Vec<String>,
}

impl ValidationReport {
    fn error(&mut self, option: &str, message: impl Into<String>) {
        self.errors.push(ConfigIssue::new(option, message));
    }

    fn warn(&mut self, option: &str, message: impl Into<String>) {
        self.warnings.push(ConfigIssue::new(option, message));
    }
}

fn check_range(report: &mut ValidationReport, config: &ConfigMap, key: &str, lo: f64, hi: f64) -> Option<f64> {
    let value = config.get_f64(key)?;
    if value < lo || value > hi {
        report.error(key, format!("{key} = {value} is outside the allowed range [{lo}, {hi}]"));
    }
    Some(value)
}

/// Validate `config` against the recognized-option table. Absent options are
/// silently skipped — callers that require an option present must check
/// `config.contains(...)` themselves before validating.
pub fn validate(config: &ConfigMap) -> ValidationReport {
    let mut report = ValidationReport::default();

    let num_nodes = check_range(&mut report, config, "num_nodes", 1.0, 1000.0);
    if let Some(n) = num_nodes {
        if n > 500.0 {
            report.warn("num_nodes", "large node counts may slow generation and routing");
        }
    }

    let prob_edge = check_range(&mut report, config, "prob_edge", 0.0, 1.0);
    if let Some(p) = prob_edge {
        if p < 0.1 || p > 0.8 {
            report.warn("prob_edge", "edge probability produces an unusually sparse or dense graph");
        }
    }

    check_range(&mut report, config, "seed", 1.0, 999_999.0);

    let pct_storage = check_range(&mut report, config, "pct_storage", 0.0, 100.0);
    let pct_charging = check_range(&mut report, config, "pct_charging", 0.0, 100.0);
    let pct_client = check_range(&mut report, config, "pct_client", 0.0, 100.0);

    if let (Some(s), Some(c), Some(cl)) = (pct_storage, pct_charging, pct_client) {
        let sum = s + c + cl;
        if (sum - 100.0).abs() > 0.1 {
            report.error(
                "pct_storage+pct_charging+pct_client",
                format!("role percentages sum to {sum}, must sum to 100 (±0.1)"),
            );
        }
        if let Some(n) = num_nodes {
            if s == 0.0 && n >= 2.0 {
                report.warn("pct_storage", "zero storage percentage with more than one node");
            }
            if c == 0.0 && n >= 2.0 {
                report.warn("pct_charging", "zero charging percentage with more than one node");
            }
        }
    }

    check_range(&mut report, config, "clients_per_node", 1.0, 10.0);
    check_range(&mut report, config, "orders_per_client", 1.0, 50.0);
    check_range(&mut report, config, "drone_battery", 100.0, 10000.0);
    check_range(&mut report, config, "drone_consumption", 0.1, 10.0);
    check_range(&mut report, config, "station_capacity", 1.0, 20.0);
    check_range(&mut report, config, "recharge_cost", 0.1, 100.0);

    if let Some(max_route) = config.get_f64("max_route_distance") {
        if max_route > 1000.0 {
            report.warn("max_route_distance", "very long maximum route distance");
        }
    }

    if let Some(margin) = config.get_f64("battery_margin") {
        if margin < 5.0 {
            report.warn("battery_margin", "battery margin below 5% leaves little safety buffer");
        }
    }

    if let (Some(n), Some(p)) = (num_nodes, prob_edge) {
        let spanning = (n - 1.0).max(0.0);
        let max_extra = (n * (n - 1.0) / 2.0 - spanning).max(0.0);
        let estimated_edges = spanning + max_extra * p;
        let density = if n > 1.0 {
            estimated_edges / (n * (n - 1.0) / 2.0)
        } else {
            0.0
        };
        report.infos.push(format!(
            "estimated edge count ~{estimated_edges:.0}, density ~{density:.2}"
        ));
        report.infos.push(format!("scenario tag: {}", scenario_tag(n as usize)));
        report.infos.push(format!("estimated runtime bucket: {}", runtime_bucket(n as usize)));
    }

    report.valid = report.errors.is_empty();
    report
}

fn scenario_tag(n: usize) -> &'static str {
    match n {
        0..=20 => "small_town",
        21..=150 => "mid_city",
        151..=1000 => "large_city",
        _ => "none",
    }
}

fn runtime_bucket(n: usize) -> &'static str {
    match n {
        0..=50 => "fast",
        51..=300 => "normal",
        _ => "slow",
    }
}

/// A recommended option preset for a named scenario, or `None` for an
/// unrecognized name.
pub fn preset(scenario: &str) -> Option<ConfigMap> {
    let mut config = ConfigMap::new();
    match scenario {
        "small_town" => {
            config.set("num_nodes", 15.0);
            config.set("prob_edge", 0.3);
        }
        "mid_city" => {
            config.set("num_nodes", 120.0);
            config.set("prob_edge", 0.2);
        }
        "large_city" => {
            config.set("num_nodes", 600.0);
            config.set("prob_edge", 0.1);
        }
        _ => return None,
    }
    config.set("pct_storage", 20.0);
    config.set("pct_charging", 10.0);
    config.set("pct_client", 70.0);
    config.set("seed", 1.0);
    config.set("clients_per_node", 3.0);
    config.set("orders_per_client", 5.0);
    config.set("drone_battery", 1000.0);
    config.set("drone_consumption", 2.0);
    config.set("station_capacity", 4.0);
    config.set("recharge_cost", 10.0);
    config.set("battery_margin", 15.0);
    Some(config)
}
