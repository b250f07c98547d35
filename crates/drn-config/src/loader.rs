//! CSV configuration loader.
//!
//! # CSV format
//!
//! One row per option.
//!
//! ```csv
//! key,value
//! num_nodes,120
//! prob_edge,0.35
//! seed,303
//! pct_storage,20
//! pct_charging,10
//! pct_client,70
//! ```
//!
//! Values that parse as a number are stored as `AttrValue::Float`; everything
//! else is stored as `AttrValue::Text`. Rows are buffered and deserialized
//! before any validation runs, mirroring `dt-schedule::loader`'s
//! buffer-then-build shape.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::config_map::ConfigMap;
use crate::error::{ConfigError, ConfigResult};

#[derive(Deserialize)]
struct ConfigRow {
    key: String,
    value: String,
}

pub fn load_csv(path: &Path) -> ConfigResult<ConfigMap> {
    let file = std::fs::File::open(path)?;
    load_csv_reader(file)
}

pub fn load_csv_reader<R: Read>(reader: R) -> ConfigResult<ConfigMap> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut map = ConfigMap::new();

    for result in csv_reader.deserialize::<ConfigRow>() {
        let row = result.map_err(|e| ConfigError::Parse(e.to_string()))?;
        match row.value.trim().parse::<f64>() {
            Ok(n) => {
                map.set(row.key, n);
            }
            Err(_) => {
                map.set(row.key, row.value);
            }
        }
    }

    Ok(map)
}
