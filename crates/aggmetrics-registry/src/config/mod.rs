//! Config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use aggmetrics_core::{MetricsError, Result};

pub use schema::{AggConfig, MetricsSection};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<AggConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        MetricsError::BadConfig(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AggConfig> {
    let cfg: AggConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricsError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
