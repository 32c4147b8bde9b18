use serde::Deserialize;
use aggmetrics_core::{validate_namespace, MetricsError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggConfig {
    pub version: u32,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl AggConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::BadConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.metrics.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Prefix for every exported metric name. Empty means no prefix.
    #[serde(default)]
    pub namespace: String,

    /// Register the API metrics family (renamed together with the pipeline
    /// counters). `false` leaves it out entirely.
    #[serde(default = "default_api_metrics")]
    pub api_metrics: bool,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            api_metrics: default_api_metrics(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        validate_namespace(&self.namespace)
    }

    /// The namespace to install, if one is configured.
    pub fn namespace(&self) -> Option<&str> {
        if self.namespace.is_empty() {
            None
        } else {
            Some(&self.namespace)
        }
    }
}

fn default_api_metrics() -> bool {
    true
}
