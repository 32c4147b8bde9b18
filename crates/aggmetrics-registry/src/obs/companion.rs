//! Companion metric families renamed together with the pipeline counters.

use aggmetrics_core::Result;

/// Capability to move another metric family under a namespace.
pub trait CompanionMetrics: Send + Sync {
    /// Rename the family under `namespace`. Errors abort the pipeline rename
    /// before any pipeline counter is touched.
    fn install_with_namespace(&self, namespace: &str) -> Result<()>;
}

/// Companion for deployments that only export the pipeline counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCompanion;

impl CompanionMetrics for NoopCompanion {
    fn install_with_namespace(&self, _namespace: &str) -> Result<()> {
        Ok(())
    }
}
