//! Startup wiring: config in, shared metric registries out.

use std::sync::Arc;

use aggmetrics_core::Result;
use prometheus::Registry;

use crate::config::AggConfig;
use crate::obs::{ApiMetrics, CompanionMetrics, NoopCompanion, PipelineMetrics};

/// Shared state handed to every collaborator that increments a counter.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    pipeline: Arc<PipelineMetrics>,
    api: Option<Arc<ApiMetrics>>,
}

struct AppStateInner {
    cfg: AggConfig,
}

impl AppState {
    /// Register every family into `registry` and apply the configured
    /// namespace. Errors are fatal for startup.
    pub fn new(cfg: AggConfig, registry: Registry) -> Result<Self> {
        // 1) Companion family (optional)
        let api = if cfg.metrics.api_metrics {
            Some(Arc::new(ApiMetrics::new(registry.clone())?))
        } else {
            None
        };
        let companion: Arc<dyn CompanionMetrics> = match &api {
            Some(a) => Arc::clone(a) as Arc<dyn CompanionMetrics>,
            None => Arc::new(NoopCompanion),
        };

        // 2) Pipeline counters, unprefixed
        let pipeline = Arc::new(PipelineMetrics::new(registry, companion)?);

        // 3) Namespace (single rename, before any traffic)
        if let Some(ns) = cfg.metrics.namespace() {
            pipeline.install_with_namespace(ns)?;
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            pipeline,
            api,
        })
    }

    /// Same as [`AppState::new`], bound to the process-wide default collection.
    pub fn with_default_registry(cfg: AggConfig) -> Result<Self> {
        Self::new(cfg, prometheus::default_registry().clone())
    }

    pub fn cfg(&self) -> &AggConfig {
        &self.inner.cfg
    }

    pub fn pipeline(&self) -> Arc<PipelineMetrics> {
        Arc::clone(&self.pipeline)
    }

    pub fn api(&self) -> Option<Arc<ApiMetrics>> {
        self.api.clone()
    }
}
