//! Kafka pipeline counters.
//!
//! `PipelineMetrics` owns the five counters of the consuming pipeline and is
//! shared (as `Arc<PipelineMetrics>`) with the consumer, the parser, the
//! schema checker and the report marshaler. They call [`PipelineMetrics::inc`]
//! or keep a handle from [`PipelineMetrics::counter`].

use std::collections::BTreeMap;
use std::sync::Arc;

use aggmetrics_core::{CounterId, MetricsError, Result};
use prometheus::core::Collector;
use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};

use super::companion::{CompanionMetrics, NoopCompanion};
use super::family::{Family, FamilySlot, Generation};

/// The five counters, indexed by `CounterId::index`.
pub struct PipelineCounters {
    counters: [IntCounter; 5],
}

impl PipelineCounters {
    pub fn get(&self, id: CounterId) -> &IntCounter {
        &self.counters[id.index()]
    }
}

fn new_counter(namespace: &str, id: CounterId) -> Result<IntCounter> {
    let opts = Opts::new(id.name(), id.help()).namespace(namespace);
    Ok(IntCounter::with_opts(opts)?)
}

impl Family for PipelineCounters {
    const KIND: &'static str = "pipeline";

    fn build(namespace: &str) -> Result<Self> {
        Ok(Self {
            counters: [
                new_counter(namespace, CounterId::ConsumedMessages)?,
                new_counter(namespace, CounterId::ConsumingErrors)?,
                new_counter(namespace, CounterId::ParsedIncomingMessage)?,
                new_counter(namespace, CounterId::CheckSchemaVersion)?,
                new_counter(namespace, CounterId::MarshalReport)?,
            ],
        })
    }

    fn collectors(&self) -> Vec<(&'static str, Box<dyn Collector>)> {
        CounterId::ALL
            .into_iter()
            .map(|id| (id.name(), Box::new(self.get(id).clone()) as Box<dyn Collector>))
            .collect()
    }
}

/// Registry of the pipeline counters.
pub struct PipelineMetrics {
    slot: FamilySlot<PipelineCounters>,
    companion: Arc<dyn CompanionMetrics>,
}

impl PipelineMetrics {
    /// Create the five counters without a namespace and register them into
    /// `registry`. Companion families are renamed through `companion`.
    pub fn new(registry: Registry, companion: Arc<dyn CompanionMetrics>) -> Result<Self> {
        let slot = FamilySlot::install(registry, "")?;
        Ok(Self { slot, companion })
    }

    /// Bind to the process-wide default collection with no companion family.
    pub fn with_default_registry() -> Result<Self> {
        Self::new(prometheus::default_registry().clone(), Arc::new(NoopCompanion))
    }

    /// Re-create all five counters under `namespace` (values restart at 0)
    /// and rename the companion family under the same namespace.
    ///
    /// Intended to run once at startup. An increment made through a handle
    /// obtained before this call lands on the discarded counter and is lost.
    /// Any error is fatal: nothing is rolled back.
    pub fn install_with_namespace(&self, namespace: &str) -> Result<()> {
        let next = Generation::build(namespace)?;
        self.companion.install_with_namespace(namespace)?;
        self.slot.swap(next)
    }

    /// Add one to the live counter `id`.
    pub fn inc(&self, id: CounterId) {
        self.slot.with(|c| c.get(id).inc());
    }

    /// Add `v` to the live counter `id`.
    pub fn inc_by(&self, id: CounterId, v: u64) {
        self.slot.with(|c| c.get(id).inc_by(v));
    }

    /// A handle to the live counter `id`. It stays bound to this instance
    /// after a namespace change.
    pub fn counter(&self, id: CounterId) -> IntCounter {
        self.slot.with(|c| c.get(id).clone())
    }

    pub fn value(&self, id: CounterId) -> u64 {
        self.slot.with(|c| c.get(id).get())
    }

    /// Namespace the live counters were built with.
    pub fn namespace(&self) -> String {
        self.slot.current().namespace().to_string()
    }

    /// Current value of every counter, read under one lock.
    pub fn snapshot(&self) -> BTreeMap<CounterId, u64> {
        self.slot.with(|c| CounterId::ALL.into_iter().map(|id| (id, c.get(id).get())).collect())
    }

    pub fn registry(&self) -> &Registry {
        self.slot.registry()
    }

    /// Encode the whole collection (not only this family) in the Prometheus
    /// text format.
    pub fn render(&self) -> Result<String> {
        let families = self.slot.registry().gather();
        let mut buf = Vec::new();
        TextEncoder::new().encode(&families, &mut buf)?;
        String::from_utf8(buf).map_err(|e| MetricsError::Internal(e.to_string()))
    }
}
