//! Namespace-swappable metric families.
//!
//! A family is a fixed group of collectors that is always (re)registered as a
//! unit. Renaming happens in two phases: the caller builds a complete new
//! [`Generation`] first (all descriptors validated), then [`FamilySlot::swap`]
//! unregisters the old generation, registers the new one and publishes it
//! while holding one write lock. Readers never see a half-swapped family.
//!
//! Handles cloned out of an older generation keep counting on the discarded
//! instances. Swaps are meant for startup, before traffic begins.

use std::sync::{Arc, PoisonError, RwLock};

use aggmetrics_core::{fq_name, MetricsError, Result};
use prometheus::core::Collector;
use prometheus::Registry;

/// A fixed group of collectors sharing one namespace.
pub trait Family: Send + Sync + Sized {
    /// Short label used in logs.
    const KIND: &'static str;

    /// Create fresh (zeroed, unregistered) collectors under `namespace`.
    fn build(namespace: &str) -> Result<Self>;

    /// Bare metric names paired with a registrable clone of each collector.
    fn collectors(&self) -> Vec<(&'static str, Box<dyn Collector>)>;
}

/// One built instance of a family and the namespace it was built with.
pub struct Generation<F> {
    namespace: String,
    family: F,
}

impl<F: Family> Generation<F> {
    /// Build every collector of the family. A descriptor rejected by the
    /// metric naming rules is reported against the namespace that caused it.
    pub fn build(namespace: &str) -> Result<Self> {
        let family = F::build(namespace).map_err(|e| match e {
            MetricsError::InvalidMetric(reason) if !namespace.is_empty() => {
                MetricsError::InvalidNamespace {
                    namespace: namespace.to_string(),
                    reason,
                }
            }
            other => other,
        })?;
        Ok(Self {
            namespace: namespace.to_string(),
            family,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn family(&self) -> &F {
        &self.family
    }

    /// Register every collector. On a collision the collectors this call
    /// already registered are withdrawn, so a failed generation exports nothing.
    fn register(&self, registry: &Registry) -> Result<()> {
        for (i, (name, collector)) in self.family.collectors().into_iter().enumerate() {
            let fq = fq_name(&self.namespace, name);
            if let Err(e) = registry.register(collector) {
                for (_, done) in self.family.collectors().into_iter().take(i) {
                    let _ = registry.unregister(done);
                }
                return Err(match e {
                    // Descriptors were validated at build time, so anything the
                    // registry rejects here is a name collision.
                    prometheus::Error::AlreadyReg | prometheus::Error::Msg(_) => {
                        MetricsError::AlreadyRegistered { name: fq }
                    }
                    other => MetricsError::from(other),
                });
            }
            tracing::debug!(kind = F::KIND, metric = %fq, "registered");
        }
        Ok(())
    }

    fn unregister(&self, registry: &Registry) {
        for (name, collector) in self.family.collectors() {
            let fq = fq_name(&self.namespace, name);
            match registry.unregister(collector) {
                Ok(()) => tracing::debug!(kind = F::KIND, metric = %fq, "unregistered"),
                Err(_) => tracing::debug!(kind = F::KIND, metric = %fq, "not registered, skipped"),
            }
        }
    }
}

/// The published generation of a family, bound to one collection.
pub struct FamilySlot<F> {
    registry: Registry,
    current: RwLock<Arc<Generation<F>>>,
}

impl<F: Family> FamilySlot<F> {
    /// Build the family under `namespace` and register it into `registry`.
    pub fn install(registry: Registry, namespace: &str) -> Result<Self> {
        let generation = Generation::build(namespace)?;
        generation.register(&registry)?;
        Ok(Self {
            registry,
            current: RwLock::new(Arc::new(generation)),
        })
    }

    /// The currently published generation.
    pub fn current(&self) -> Arc<Generation<F>> {
        // The guarded value is a single Arc, replaced in one assignment, so a
        // poisoned lock still holds a consistent generation.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Run `f` against the published family while holding the read lock, so
    /// the call cannot interleave with a swap.
    pub fn with<R>(&self, f: impl FnOnce(&F) -> R) -> R {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        f(guard.family())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Replace the published generation with `next`.
    ///
    /// No rollback: if registering `next` fails, the previous generation is
    /// already gone from the collection and `next` is withdrawn, so the
    /// family exports nothing. The slot keeps publishing the previous
    /// (now unregistered) generation: increments still succeed but are not
    /// scraped, and `namespace()` reports the old prefix. The error is fatal
    /// for the caller.
    pub fn swap(&self, next: Generation<F>) -> Result<()> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        guard.unregister(&self.registry);
        next.register(&self.registry)?;
        tracing::info!(
            kind = F::KIND,
            from = %guard.namespace(),
            to = %next.namespace(),
            "metric family renamed"
        );
        *guard = Arc::new(next);
        Ok(())
    }
}
