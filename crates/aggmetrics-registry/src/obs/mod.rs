//! Metric families registered into a shared `prometheus::Registry`.
//!
//! The pipeline counters are the primary family; the API metrics ride along
//! as a companion renamed under the same namespace.

pub mod api;
pub mod companion;
pub mod family;
pub mod pipeline;

pub use api::ApiMetrics;
pub use companion::{CompanionMetrics, NoopCompanion};
pub use pipeline::PipelineMetrics;
