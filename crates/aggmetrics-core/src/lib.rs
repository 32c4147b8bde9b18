//! aggmetrics core: the fixed pipeline counter catalog and the shared error type.
//!
//! This crate carries no registry state. It names the five counters a Kafka
//! consuming pipeline reports, and the error surface shared by the registry
//! and its companions.
//!
//! Panics, `unwrap` and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;

pub use catalog::{fq_name, validate_namespace, CounterId};
pub use error::{ErrorClass, MetricsError, Result};
