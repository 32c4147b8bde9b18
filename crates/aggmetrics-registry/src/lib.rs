//! aggmetrics registry library entry.
//!
//! This crate registers the Kafka pipeline counters and the companion API
//! metrics into a shared collection, handles the startup namespace rename,
//! and loads the YAML config that drives it. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod cli;
pub mod config;
pub mod obs;
