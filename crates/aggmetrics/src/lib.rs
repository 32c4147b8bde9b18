//! Top-level facade crate for aggmetrics.
//!
//! Re-exports the counter catalog and the registry so users can depend on a single crate.

pub mod core {
    pub use aggmetrics_core::*;
}

pub mod registry {
    pub use aggmetrics_registry::*;
}
