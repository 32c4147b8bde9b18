//! Shared error type across aggmetrics crates.

use thiserror::Error;

/// Error classes (stable codes for startup diagnostics).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Operator-supplied configuration was rejected.
    Configuration,
    /// Two registrations collided; a bug, not a runtime condition.
    Invariant,
    /// Anything else.
    Internal,
}

impl ErrorClass {
    /// String representation used in startup diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorClass::Configuration => "CONFIGURATION",
            ErrorClass::Invariant => "INVARIANT",
            ErrorClass::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by the catalog and the registry.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("invalid namespace {namespace:?}: {reason}")]
    InvalidNamespace { namespace: String, reason: String },
    #[error("invalid metric descriptor: {0}")]
    InvalidMetric(String),
    #[error("metric already registered: {name}")]
    AlreadyRegistered { name: String },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map the error to its class.
    pub fn class(&self) -> ErrorClass {
        match self {
            MetricsError::InvalidNamespace { .. }
            | MetricsError::InvalidMetric(_)
            | MetricsError::BadConfig(_) => ErrorClass::Configuration,
            MetricsError::AlreadyRegistered { .. } => ErrorClass::Invariant,
            MetricsError::Internal(_) => ErrorClass::Internal,
        }
    }
}

impl From<prometheus::Error> for MetricsError {
    fn from(e: prometheus::Error) -> Self {
        match e {
            // prometheus reports collisions without naming the metric; callers
            // that know the name build `AlreadyRegistered` themselves.
            prometheus::Error::AlreadyReg => MetricsError::AlreadyRegistered {
                name: "<unknown>".into(),
            },
            prometheus::Error::Msg(m) => MetricsError::InvalidMetric(m),
            other => MetricsError::Internal(other.to_string()),
        }
    }
}
