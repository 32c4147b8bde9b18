//! Fixed catalog of pipeline counters.
//!
//! Names and help texts are part of the exported surface: dashboards key on
//! them, so they are reproduced exactly (including the `successfull` typo and
//! the `marshal_report` help that repeats the schema-version wording).

use std::fmt;

use crate::error::{MetricsError, Result};

pub const CONSUMED_MESSAGES_NAME: &str = "consumed_messages";
pub const CONSUMING_ERRORS_NAME: &str = "consuming_errors";
pub const PARSED_INCOMING_MESSAGE_NAME: &str = "parse_incoming_message";
pub const CHECK_SCHEMA_VERSION_NAME: &str = "check_schema_version";
pub const MARSHAL_REPORT_NAME: &str = "marshal_report";

pub const CONSUMED_MESSAGES_HELP: &str = "The total number of messages consumed from Kafka";
pub const CONSUMING_ERRORS_HELP: &str =
    "The total number of errors during consuming messages from Kafka";
pub const PARSED_INCOMING_MESSAGE_HELP: &str = "The total number of parsed messages";
pub const CHECK_SCHEMA_VERSION_HELP: &str =
    "The total number of messages with successfull schema check";
pub const MARSHAL_REPORT_HELP: &str = "The total number of messages with correct schema version";

/// One of the five pipeline counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CounterId {
    /// Messages consumed from Kafka.
    ConsumedMessages,
    /// Errors while consuming from Kafka.
    ConsumingErrors,
    /// Incoming messages parsed.
    ParsedIncomingMessage,
    /// Messages that passed the schema-version check.
    CheckSchemaVersion,
    /// Reports marshaled.
    MarshalReport,
}

impl CounterId {
    /// All counters, in registration order.
    pub const ALL: [CounterId; 5] = [
        CounterId::ConsumedMessages,
        CounterId::ConsumingErrors,
        CounterId::ParsedIncomingMessage,
        CounterId::CheckSchemaVersion,
        CounterId::MarshalReport,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CounterId::ConsumedMessages => CONSUMED_MESSAGES_NAME,
            CounterId::ConsumingErrors => CONSUMING_ERRORS_NAME,
            CounterId::ParsedIncomingMessage => PARSED_INCOMING_MESSAGE_NAME,
            CounterId::CheckSchemaVersion => CHECK_SCHEMA_VERSION_NAME,
            CounterId::MarshalReport => MARSHAL_REPORT_NAME,
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            CounterId::ConsumedMessages => CONSUMED_MESSAGES_HELP,
            CounterId::ConsumingErrors => CONSUMING_ERRORS_HELP,
            CounterId::ParsedIncomingMessage => PARSED_INCOMING_MESSAGE_HELP,
            CounterId::CheckSchemaVersion => CHECK_SCHEMA_VERSION_HELP,
            CounterId::MarshalReport => MARSHAL_REPORT_HELP,
        }
    }

    /// Slot of this counter inside a five-element set.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exported identifier of this counter under `namespace`.
    pub fn fq_name(self, namespace: &str) -> String {
        fq_name(namespace, self.name())
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Join a namespace and a metric name the way the collection does
/// (`<ns>_<name>`, or the bare name when the namespace is empty).
pub fn fq_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}_{name}")
    }
}

/// Check a namespace against the metric name charset `[a-zA-Z_:][a-zA-Z0-9_:]*`.
/// The empty namespace means "no prefix" and is accepted.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    let mut chars = namespace.chars();
    let Some(first) = chars.next() else {
        return Ok(());
    };
    let reject = |reason: &str| MetricsError::InvalidNamespace {
        namespace: namespace.to_string(),
        reason: reason.to_string(),
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == ':') {
        return Err(reject("must start with a letter, '_' or ':'"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':') {
        return Err(reject("only letters, digits, '_' and ':' are allowed"));
    }
    Ok(())
}
