//! Counter catalog tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use aggmetrics_core::{fq_name, validate_namespace, CounterId, ErrorClass, MetricsError};

#[test]
fn names_and_help_are_exact() {
    let expected = [
        ("consumed_messages", "The total number of messages consumed from Kafka"),
        (
            "consuming_errors",
            "The total number of errors during consuming messages from Kafka",
        ),
        ("parse_incoming_message", "The total number of parsed messages"),
        (
            "check_schema_version",
            "The total number of messages with successfull schema check",
        ),
        (
            "marshal_report",
            "The total number of messages with correct schema version",
        ),
    ];
    assert_eq!(CounterId::ALL.len(), expected.len());
    for (id, (name, help)) in CounterId::ALL.into_iter().zip(expected) {
        assert_eq!(id.name(), name);
        assert_eq!(id.help(), help);
        assert_eq!(id.to_string(), name);
    }
}

#[test]
fn index_matches_registration_order() {
    for (i, id) in CounterId::ALL.into_iter().enumerate() {
        assert_eq!(id.index(), i);
    }
}

#[test]
fn fq_name_joins_with_underscore() {
    assert_eq!(fq_name("", "consumed_messages"), "consumed_messages");
    assert_eq!(
        fq_name("aggregator", "consumed_messages"),
        "aggregator_consumed_messages"
    );
    assert_eq!(
        CounterId::CheckSchemaVersion.fq_name("ccx"),
        "ccx_check_schema_version"
    );
}

#[test]
fn namespace_charset() {
    for ok in ["", "aggregator", "_x", "a:b", "ns_2"] {
        validate_namespace(ok).unwrap();
    }
    for bad in ["bad-ns", "9lives", "with space", "dot.ted"] {
        let err = validate_namespace(bad).expect_err(bad);
        assert!(matches!(err, MetricsError::InvalidNamespace { .. }), "{bad}");
        assert_eq!(err.class().as_str(), "CONFIGURATION");
    }
}

#[test]
fn duplicate_registration_is_an_invariant_error() {
    let err = MetricsError::from(prometheus::Error::AlreadyReg);
    assert_eq!(err.class(), ErrorClass::Invariant);
    assert_eq!(err.class().as_str(), "INVARIANT");
}
