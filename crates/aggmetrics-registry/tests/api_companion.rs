//! API metrics family renamed alongside the pipeline counters.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use aggmetrics_core::CounterId;
use aggmetrics_registry::obs::{ApiMetrics, CompanionMetrics, PipelineMetrics};
use prometheus::Registry;

fn names(registry: &Registry) -> Vec<String> {
    let mut v: Vec<String> = registry
        .gather()
        .into_iter()
        .map(|mf| mf.get_name().to_string())
        .collect();
    v.sort();
    v
}

#[test]
fn observe_request_counts_endpoint_and_status() {
    let api = ApiMetrics::new(Registry::new()).unwrap();

    api.observe_request("/report", 200, Duration::from_millis(12));
    api.observe_request("/report", 404, Duration::from_millis(3));
    api.observe_request("/health", 200, Duration::from_millis(1));

    assert_eq!(api.requests("/report"), 2);
    assert_eq!(api.requests("/health"), 1);
    assert_eq!(api.status_count(200), 2);
    assert_eq!(api.status_count(404), 1);
}

#[test]
fn rename_moves_the_whole_family() {
    let registry = Registry::new();
    let api = ApiMetrics::new(registry.clone()).unwrap();
    api.observe_request("/report", 200, Duration::from_millis(5));

    api.install_with_namespace("aggregator").unwrap();
    api.observe_request("/report", 500, Duration::from_millis(5));

    assert_eq!(api.namespace(), "aggregator");
    assert_eq!(api.requests("/report"), 1);
    assert_eq!(
        names(&registry),
        vec![
            "aggregator_api_endpoints_requests",
            "aggregator_api_endpoints_response_time",
            "aggregator_api_endpoints_status_codes",
        ]
    );
}

#[test]
fn pipeline_rename_carries_the_api_family() {
    let registry = Registry::new();
    let api = Arc::new(ApiMetrics::new(registry.clone()).unwrap());
    let pm = PipelineMetrics::new(registry.clone(), api.clone()).unwrap();

    pm.install_with_namespace("ccx").unwrap();
    pm.inc(CounterId::ConsumedMessages);
    api.observe_request("/metrics", 200, Duration::from_millis(1));

    assert_eq!(api.namespace(), "ccx");
    let got = names(&registry);
    assert_eq!(got.len(), 8);
    assert!(got.iter().all(|n| n.starts_with("ccx_")), "{got:?}");
}

#[test]
fn invalid_namespace_leaves_api_family_in_place() {
    let registry = Registry::new();
    let api = ApiMetrics::new(registry).unwrap();
    api.observe_request("/report", 200, Duration::from_millis(5));

    api.install_with_namespace("no spaces").expect_err("invalid name");
    assert_eq!(api.namespace(), "");
    assert_eq!(api.requests("/report"), 1);
}
