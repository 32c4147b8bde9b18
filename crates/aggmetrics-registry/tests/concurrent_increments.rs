//! Parallel increments must not lose updates.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use aggmetrics_core::CounterId;
use aggmetrics_registry::obs::{NoopCompanion, PipelineMetrics};
use prometheus::Registry;

fn shared() -> Arc<PipelineMetrics> {
    Arc::new(PipelineMetrics::new(Registry::new(), Arc::new(NoopCompanion)).unwrap())
}

#[test]
fn threads_incrementing_one_counter() {
    let pm = shared();
    let workers: Vec<_> = (0..8)
        .map(|_| {
            let pm = Arc::clone(&pm);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    pm.inc(CounterId::ConsumedMessages);
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }
    assert_eq!(pm.value(CounterId::ConsumedMessages), 8_000);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn tasks_incrementing_after_rename() {
    let pm = shared();
    pm.install_with_namespace("aggregator").unwrap();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let pm = Arc::clone(&pm);
        handles.push(tokio::spawn(async move {
            for _ in 0..250 {
                pm.inc(CounterId::ParsedIncomingMessage);
                pm.inc(CounterId::MarshalReport);
            }
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    assert_eq!(pm.value(CounterId::ParsedIncomingMessage), 4_000);
    assert_eq!(pm.value(CounterId::MarshalReport), 4_000);
    assert_eq!(pm.value(CounterId::ConsumingErrors), 0);
}
