//! General API-call metrics.
//!
//! Request count and response time per endpoint, plus a count per status
//! code. Renamed through [`CompanionMetrics`] whenever the pipeline counters
//! move to a namespace.

use std::time::Duration;

use aggmetrics_core::Result;
use prometheus::core::Collector;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

use super::companion::CompanionMetrics;
use super::family::{Family, FamilySlot, Generation};

pub const API_REQUESTS_NAME: &str = "api_endpoints_requests";
pub const API_RESPONSE_TIME_NAME: &str = "api_endpoints_response_time";
pub const API_STATUS_CODES_NAME: &str = "api_endpoints_status_codes";

pub const API_REQUESTS_HELP: &str = "The total number of requests per endpoint";
pub const API_RESPONSE_TIME_HELP: &str = "API endpoints response time";
pub const API_STATUS_CODES_HELP: &str = "API responses status codes";

pub struct ApiFamily {
    requests: IntCounterVec,
    response_time: HistogramVec,
    status_codes: IntCounterVec,
}

impl Family for ApiFamily {
    const KIND: &'static str = "api";

    fn build(namespace: &str) -> Result<Self> {
        let requests = IntCounterVec::new(
            Opts::new(API_REQUESTS_NAME, API_REQUESTS_HELP).namespace(namespace),
            &["endpoint"],
        )?;
        let response_time = HistogramVec::new(
            HistogramOpts::new(API_RESPONSE_TIME_NAME, API_RESPONSE_TIME_HELP)
                .namespace(namespace),
            &["endpoint"],
        )?;
        let status_codes = IntCounterVec::new(
            Opts::new(API_STATUS_CODES_NAME, API_STATUS_CODES_HELP).namespace(namespace),
            &["status_code"],
        )?;
        Ok(Self {
            requests,
            response_time,
            status_codes,
        })
    }

    fn collectors(&self) -> Vec<(&'static str, Box<dyn Collector>)> {
        let requests: Box<dyn Collector> = Box::new(self.requests.clone());
        let response_time: Box<dyn Collector> = Box::new(self.response_time.clone());
        let status_codes: Box<dyn Collector> = Box::new(self.status_codes.clone());
        vec![
            (API_REQUESTS_NAME, requests),
            (API_RESPONSE_TIME_NAME, response_time),
            (API_STATUS_CODES_NAME, status_codes),
        ]
    }
}

pub struct ApiMetrics {
    slot: FamilySlot<ApiFamily>,
}

impl ApiMetrics {
    /// Create the family without a namespace and register it into `registry`.
    pub fn new(registry: Registry) -> Result<Self> {
        Ok(Self {
            slot: FamilySlot::install(registry, "")?,
        })
    }

    /// Record one served request.
    pub fn observe_request(&self, endpoint: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.slot.with(|f| {
            f.requests.with_label_values(&[endpoint]).inc();
            f.response_time
                .with_label_values(&[endpoint])
                .observe(elapsed.as_secs_f64());
            f.status_codes.with_label_values(&[status.as_str()]).inc();
        });
    }

    pub fn requests(&self, endpoint: &str) -> u64 {
        self.slot.with(|f| f.requests.with_label_values(&[endpoint]).get())
    }

    pub fn status_count(&self, status: u16) -> u64 {
        let status = status.to_string();
        self.slot
            .with(|f| f.status_codes.with_label_values(&[status.as_str()]).get())
    }

    pub fn namespace(&self) -> String {
        self.slot.current().namespace().to_string()
    }
}

impl CompanionMetrics for ApiMetrics {
    fn install_with_namespace(&self, namespace: &str) -> Result<()> {
        let next = Generation::build(namespace)?;
        self.slot.swap(next)
    }
}
