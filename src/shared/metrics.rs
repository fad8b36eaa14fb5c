//! Prometheus Metrics Module
//!
//! Service-wide metric registry.
//!
//! ## Metrics
//! - **Counter**: use case executions by outcome, HTTP responses by status
//! - **Histogram**: use case latency
//!
//! ## Usage
//! ```rust,ignore
//! use catalog_admin::shared::metrics::METRICS;
//!
//! let timer = METRICS.use_case_duration.with_label_values(&["create_category"]).start_timer();
//! // ... run the use case ...
//! timer.observe_duration();
//! ```

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

lazy_static! {
    /// 全局指标实例
    pub static ref METRICS: Metrics = Metrics::new();
}

pub struct Metrics {
    /// 用例执行次数（标签: use_case, outcome）
    pub use_case_total: CounterVec,

    /// 用例耗时，单位秒（标签: use_case）
    pub use_case_duration: HistogramVec,

    /// HTTP 响应数（标签: method, status）
    pub http_responses_total: CounterVec,
}

impl Metrics {
    fn new() -> Self {
        Self {
            use_case_total: register_counter_vec!(
                "catalog_admin_use_case_total",
                "Total number of use case executions",
                &["use_case", "outcome"]
            )
            .expect("metric registration"),

            use_case_duration: register_histogram_vec!(
                "catalog_admin_use_case_duration_seconds",
                "Use case execution time in seconds",
                &["use_case"],
                vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]
            )
            .expect("metric registration"),

            http_responses_total: register_counter_vec!(
                "catalog_admin_http_responses_total",
                "Total number of HTTP responses",
                &["method", "status"]
            )
            .expect("metric registration"),
        }
    }

    /// Exports all registered metrics in the Prometheus text format
    pub fn export(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = prometheus::gather();
        let mut buffer = vec![];
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::error!("failed to encode metrics: {}", e);
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
