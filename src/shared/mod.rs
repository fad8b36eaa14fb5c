/// Shared utilities used across all layers
///
/// This module contains:
/// - Metrics registry (Prometheus)

pub mod metrics;

pub use metrics::METRICS;
