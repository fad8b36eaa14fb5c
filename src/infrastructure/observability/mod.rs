//! Observability Module
//!
//! - `health` - health checker and probe semantics
//! - `http_server` - `/health*` and `/metrics` routes

pub mod health;
pub mod http_server;

pub use health::{HealthChecker, HealthDetails, HealthResponse, HealthStatus};
pub use http_server::{routes, ObservabilityState};
