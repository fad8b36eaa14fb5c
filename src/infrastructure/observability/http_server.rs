//! HTTP Observability Routes
//!
//! Prometheus metrics and health checks, merged into the main API router.
//!
//! ## Endpoints
//! - `GET /metrics` - metrics in the Prometheus text format
//! - `GET /health` - health check with storage details
//! - `GET /health/ready` - readiness probe
//! - `GET /health/live` - liveness probe

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::warn;

use super::health::{HealthChecker, HealthStatus};
use crate::application::CatalogService;
use crate::shared::metrics::METRICS;

#[derive(Clone)]
pub struct ObservabilityState {
    pub health: Arc<HealthChecker>,
    pub service: Arc<CatalogService>,
}

impl ObservabilityState {
    async fn storage_reachable(&self) -> bool {
        match self.service.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "storage ping failed");
                false
            }
        }
    }
}

pub fn routes(state: ObservabilityState) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .route("/health/live", get(liveness_handler))
        .with_state(state)
}

async fn metrics_handler() -> Response {
    (StatusCode::OK, METRICS.export()).into_response()
}

async fn health_handler(State(state): State<ObservabilityState>) -> Response {
    let reachable = state.storage_reachable().await;
    let response = state.health.check_health(reachable);

    let status_code = match response.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response)).into_response()
}

async fn readiness_handler(State(state): State<ObservabilityState>) -> Response {
    let reachable = state.storage_reachable().await;
    if state.health.check_readiness(reachable) {
        StatusCode::OK.into_response()
    } else {
        StatusCode::SERVICE_UNAVAILABLE.into_response()
    }
}

async fn liveness_handler(State(state): State<ObservabilityState>) -> Response {
    if state.health.check_liveness() {
        StatusCode::OK.into_response()
    } else {
        StatusCode::SERVICE_UNAVAILABLE.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryCategoryGateway;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn state() -> ObservabilityState {
        ObservabilityState {
            health: Arc::new(HealthChecker::new("1.0.0", "memory")),
            service: Arc::new(CatalogService::new(Arc::new(InMemoryCategoryGateway::new()))),
        }
    }

    async fn get_path(router: Router, path: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_storage() {
        let (status, body) = get_path(routes(state()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"storage\":\"memory\""));
        assert!(body.contains("\"storage_reachable\":true"));
    }

    #[tokio::test]
    async fn test_readiness_follows_status() {
        let state = state();
        let (status, _) = get_path(routes(state.clone()), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        state.health.set_status(HealthStatus::Unhealthy);
        let (status, _) = get_path(routes(state.clone()), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) = get_path(routes(state), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        METRICS.use_case_total.with_label_values(&["get_category", "success"]).inc();

        let (status, body) = get_path(routes(state()), "/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("catalog_admin_use_case_total"));
    }
}
