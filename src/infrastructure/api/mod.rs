/// HTTP API
///
/// Builds the axum router: category routes, the OpenAPI document and the
/// observability endpoints, wrapped in a layer that counts responses by
/// method and status.
///
/// ## Modules
/// - `routes`: category handlers
/// - `models`: request and response bodies
/// - `presenter`: use case output to response conversions
/// - `error`: `ApiError` and the status code mapping
/// - `openapi`: the `/api-docs` document

pub mod error;
pub mod models;
pub mod openapi;
pub mod presenter;
pub mod routes;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::application::CatalogService;
use crate::infrastructure::observability::{self, HealthChecker, ObservabilityState};
use crate::shared::metrics::METRICS;

pub use error::ApiError;

/// Shared state of the category handlers
pub struct AppState {
    pub service: Arc<CatalogService>,
}

pub fn router(service: Arc<CatalogService>, health: Arc<HealthChecker>) -> Router {
    let observability = observability::routes(ObservabilityState {
        health,
        service: service.clone(),
    });

    routes::category_routes()
        .with_state(Arc::new(AppState { service }))
        .route("/api-docs", get(openapi::api_docs))
        .merge(observability)
        // 统计所有响应，包括健康检查与指标端点
        .layer(middleware::from_fn(track_responses))
}

async fn track_responses(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    METRICS
        .http_responses_total
        .with_label_values(&[method.as_str(), status.as_str()])
        .inc();
    debug!(%method, path = %path, status = status.as_u16(), elapsed_ms = start.elapsed().as_millis() as u64, "request handled");

    response
}
