/// HTTP error responses
///
/// Every failure is rendered as `{ "message": ..., "errors": [{ "message": ... }] }`.
///
/// | source                    | status |
/// |---------------------------|--------|
/// | `UseCaseError::Validation`| 422    |
/// | `UseCaseError::NotFound`  | 404    |
/// | `UseCaseError::Unexpected`| 500    |
/// | invalid query parameter   | 400    |
/// | malformed body            | status chosen by the extractor |

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::UseCaseError;
use crate::domain::category::InvalidSearchParameter;
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
    pub errors: Vec<ValidationError>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        let status = match &e {
            UseCaseError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            UseCaseError::NotFound { .. } => StatusCode::NOT_FOUND,
            UseCaseError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: e.to_string(),
            errors: e.errors().to_vec(),
        }
    }
}

impl From<InvalidSearchParameter> for ApiError {
    fn from(e: InvalidSearchParameter) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(&self)).into_response()
    }
}
