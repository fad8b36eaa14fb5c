/// Category HTTP handlers
///
/// | method & path              | handler           |
/// |----------------------------|-------------------|
/// | `POST /categories`         | `create_category` |
/// | `GET /categories`          | `list_categories` |
/// | `GET /categories/:id`      | `get_category`    |
/// | `PUT /categories/:id`      | `update_category` |
/// | `DELETE /categories/:id`   | `delete_category` |

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::info;

use super::error::ApiError;
use super::models::{
    CategoryResponse, CreateCategoryRequest, IdResponse, ListParams,
    UpdateCategoryRequest,
};
use super::AppState;
use crate::application::use_cases::{CreateCategoryCommand, UpdateCategoryCommand};
use crate::domain::pagination::Pagination;

pub fn category_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    // is_active 缺省为 true
    let command = CreateCategoryCommand::new(
        request.name,
        request.description,
        request.is_active.unwrap_or(true),
    );

    let output = state.service.create_category(command).await?;
    info!(id = %output.id, "category created");

    // 201 + Location 指向新资源

    let location = format!("/categories/{}", output.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(IdResponse::from(output)),
    )
        .into_response())
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Pagination<CategoryResponse>>, ApiError> {
    let Query(params) = params?;
    // 非法的 sort/dir/page 在这里转成 400
    let query = params.into_query()?;

    let page = state.service.list_categories(query).await?;
    Ok(Json(page.map(CategoryResponse::from)))
}

async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let output = state.service.get_category(id).await?;
    Ok(Json(CategoryResponse::from(output)))
}

async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<Json<IdResponse>, ApiError> {
    let Json(request) = payload?;
    let command = UpdateCategoryCommand::new(
        id,
        request.name,
        request.description,
        request.is_active.unwrap_or(true),
    );

    let output = state.service.update_category(command).await?;
    info!(id = %output.id, "category updated");
    Ok(Json(IdResponse::from(output)))
}

async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
