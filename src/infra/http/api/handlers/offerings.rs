//! Offering handlers: list and CRUD.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::OfferingListQuery;
use crate::infra::http::api::state::ApiState;

/// `GET /api/v1/offerings?active=true`
pub async fn list_offerings(
    State(state): State<ApiState>,
    Query(query): Query<OfferingListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let offerings = state.offerings.list(query.active).await?;
    Ok(Json(offerings))
}

/// `POST /api/v1/offerings`
pub async fn create_offering(
    State(state): State<ApiState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let offering = state.offerings.create(payload).await?;
    Ok((StatusCode::CREATED, Json(offering)))
}

/// `PATCH /api/v1/offerings/{id}`
pub async fn update_offering(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    if id <= 0 {
        return Err(ApiError::bad_request("offering id must be positive"));
    }

    let offering = state.offerings.update(id, payload).await?;
    Ok(Json(offering))
}

/// `DELETE /api/v1/offerings/{id}`. Responds with the removed row.
pub async fn delete_offering(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if id <= 0 {
        return Err(ApiError::bad_request("offering id must be positive"));
    }

    let offering = state.offerings.delete(id).await?;
    Ok(Json(offering))
}
