//! Page handlers: singleton read and upsert by slug.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::domain::content::PageKind;
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::PageResponse;
use crate::infra::http::api::state::ApiState;

fn kind_from_slug(slug: &str) -> Result<PageKind, ApiError> {
    PageKind::from_slug(slug).ok_or_else(|| ApiError::not_found("unknown page slug"))
}

/// `GET /api/v1/pages/{slug}`: the stored document, or `null` when the
/// page was never saved.
pub async fn get_page(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = kind_from_slug(&slug)?;

    let document = state.content.page(kind).await?;
    let response = document
        .map(PageResponse::from_document)
        .transpose()
        .map_err(|_| ApiError::internal("stored content is not serializable"))?;

    Ok(Json(response))
}

/// `PUT /api/v1/pages/{slug}`: validate and upsert the document.
pub async fn put_page(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = kind_from_slug(&slug)?;

    let document = state.content.save_page(kind, payload).await?;
    let response = PageResponse::from_document(document)
        .map_err(|_| ApiError::internal("stored content is not serializable"))?;

    Ok(Json(response))
}
