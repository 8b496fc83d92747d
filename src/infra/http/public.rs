//! Public read surface: composed JSON views the site renderer consumes.
//!
//! Every route here corresponds to one cached render and therefore one
//! cache tag; the composition itself is assembled fresh on each request
//! and never stored.

use axum::{Json, Router, extract::State, middleware as axum_middleware, response::IntoResponse, routing::get};

use crate::domain::content::PageKind;

use super::api::error::ApiError;
use super::api::models::PageResponse;
use super::api::state::ApiState;
use super::middleware::log_responses;

pub fn build_public_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/terms-and-conditions", get(terms))
        .route("/privacy-policy", get(privacy))
        .route("/footer", get(footer))
        .route("/healthz", get(super::health))
        .with_state(state)
        .layer(axum_middleware::from_fn(log_responses))
}

/// The home render: home document plus active offerings.
async fn home(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let view = state.site.home().await?;
    Ok(Json(view))
}

/// The footer render: company info plus active offerings.
async fn footer(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let view = state.site.footer().await?;
    Ok(Json(view))
}

async fn about(state: State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    page_view(state, PageKind::About).await
}

async fn contact(state: State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    page_view(state, PageKind::Contact).await
}

async fn terms(state: State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    page_view(state, PageKind::Terms).await
}

async fn privacy(state: State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    page_view(state, PageKind::Privacy).await
}

/// `null` when the page was never saved; the renderer falls back to its
/// default copy.
async fn page_view(
    State(state): State<ApiState>,
    kind: PageKind,
) -> Result<impl IntoResponse, ApiError> {
    let document = state.content.page(kind).await?;
    let response = document
        .map(PageResponse::from_document)
        .transpose()
        .map_err(|_| ApiError::internal("stored content is not serializable"))?;

    Ok(Json(response))
}
