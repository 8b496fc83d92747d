//! Cache inspection handler.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::infra::http::api::models::{CacheStampEntry, CacheStampsResponse};
use crate::infra::http::api::state::ApiState;

/// `GET /api/v1/cache/stamps`: per-tag invalidation stamps, for checking
/// that a write actually marked its dependent renders stale.
pub async fn cache_stamps(State(state): State<ApiState>) -> impl IntoResponse {
    let stamps = state
        .stamps
        .snapshot()
        .into_iter()
        .map(|(tag, stamp)| CacheStampEntry { tag, stamp })
        .collect();

    Json(CacheStampsResponse { stamps })
}
