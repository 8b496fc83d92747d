pub mod api;
mod middleware;
mod public;

pub use api::{ApiState, build_api_router};
pub use public::build_public_router;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// `GET /healthz` probes the backing store.
pub(crate) async fn health(State(state): State<ApiState>) -> Response {
    match state.health.check().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}
