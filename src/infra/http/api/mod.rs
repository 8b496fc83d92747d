pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::ApiState;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch},
};

use crate::infra::http::middleware::log_responses;

pub fn build_api_router(state: ApiState) -> Router {
    Router::new()
        .route(
            "/api/v1/pages/{slug}",
            get(handlers::get_page).put(handlers::put_page),
        )
        .route(
            "/api/v1/offerings",
            get(handlers::list_offerings).post(handlers::create_offering),
        )
        .route(
            "/api/v1/offerings/{id}",
            patch(handlers::update_offering).delete(handlers::delete_offering),
        )
        .route("/api/v1/cache/stamps", get(handlers::cache_stamps))
        .route("/healthz", get(super::health))
        .with_state(state)
        .layer(axum_middleware::from_fn(log_responses))
}
