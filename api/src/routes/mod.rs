mod health;
mod status;

use axum::{Router, http::Method, middleware, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{errors::ApiError, middleware::request_id_layer, states::AppState};

pub use health::health_check;
pub use status::status;

/// Fallback for every path without a route.
async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Build the router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only endpoints, callable from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(status))
        // ALB health check
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Outermost, so the request span covers everything below
        .layer(middleware::from_fn(request_id_layer))
}
