//! Route table and the end-to-end handler tests against a mock LLM.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::endpoints;
use super::types::AppState;

/// The full application router. CORS is open because the UI is a separate
/// process calling from another origin.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(endpoints::chat::chat))
        .route("/ask", post(endpoints::ask::ask))
        .route("/extract", post(endpoints::extract::extract))
        .route("/health", get(endpoints::health::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
