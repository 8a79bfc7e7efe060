//! Axum web service for document text extraction.
//!
//! The router is built here so integration tests can drive it without
//! binding a socket; the server binary lives in `main.rs`.

pub mod handlers;
pub mod models;
pub mod state;
pub mod upload;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router with permissive CORS and the given
/// request body limit.
pub fn app(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/parse_document", post(handlers::parse::parse_document))
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .with_state(state)
}
