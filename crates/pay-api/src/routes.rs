//! # Routes
//!
//! Axum router configuration for the order intake API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

/// Path of the create-order function
pub const CREATE_ORDER_PATH: &str = "/functions/v1/create-cashfree-order";

/// Create the main application router
///
/// Routes:
/// - ANY /functions/v1/create-cashfree-order - Create order (OPTIONS is the CORS preflight)
/// - GET /health - Health check
///
/// CORS headers are set by the handler itself so the preflight can answer
/// with its `ok` body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(CREATE_ORDER_PATH, any(handlers::create_cashfree_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
