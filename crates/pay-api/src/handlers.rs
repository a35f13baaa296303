//! # Request Handlers
//!
//! Axum request handlers for the order intake API.
//!
//! The create-order handler answers every method: `OPTIONS` is a CORS
//! preflight, anything else runs the full intake flow. Failures at any step
//! end the request with `400 {"error": "..."}`.

use crate::cors::cors_headers;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pay_core::{ErrorKind, OrderPayload, OrderRequest, PaymentError, PaymentResult};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create order response
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    /// Gateway session token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_token: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn payment_error_to_response(err: PaymentError) -> Response {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, cors_headers(), Json(ErrorResponse::new(err.to_string()))).into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "order-intake",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a Cashfree order for the authenticated caller
#[instrument(skip_all, fields(method = %method))]
pub async fn create_cashfree_order(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::OK, cors_headers(), "ok").into_response();
    }

    let result = match body {
        Ok(body) => create_order_internal(&state, &headers, &body).await,
        // Oversized or unreadable bodies fail like any other bad input.
        Err(rejection) => Err(PaymentError::Serialization(rejection.body_text())),
    };

    match result {
        Ok(response) => (StatusCode::OK, cors_headers(), Json(response)).into_response(),
        Err(e) => {
            match e.kind() {
                ErrorKind::Validation | ErrorKind::Auth => {
                    warn!(kind = e.kind().as_str(), "Order rejected: {}", e)
                }
                _ => error!(kind = e.kind().as_str(), "Order failed: {}", e),
            }
            payment_error_to_response(e)
        }
    }
}

/// Validate, authenticate, build the payload, and call the gateway
async fn create_order_internal(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> PaymentResult<CreateOrderResponse> {
    let request = OrderRequest::from_json(body)?;

    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(PaymentError::NotAuthenticated)?;

    let user = state
        .identity
        .get_user(authorization)
        .await?
        .ok_or(PaymentError::NotAuthenticated)?;

    let order_id = state.order_ids.next_id();
    let payload = OrderPayload::build(order_id, &request, &user, &state.settings);

    info!(
        "Creating order: order_id={}, amount={}, items={}, user={}, provider={}",
        payload.order_id,
        payload.order_amount,
        request.item_count(),
        user.id,
        state.gateway.provider_name()
    );

    let order = state.gateway.create_order(&payload).await?;

    info!("Created order: order_id={}", order.order_id);

    Ok(CreateOrderResponse {
        order_token: order.order_token,
    })
}
