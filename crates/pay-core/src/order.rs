//! # Order Types
//!
//! Inbound order requests, the gateway payload built from them, and the
//! normalized gateway result.

use crate::error::{PaymentError, PaymentResult};
use crate::identity::AuthenticatedUser;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Currency every order is placed in
pub const ORDER_CURRENCY: &str = "INR";

/// Default landing page after payment
pub const DEFAULT_RETURN_URL: &str = "http://localhost/order-success";

/// Default note attached to every order
pub const DEFAULT_ORDER_NOTE: &str = "StreetR Food Order";

const MISSING_ORDER_DETAILS: &str = "Total amount and cart details are required.";

/// A validated order request from the client
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    /// Amount to charge, in major units
    pub total_amount: f64,

    /// Cart contents, passed through untouched
    pub cart: Vec<serde_json::Value>,
}

impl OrderRequest {
    /// Parse and validate a raw JSON body.
    ///
    /// Malformed JSON is a serialization error; a missing or non-positive
    /// `total_amount`, or a missing or empty `cart`, is an invalid request.
    pub fn from_json(body: &[u8]) -> PaymentResult<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| PaymentError::Serialization(e.to_string()))?;

        let total_amount = value
            .get("total_amount")
            .and_then(|v| v.as_f64())
            .filter(|amount| amount.is_finite() && *amount > 0.0);

        let cart = value
            .get("cart")
            .and_then(|v| v.as_array())
            .filter(|items| !items.is_empty());

        match (total_amount, cart) {
            (Some(total_amount), Some(cart)) => Ok(Self {
                total_amount,
                cart: cart.clone(),
            }),
            _ => Err(PaymentError::InvalidRequest(
                MISSING_ORDER_DETAILS.to_string(),
            )),
        }
    }

    /// Number of cart entries
    pub fn item_count(&self) -> usize {
        self.cart.len()
    }
}

/// Fixed inputs to payload construction
#[derive(Debug, Clone)]
pub struct OrderSettings {
    /// Page the gateway sends the customer back to
    pub return_url: String,
    /// Free-text note on every order
    pub order_note: String,
}

impl OrderSettings {
    pub fn new(return_url: impl Into<String>, order_note: impl Into<String>) -> Self {
        Self {
            return_url: return_url.into(),
            order_note: order_note.into(),
        }
    }

    /// Return URL for a specific order
    pub fn return_url_for(&self, order_id: &str) -> String {
        if self.return_url.contains('?') {
            format!("{}&order_id={}", self.return_url, order_id)
        } else {
            format!("{}?order_id={}", self.return_url, order_id)
        }
    }
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self::new(DEFAULT_RETURN_URL, DEFAULT_ORDER_NOTE)
    }
}

/// Hands out `order_<millis>` identifiers.
///
/// Ids are strictly increasing within the process: when the clock has not
/// moved past the last issued value, the next integer is used instead.
#[derive(Debug, Default)]
pub struct OrderIdGenerator {
    last: AtomicI64,
}

impl OrderIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next order id based on the current wall clock
    pub fn next_id(&self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&self, now_millis: i64) -> String {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = if now_millis > last { now_millis } else { last + 1 };
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return format!("order_{}", candidate),
                Err(current) => last = current,
            }
        }
    }
}

/// Customer block of the gateway payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub customer_id: String,
    pub customer_email: String,
    pub customer_phone: String,
}

/// Meta block of the gateway payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMeta {
    pub return_url: String,
}

/// Body of the gateway "create order" call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub order_id: String,
    pub order_amount: f64,
    pub order_currency: String,
    pub customer_details: CustomerDetails,
    pub order_meta: OrderMeta,
    pub order_note: String,
}

impl OrderPayload {
    /// Build the payload for one request
    pub fn build(
        order_id: impl Into<String>,
        request: &OrderRequest,
        user: &AuthenticatedUser,
        settings: &OrderSettings,
    ) -> Self {
        let order_id = order_id.into();
        Self {
            order_meta: OrderMeta {
                return_url: settings.return_url_for(&order_id),
            },
            order_id,
            order_amount: request.total_amount,
            order_currency: ORDER_CURRENCY.to_string(),
            customer_details: CustomerDetails {
                customer_id: user.id.clone(),
                customer_email: user.email.clone(),
                customer_phone: user.contact_phone().to_string(),
            },
            order_note: settings.order_note.clone(),
        }
    }
}

/// Order as created by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Our order ID, echoed back
    pub order_id: String,

    /// Token the client uses to open the payment page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_token: Option<String>,

    /// Session ID (newer gateway API versions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_session_id: Option<String>,

    /// Gateway's own order reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_order_id: Option<String>,

    /// Gateway order status (e.g. "ACTIVE")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl GatewayOrder {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            order_token: None,
            payment_session_id: None,
            gateway_order_id: None,
            status: None,
        }
    }

    /// Builder: set order token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.order_token = Some(token.into());
        self
    }
}
