//! # Cashfree Orders
//!
//! Implementation of the Cashfree PG "create order" API.

use crate::config::CashfreeConfig;
use async_trait::async_trait;
use pay_core::{GatewayOrder, OrderPayload, PaymentError, PaymentResult, PaymentStrategy};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Name used in gateway error messages
const PROVIDER_LABEL: &str = "Cashfree";

/// Cashfree order strategy
///
/// Creates an order and returns the token the client needs to open the
/// Cashfree payment page.
pub struct CashfreeOrderStrategy {
    config: CashfreeConfig,
    client: Client,
}

impl CashfreeOrderStrategy {
    /// Create a new Cashfree order strategy
    pub fn new(config: CashfreeConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = CashfreeConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &CashfreeConfig {
        &self.config
    }
}

#[async_trait]
impl PaymentStrategy for CashfreeOrderStrategy {
    #[instrument(skip(self, payload), fields(order_id = %payload.order_id, amount = payload.order_amount))]
    async fn create_order(&self, payload: &OrderPayload) -> PaymentResult<GatewayOrder> {
        let request_id = Uuid::new_v4().to_string();
        let url = self.config.orders_url();

        debug!("Creating Cashfree order: request_id={}, url={}", request_id, url);

        let response = self
            .client
            .post(&url)
            .header("x-api-version", &self.config.api_version)
            .header("x-client-id", &self.config.client_id)
            .header("x-client-secret", &self.config.client_secret)
            .header("x-request-id", &request_id)
            .json(payload)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!(
                "Cashfree API error: status={}, request_id={}, body={}",
                status, request_id, body
            );
            return Err(PaymentError::ProviderError {
                provider: PROVIDER_LABEL.to_string(),
                message: body,
            });
        }

        let order_response: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Cashfree response: {}", e))
        })?;

        let order = GatewayOrder {
            order_id: text_field(&order_response, "order_id")
                .unwrap_or_else(|| payload.order_id.clone()),
            order_token: text_field(&order_response, "order_token"),
            payment_session_id: text_field(&order_response, "payment_session_id"),
            gateway_order_id: text_field(&order_response, "cf_order_id"),
            status: text_field(&order_response, "order_status"),
        };

        info!(
            "Created Cashfree order: order_id={}, cf_order_id={:?}, status={:?}",
            payload.order_id, order.gateway_order_id, order.status
        );

        Ok(order)
    }

    fn provider_name(&self) -> &'static str {
        "cashfree"
    }
}

/// Reads a response field as text. Field types drift between API versions,
/// so numbers are rendered and anything else is ignored.
fn text_field(response: &serde_json::Value, key: &str) -> Option<String> {
    match response.get(key)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
