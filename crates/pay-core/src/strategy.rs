//! # Payment Strategy Trait
//!
//! The seam between the order intake handler and the payment gateway.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentStrategy (trait)                  │
//! │  ├── create_order()                                         │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!                  │CashfreeOrder      │
//!                  │   Strategy        │
//!                  └───────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::{GatewayOrder, OrderPayload};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment gateway implementations.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// Create an order with the gateway.
    ///
    /// # Arguments
    /// * `payload` - The fully built order payload
    ///
    /// # Returns
    /// The gateway's view of the order, including its session token.
    async fn create_order(&self, payload: &OrderPayload) -> PaymentResult<GatewayOrder>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;
