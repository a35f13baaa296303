//! # pay-core
//!
//! Core types and traits for the order intake service.
//!
//! This crate provides:
//! - `OrderRequest`, `OrderPayload` and `GatewayOrder` for the create-order flow
//! - `OrderIdGenerator` for `order_<millis>` identifiers
//! - `AuthenticatedUser` and the `IdentityProvider` trait
//! - `PaymentStrategy` trait for payment gateways
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{OrderIdGenerator, OrderPayload, OrderRequest, OrderSettings};
//!
//! let request = OrderRequest::from_json(&body)?;
//! let user = identity.get_user(authorization).await?.ok_or(PaymentError::NotAuthenticated)?;
//!
//! let payload = OrderPayload::build(ids.next_id(), &request, &user, &OrderSettings::default());
//! let order = strategy.create_order(&payload).await?;
//!
//! // Hand order.order_token to the client
//! ```

pub mod error;
pub mod identity;
pub mod order;
pub mod strategy;

// Re-exports for convenience
pub use error::{ErrorKind, PaymentError, PaymentResult};
pub use identity::{
    AuthenticatedUser, BoxedIdentityProvider, IdentityProvider, FALLBACK_CUSTOMER_PHONE,
};
pub use order::{
    CustomerDetails, GatewayOrder, OrderIdGenerator, OrderMeta, OrderPayload, OrderRequest,
    OrderSettings, DEFAULT_ORDER_NOTE, DEFAULT_RETURN_URL, ORDER_CURRENCY,
};
pub use strategy::{BoxedPaymentStrategy, PaymentStrategy};
