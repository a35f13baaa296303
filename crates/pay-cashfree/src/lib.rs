//! # pay-cashfree
//!
//! Cashfree payment gateway strategy for the order intake service.
//!
//! **CashfreeOrderStrategy** calls the PG "create order" endpoint
//! (`POST /pg/orders`, API version `2022-09-01`) and returns the order token
//! the client uses to open the Cashfree checkout.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_cashfree::CashfreeOrderStrategy;
//! use pay_core::PaymentStrategy;
//!
//! // Create strategy from environment
//! let strategy = CashfreeOrderStrategy::from_env()?;
//!
//! let order = strategy.create_order(&payload).await?;
//!
//! // Return order.order_token to the client
//! ```

pub mod config;
pub mod orders;

// Re-exports
pub use config::{CashfreeConfig, CashfreeEnvironment, API_VERSION};
pub use orders::CashfreeOrderStrategy;
