//! # pay-api
//!
//! HTTP layer of the order intake service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The create-order endpoint (Supabase auth → Cashfree order → token)
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | OPTIONS | `/functions/v1/create-cashfree-order` | CORS preflight (`ok`) |
//! | POST | `/functions/v1/create-cashfree-order` | Create order, returns `order_token` |

pub mod cors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_router, CREATE_ORDER_PATH};
pub use state::{AppConfig, AppState, LogFormat};
