//! # Order Intake
//!
//! Turns an authenticated cart into a Cashfree order token.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export SUPABASE_URL=https://<project>.supabase.co
//! export SUPABASE_ANON_KEY=...
//! export CASHFREE_CLIENT_ID=...
//! export CASHFREE_CLIENT_SECRET=...
//! export CASHFREE_ENVIRONMENT=sandbox
//!
//! # Run the server
//! order-intake
//! ```

use pay_api::{routes, AppConfig, AppState, LogFormat, CREATE_ORDER_PATH};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }

    let addr = config.socket_addr()?;
    let is_prod = config.is_production();

    // Initialize application state
    let state = AppState::new(config)?;

    info!("Environment: {}", state.config.environment);
    info!(
        "Identity provider: {}, payment provider: {}",
        state.identity.provider_name(),
        state.gateway.provider_name()
    );

    let app = routes::create_router(state);

    info!("Order intake starting on http://{}", addr);

    if !is_prod {
        info!("Health: http://{}/health", addr);
        info!("Create order: POST http://{}{}", addr, CREATE_ORDER_PATH);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
