//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the identity provider, the payment strategy, and process-wide
//! order settings.

use pay_cashfree::CashfreeOrderStrategy;
use pay_core::{
    BoxedIdentityProvider, BoxedPaymentStrategy, OrderIdGenerator, OrderSettings, PaymentError,
    PaymentResult, DEFAULT_ORDER_NOTE, DEFAULT_RETURN_URL,
};
use pay_supabase::SupabaseIdentity;
use std::net::SocketAddr;
use std::sync::Arc;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Where the gateway sends customers after payment
    pub return_url: String,
    /// Note attached to every order
    pub order_note: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            return_url: lookup("ORDER_RETURN_URL")
                .unwrap_or_else(|| DEFAULT_RETURN_URL.to_string()),
            order_note: lookup("ORDER_NOTE").unwrap_or_else(|| DEFAULT_ORDER_NOTE.to_string()),
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> PaymentResult<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|e| {
            PaymentError::Configuration(format!(
                "Invalid socket address {}:{}: {}",
                self.host, self.port, e
            ))
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Order settings derived from this config
    pub fn order_settings(&self) -> OrderSettings {
        OrderSettings::new(&self.return_url, &self.order_note)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Resolves callers to users
    pub identity: BoxedIdentityProvider,
    /// Payment gateway
    pub gateway: BoxedPaymentStrategy,
    /// Order id source
    pub order_ids: Arc<OrderIdGenerator>,
    /// Fixed payload inputs
    pub settings: OrderSettings,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with Supabase identity and Cashfree gateway
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let identity = SupabaseIdentity::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Supabase: {}", e))?;

        let gateway = CashfreeOrderStrategy::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Cashfree: {}", e))?;

        if gateway.config().is_sandbox() {
            tracing::warn!("Cashfree is in sandbox mode");
        }

        Ok(Self::from_parts(config, Arc::new(identity), Arc::new(gateway)))
    }

    /// Assemble state from already-built collaborators
    pub fn from_parts(
        config: AppConfig,
        identity: BoxedIdentityProvider,
        gateway: BoxedPaymentStrategy,
    ) -> Self {
        Self {
            identity,
            gateway,
            order_ids: Arc::new(OrderIdGenerator::new()),
            settings: config.order_settings(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.return_url, "http://localhost/order-success");
        assert_eq!(config.order_note, "StreetR Food Order");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.is_production());
    }

    #[test]
    fn test_app_config_overrides() {
        let config = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("3000".to_string()),
            "ORDER_RETURN_URL" => Some("https://streetr.app/order-success".to_string()),
            "LOG_FORMAT" => Some("json".to_string()),
            "ENVIRONMENT" => Some("production".to_string()),
            _ => None,
        });

        assert_eq!(config.port, 3000);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.is_production());
        assert_eq!(
            config.order_settings().return_url_for("order_1"),
            "https://streetr.app/order-success?order_id=order_1"
        );
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ..AppConfig::default()
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");

        let bad = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };
        assert!(bad.socket_addr().is_err());
    }
}
