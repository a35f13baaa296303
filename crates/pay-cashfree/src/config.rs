//! # Cashfree Configuration
//!
//! Configuration management for the Cashfree integration.
//! All secrets are loaded from environment variables.

use pay_core::PaymentError;
use std::env;
use std::fmt;

/// Cashfree API version sent with every request
pub const API_VERSION: &str = "2022-09-01";

const SANDBOX_BASE_URL: &str = "https://sandbox.cashfree.com/pg";
const PRODUCTION_BASE_URL: &str = "https://api.cashfree.com/pg";

/// Which Cashfree environment to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CashfreeEnvironment {
    #[default]
    Sandbox,
    Production,
}

impl CashfreeEnvironment {
    /// Parse `sandbox` / `production` (case-insensitive)
    pub fn parse(value: &str) -> Result<Self, PaymentError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sandbox" | "test" => Ok(Self::Sandbox),
            "production" | "prod" | "live" => Ok(Self::Production),
            other => Err(PaymentError::Configuration(format!(
                "CASHFREE_ENVIRONMENT must be sandbox or production, got {}",
                other
            ))),
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Cashfree API configuration
#[derive(Clone)]
pub struct CashfreeConfig {
    /// App ID (`x-client-id`)
    pub client_id: String,

    /// Secret key (`x-client-secret`)
    pub client_secret: String,

    /// Sandbox or production
    pub environment: CashfreeEnvironment,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,
}

// Keeps the secret out of logs.
impl fmt::Debug for CashfreeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CashfreeConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("environment", &self.environment)
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl CashfreeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `CASHFREE_CLIENT_ID`
    /// - `CASHFREE_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `CASHFREE_ENVIRONMENT` (`sandbox` by default)
    /// - `CASHFREE_API_URL` (overrides the environment's base URL)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PaymentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| PaymentError::Configuration(format!("{} not set", key)))
        };

        let client_id = required("CASHFREE_CLIENT_ID")?;
        let client_secret = required("CASHFREE_CLIENT_SECRET")?;

        let environment = match lookup("CASHFREE_ENVIRONMENT") {
            Some(value) => CashfreeEnvironment::parse(&value)?,
            None => CashfreeEnvironment::default(),
        };

        let mut config = Self::new(client_id, client_secret).with_environment(environment);
        if let Some(url) = lookup("CASHFREE_API_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_api_base_url(url);
        }

        Ok(config)
    }

    /// Create sandbox config with explicit credentials (for testing)
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        let environment = CashfreeEnvironment::Sandbox;
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            environment,
            api_base_url: environment.base_url().to_string(),
            api_version: API_VERSION.to_string(),
        }
    }

    /// Builder: switch environment (resets the base URL)
    pub fn with_environment(mut self, environment: CashfreeEnvironment) -> Self {
        self.environment = environment;
        self.api_base_url = environment.base_url().to_string();
        self
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Check if using the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.environment == CashfreeEnvironment::Sandbox
    }

    /// Create-order endpoint
    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_sandbox() {
        let config = CashfreeConfig::from_lookup(lookup(&[
            ("CASHFREE_CLIENT_ID", "app_123"),
            ("CASHFREE_CLIENT_SECRET", "secret"),
        ]))
        .unwrap();

        assert!(config.is_sandbox());
        assert_eq!(config.orders_url(), "https://sandbox.cashfree.com/pg/orders");
        assert_eq!(config.api_version, "2022-09-01");
    }

    #[test]
    fn test_production_environment() {
        let config = CashfreeConfig::from_lookup(lookup(&[
            ("CASHFREE_CLIENT_ID", "app_123"),
            ("CASHFREE_CLIENT_SECRET", "secret"),
            ("CASHFREE_ENVIRONMENT", "Production"),
        ]))
        .unwrap();

        assert!(!config.is_sandbox());
        assert_eq!(config.orders_url(), "https://api.cashfree.com/pg/orders");
    }

    #[test]
    fn test_url_override() {
        let config = CashfreeConfig::from_lookup(lookup(&[
            ("CASHFREE_CLIENT_ID", "app_123"),
            ("CASHFREE_CLIENT_SECRET", "secret"),
            ("CASHFREE_API_URL", "http://127.0.0.1:9000/pg/"),
        ]))
        .unwrap();

        assert_eq!(config.orders_url(), "http://127.0.0.1:9000/pg/orders");
    }

    #[test]
    fn test_missing_secret() {
        let result = CashfreeConfig::from_lookup(lookup(&[("CASHFREE_CLIENT_ID", "app_123")]));
        assert!(matches!(result, Err(PaymentError::Configuration(_))));
    }

    #[test]
    fn test_unknown_environment() {
        assert!(CashfreeEnvironment::parse("staging").is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = CashfreeConfig::new("app_123", "very-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("very-secret"));
    }
}
