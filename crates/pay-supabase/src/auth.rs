//! # Supabase Auth
//!
//! Resolves the caller's bearer token to a user through GoTrue's
//! `GET /auth/v1/user`.

use crate::config::SupabaseConfig;
use async_trait::async_trait;
use pay_core::{AuthenticatedUser, IdentityProvider, PaymentError, PaymentResult};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Identity provider backed by Supabase Auth
pub struct SupabaseIdentity {
    config: SupabaseConfig,
    client: Client,
}

impl SupabaseIdentity {
    pub fn new(config: SupabaseConfig) -> PaymentResult<Self> {
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
        Self::new(SupabaseConfig::from_env()?)
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
    /// Rejected credentials resolve to `Ok(None)`. Transport failures are a
    /// `NetworkError`, unlike supabase-js `getUser()`, which reports them as
    /// no user.
    #[instrument(skip(self, authorization))]
    async fn get_user(&self, authorization: &str) -> PaymentResult<Option<AuthenticatedUser>> {
        if authorization.trim().is_empty() {
            return Ok(None);
        }

        let response = self
            .client
            .get(self.config.user_url())
            .header("apikey", &self.config.anon_key)
            .header("Authorization", authorization)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Supabase rejected credential: status={}, body={}", status, body);
            return Ok(None);
        }

        let user: SupabaseUser = response.json().await.map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Supabase user: {}", e))
        })?;

        debug!("Resolved Supabase user: id={}", user.id);

        Ok(Some(AuthenticatedUser {
            id: user.id,
            email: user.email.unwrap_or_default(),
            phone: user.phone.filter(|p| !p.trim().is_empty()),
        }))
    }

    fn provider_name(&self) -> &'static str {
        "supabase"
    }
}

// =============================================================================
// Supabase API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SupabaseUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}
