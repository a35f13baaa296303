//! # Supabase Configuration
//!
//! Project URL and anonymous key, loaded from environment variables.

use pay_core::PaymentError;
use std::env;
use std::fmt;

/// Supabase project configuration
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g. `https://abcd.supabase.co`)
    pub url: String,

    /// Anonymous (public) API key
    pub anon_key: String,
}

impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &"***")
            .finish()
    }
}

impl SupabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PaymentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("SUPABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| PaymentError::Configuration("SUPABASE_URL not set".to_string()))?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PaymentError::Configuration(
                "SUPABASE_URL must start with http:// or https://".to_string(),
            ));
        }

        let anon_key = lookup("SUPABASE_ANON_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                PaymentError::Configuration("SUPABASE_ANON_KEY not set".to_string())
            })?;

        Ok(Self::new(url, anon_key))
    }

    /// Create config with explicit values (for testing)
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// GoTrue "current user" endpoint
    pub fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_url() {
        let config = SupabaseConfig::new("https://abcd.supabase.co/", "anon");
        assert_eq!(config.user_url(), "https://abcd.supabase.co/auth/v1/user");
    }

    #[test]
    fn test_from_lookup() {
        let config = SupabaseConfig::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("https://abcd.supabase.co".to_string()),
            "SUPABASE_ANON_KEY" => Some("anon-key".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.anon_key, "anon-key");
        assert!(!format!("{:?}", config).contains("anon-key"));
    }

    #[test]
    fn test_missing_values() {
        assert!(SupabaseConfig::from_lookup(|_| None).is_err());

        let result = SupabaseConfig::from_lookup(|key| {
            (key == "SUPABASE_URL").then(|| "abcd.supabase.co".to_string())
        });
        assert!(matches!(result, Err(PaymentError::Configuration(_))));
    }
}
