//! # Identity
//!
//! The authenticated caller and the trait identity providers implement.

use crate::error::PaymentResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Phone number sent to the gateway when the user has none on file
pub const FALLBACK_CUSTOMER_PHONE: &str = "9999999999";

/// A user record owned by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Provider's user ID
    pub id: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Phone number (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            phone: None,
        }
    }

    /// Builder: set phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Phone to hand to the gateway. Blank numbers count as missing.
    pub fn contact_phone(&self) -> &str {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(FALLBACK_CUSTOMER_PHONE)
    }
}

/// Resolves an inbound `Authorization` header to a user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Look up the user behind `authorization` (the raw header value).
    ///
    /// Returns `Ok(None)` when the credential does not resolve to a user.
    async fn get_user(&self, authorization: &str) -> PaymentResult<Option<AuthenticatedUser>>;

    /// Provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared identity provider (dynamic dispatch)
pub type BoxedIdentityProvider = Arc<dyn IdentityProvider>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_phone_fallback() {
        let user = AuthenticatedUser::new("u1", "a@example.com");
        assert_eq!(user.contact_phone(), "9999999999");

        let user = user.with_phone("");
        assert_eq!(user.contact_phone(), "9999999999");

        let user = AuthenticatedUser::new("u1", "a@example.com").with_phone("919876543210");
        assert_eq!(user.contact_phone(), "919876543210");
    }

    #[test]
    fn test_deserialize_without_phone() {
        let user: AuthenticatedUser =
            serde_json::from_str(r#"{"id":"u1","email":"a@example.com"}"#).unwrap();
        assert_eq!(user.phone, None);
        assert_eq!(user.email, "a@example.com");
    }

    #[tokio::test]
    async fn test_boxed_provider() {
        struct Fixed;

        #[async_trait]
        impl IdentityProvider for Fixed {
            async fn get_user(&self, authorization: &str) -> PaymentResult<Option<AuthenticatedUser>> {
                Ok((authorization == "Bearer good")
                    .then(|| AuthenticatedUser::new("u1", "a@example.com")))
            }

            fn provider_name(&self) -> &'static str {
                "fixed"
            }
        }

        let provider: BoxedIdentityProvider = Arc::new(Fixed);
        assert!(provider.get_user("Bearer good").await.unwrap().is_some());
        assert!(provider.get_user("Bearer bad").await.unwrap().is_none());
    }
}
