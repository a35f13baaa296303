//! # Payment Error Types
//!
//! Typed error handling for the order intake flow.
//! All operations return `Result<T, PaymentError>`; the `Display` output of
//! each variant is exactly the message relayed to the caller.

use thiserror::Error;

/// Core error type for all order intake operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing or empty order input
    #[error("{0}")]
    InvalidRequest(String),

    /// The caller's credential did not resolve to a user
    #[error("User not authenticated.")]
    NotAuthenticated,

    /// Payment gateway answered with a non-success status
    #[error("{provider} API Error: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error talking to a collaborator
    #[error("{0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("{0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("{0}")]
    Internal(String),
}

/// Coarse error taxonomy used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Auth,
    Gateway,
    Unexpected,
    Configuration,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Auth => "auth",
            ErrorKind::Gateway => "gateway",
            ErrorKind::Unexpected => "unexpected",
            ErrorKind::Configuration => "configuration",
        }
    }
}

impl PaymentError {
    /// Which bucket of the taxonomy this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaymentError::Configuration(_) => ErrorKind::Configuration,
            PaymentError::InvalidRequest(_) => ErrorKind::Validation,
            PaymentError::NotAuthenticated => ErrorKind::Auth,
            PaymentError::ProviderError { .. } => ErrorKind::Gateway,
            PaymentError::NetworkError(_)
            | PaymentError::Serialization(_)
            | PaymentError::Internal(_) => ErrorKind::Unexpected,
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// Every request-time failure is reported as 400; configuration errors
    /// only happen at startup.
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            _ => 400,
        }
    }
}

/// Result type alias for order intake operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PaymentError::NotAuthenticated.to_string(),
            "User not authenticated."
        );
        assert_eq!(
            PaymentError::ProviderError {
                provider: "Cashfree".into(),
                message: "insufficient funds".into()
            }
            .to_string(),
            "Cashfree API Error: insufficient funds"
        );
        assert_eq!(
            PaymentError::NetworkError("connection refused".into()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaymentError::InvalidRequest("test".into()).status_code(),
            400
        );
        assert_eq!(PaymentError::NotAuthenticated.status_code(), 400);
        assert_eq!(
            PaymentError::Serialization("bad json".into()).status_code(),
            400
        );
        assert_eq!(
            PaymentError::Configuration("missing".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            PaymentError::InvalidRequest("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(PaymentError::NotAuthenticated.kind(), ErrorKind::Auth);
        assert_eq!(
            PaymentError::Internal("x".into()).kind().as_str(),
            "unexpected"
        );
    }
}
