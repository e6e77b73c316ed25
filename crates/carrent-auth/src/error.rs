//! Token verification error types.

use carrent_core::error::CarRentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("JWT secret is not configured")]
    SecretMissing,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for CarRentError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken | AuthError::TokenExpired | AuthError::TokenInvalid(_) => {
                CarRentError::AuthenticationFailed {
                    reason: err.to_string(),
                }
            }
            AuthError::SecretMissing | AuthError::Crypto(_) => {
                CarRentError::Internal(err.to_string())
            }
        }
    }
}
