//! Token verification configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC secret shared with the identity provider (HS256).
    pub jwt_secret: String,
    /// Expected `iss` claim. Tokens are accepted from any issuer when unset.
    pub jwt_issuer: Option<String>,
    /// Lifetime of tokens minted by [`crate::issue_access_token`]
    /// (default: 604_800 = 7 days).
    pub access_token_lifetime_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_issuer: None,
            access_token_lifetime_secs: 604_800,
        }
    }
}
