//! CarRent Auth: verification of identity tokens issued by the
//! external identity provider.
//!
//! The service never signs users in. It only checks that a bearer
//! token was signed with the shared secret and extracts the user id.

pub mod config;
pub mod error;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use token::{AccessTokenClaims, decode_access_token, issue_access_token};
