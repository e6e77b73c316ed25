//! CarRent Server: axum HTTP surface over the owner services.
//!
//! Every endpoint answers HTTP 200 with a `{success, message?, ...}`
//! envelope; callers authenticate with an HS256 bearer token.

pub mod config;
pub mod cors;
pub mod extractor;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use routes::build_router;
pub use state::AppState;
