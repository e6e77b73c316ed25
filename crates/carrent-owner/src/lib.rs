//! CarRent Owner: the services behind the owner-facing API (car listings,
//! the booking dashboard and profile updates).
//!
//! Every service is generic over the `carrent-core` repository and
//! image store traits, so this crate has no dependency on the database
//! or on a concrete image provider.

pub mod config;
pub mod dashboard;
pub mod listing;
pub mod profile;
mod upload;

pub use config::{ImagePolicies, ImagePolicy};
pub use dashboard::DashboardService;
pub use listing::CarListingService;
pub use profile::ProfileService;
