//! CarRent ImageKit: [`ImageStore`](carrent_core::image::ImageStore)
//! backed by the ImageKit media API.
//!
//! Uploads go to the upload endpoint with the private key as HTTP basic
//! credentials; delivery URLs are built locally by prefixing the file
//! path with a `tr:` transformation segment.

mod client;
pub mod config;
pub mod error;
mod url;

pub use client::ImageKitClient;
pub use config::ImageKitConfig;
pub use error::ImageKitError;
