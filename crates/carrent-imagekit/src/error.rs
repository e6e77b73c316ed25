//! ImageKit client errors.

use carrent_core::error::CarRentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageKitError {
    #[error("request to ImageKit failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ImageKit responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected ImageKit response: {0}")]
    Malformed(String),
}

impl From<ImageKitError> for CarRentError {
    fn from(err: ImageKitError) -> Self {
        CarRentError::Upload(err.to_string())
    }
}
