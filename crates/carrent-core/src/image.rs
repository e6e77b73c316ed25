//! Image Store abstraction.
//!
//! Images are uploaded once and then served through derived URLs that
//! encode resize / quality / format transformations applied on
//! retrieval.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::CarRentResult;

/// An image received from a client, not yet uploaded.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// A file accepted by the image store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Store-side identifier, used for deletion.
    pub file_id: String,
    /// Path of the file inside the store, e.g. `/cars/corolla_x1y2.jpg`.
    pub file_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Webp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTransformation {
    pub width: Option<u32>,
    pub quality: Option<ImageQuality>,
    pub format: Option<ImageFormat>,
}

impl ImageTransformation {
    /// Width-bounded, automatically compressed WebP rendition.
    pub fn web_optimized(width: u32) -> Self {
        Self {
            width: Some(width),
            quality: Some(ImageQuality::Auto),
            format: Some(ImageFormat::Webp),
        }
    }
}

pub trait ImageStore: Send + Sync {
    fn upload(
        &self,
        blob: Bytes,
        file_name: &str,
        folder: &str,
    ) -> impl Future<Output = CarRentResult<UploadedImage>> + Send;

    fn delete(&self, file_id: &str) -> impl Future<Output = CarRentResult<()>> + Send;

    fn derive_url(&self, file_path: &str, transformation: &ImageTransformation) -> String;
}
