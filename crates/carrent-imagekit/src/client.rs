use std::time::Duration;

use bytes::Bytes;
use carrent_core::error::CarRentResult;
use carrent_core::image::{ImageStore, ImageTransformation, UploadedImage};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::config::ImageKitConfig;
use crate::error::ImageKitError;
use crate::url::build_url;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    file_id: String,
    file_path: String,
}

/// HTTP client for the ImageKit upload and management APIs.
#[derive(Clone)]
pub struct ImageKitClient {
    http: reqwest::Client,
    config: ImageKitConfig,
}

impl ImageKitClient {
    pub fn new(config: ImageKitConfig) -> Result<Self, ImageKitError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    async fn upload_file(
        &self,
        blob: Bytes,
        file_name: &str,
        folder: &str,
    ) -> Result<UploadedImage, ImageKitError> {
        let url = format!(
            "{}/api/v1/files/upload",
            self.config.upload_endpoint.trim_end_matches('/')
        );
        let size = blob.len();

        let form = Form::new()
            .part("file", Part::bytes(blob.to_vec()).file_name(file_name.to_string()))
            .text("fileName", file_name.to_string())
            .text("folder", folder.to_string())
            .text("useUniqueFileName", "true");

        let response = self
            .http
            .post(url)
            .basic_auth(&self.config.private_key, Some(""))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageKitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageKitError::Malformed(e.to_string()))?;

        debug!(
            file_id = %uploaded.file_id,
            file_path = %uploaded.file_path,
            bytes = size,
            "Uploaded image"
        );

        Ok(UploadedImage {
            file_id: uploaded.file_id,
            file_path: uploaded.file_path,
        })
    }

    async fn delete_file(&self, file_id: &str) -> Result<(), ImageKitError> {
        let url = format!(
            "{}/v1/files/{file_id}",
            self.config.api_endpoint.trim_end_matches('/')
        );

        let response = self
            .http
            .delete(url)
            .basic_auth(&self.config.private_key, Some(""))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageKitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(file_id, "Deleted image");
        Ok(())
    }
}

impl ImageStore for ImageKitClient {
    async fn upload(
        &self,
        blob: Bytes,
        file_name: &str,
        folder: &str,
    ) -> CarRentResult<UploadedImage> {
        Ok(self.upload_file(blob, file_name, folder).await?)
    }

    async fn delete(&self, file_id: &str) -> CarRentResult<()> {
        Ok(self.delete_file(file_id).await?)
    }

    fn derive_url(&self, file_path: &str, transformation: &ImageTransformation) -> String {
        build_url(&self.config.url_endpoint, file_path, transformation)
    }
}
