//! Upload-then-persist helpers shared by the listing and profile services.

use carrent_core::error::CarRentResult;
use carrent_core::image::{ImageFile, ImageStore, UploadedImage};
use tracing::{debug, warn};

use crate::config::ImagePolicy;

/// Upload `file` into the policy's folder and return the stored file
/// together with its optimized delivery URL.
pub(crate) async fn upload_optimized<I: ImageStore>(
    images: &I,
    file: ImageFile,
    policy: &ImagePolicy,
) -> CarRentResult<(UploadedImage, String)> {
    let uploaded = images
        .upload(file.bytes, &file.file_name, &policy.folder)
        .await?;
    let url = images.derive_url(&uploaded.file_path, &policy.transformation());
    debug!(file_path = %uploaded.file_path, %url, "Derived optimized image URL");
    Ok((uploaded, url))
}

/// Best-effort removal of an upload whose record could not be saved.
/// Failures are logged and swallowed; the caller reports the original
/// persistence error.
pub(crate) async fn discard<I: ImageStore>(images: &I, uploaded: &UploadedImage) {
    if let Err(e) = images.delete(&uploaded.file_id).await {
        warn!(
            file_id = %uploaded.file_id,
            error = %e,
            "Failed to clean up orphaned image"
        );
    }
}
