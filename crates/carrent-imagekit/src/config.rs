//! ImageKit account configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageKitConfig {
    pub public_key: String,
    /// Used as the basic-auth user name for API calls.
    pub private_key: String,
    /// Delivery base URL, e.g. `https://ik.imagekit.io/your_id`.
    pub url_endpoint: String,
    /// Base URL of the upload API.
    pub upload_endpoint: String,
    /// Base URL of the management API (file deletion).
    pub api_endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ImageKitConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            private_key: String::new(),
            url_endpoint: String::new(),
            upload_endpoint: "https://upload.imagekit.io".into(),
            api_endpoint: "https://api.imagekit.io".into(),
            timeout_secs: 30,
        }
    }
}
