//! Image handling policies.

use carrent_core::image::ImageTransformation;
use serde::{Deserialize, Serialize};

/// Where an image kind is stored and how its delivery URL is derived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImagePolicy {
    /// Store folder, e.g. `/cars`.
    pub folder: String,
    /// Maximum rendered width in pixels.
    pub width: u32,
}

impl ImagePolicy {
    pub fn transformation(&self) -> ImageTransformation {
        ImageTransformation::web_optimized(self.width)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImagePolicies {
    pub cars: ImagePolicy,
    pub users: ImagePolicy,
}

impl Default for ImagePolicies {
    fn default() -> Self {
        Self {
            cars: ImagePolicy {
                folder: "/cars".into(),
                width: 1280,
            },
            users: ImagePolicy {
                folder: "/users".into(),
                width: 400,
            },
        }
    }
}
