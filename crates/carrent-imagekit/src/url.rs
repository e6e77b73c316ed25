//! Derived delivery URLs.

use carrent_core::image::{ImageFormat, ImageQuality, ImageTransformation};

/// Render a transformation as ImageKit's `tr:` path segment, e.g.
/// `tr:w-1280,q-auto,f-webp`. Returns `None` for the identity
/// transformation.
pub(crate) fn transformation_segment(t: &ImageTransformation) -> Option<String> {
    let mut parts = Vec::with_capacity(3);
    if let Some(width) = t.width {
        parts.push(format!("w-{width}"));
    }
    if let Some(quality) = t.quality {
        parts.push(match quality {
            ImageQuality::Auto => "q-auto".to_string(),
        });
    }
    if let Some(format) = t.format {
        parts.push(match format {
            ImageFormat::Webp => "f-webp".to_string(),
        });
    }

    if parts.is_empty() {
        None
    } else {
        Some(format!("tr:{}", parts.join(",")))
    }
}

pub(crate) fn build_url(url_endpoint: &str, file_path: &str, t: &ImageTransformation) -> String {
    let base = url_endpoint.trim_end_matches('/');
    let path = file_path.trim_start_matches('/');
    match transformation_segment(t) {
        Some(segment) => format!("{base}/{segment}/{path}"),
        None => format!("{base}/{path}"),
    }
}
