//! # Image Format Detection Module
//!
//! Sniffs the container format of downloaded photo bytes and maps it to
//! the MIME type sent alongside the image in provider requests.

use log::warn;

pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_PNG: &str = "image/png";
pub const MIME_WEBP: &str = "image/webp";

/// Detect the MIME type of raw image bytes using `image::guess_format`
///
/// JPEG, PNG and WEBP map to their MIME types. Any other recognized
/// format and any undetectable input fall back to `image/jpeg`; both
/// cases log a warning and neither is an error. Telegram re-encodes
/// photo uploads as JPEG, so the fallback is almost always right.
pub fn detect_mime_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(image::ImageFormat::Jpeg) => MIME_JPEG,
        Ok(image::ImageFormat::Png) => MIME_PNG,
        Ok(image::ImageFormat::WebP) => MIME_WEBP,
        Ok(other) => {
            warn!("Unmapped image format {other:?}, defaulting to {MIME_JPEG}");
            MIME_JPEG
        }
        Err(e) => {
            warn!("Could not detect image format ({e}), defaulting to {MIME_JPEG}");
            MIME_JPEG
        }
    }
}
