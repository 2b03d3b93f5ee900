//! Inline preview encoding for a selected image.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use base64::Engine;

/// Encode image bytes as a `data:` URL usable as an `<img>` source.
#[must_use]
pub fn data_url(media_type: &str, bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{media_type};base64,{b64}")
}
