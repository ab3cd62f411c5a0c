//! Image transport codec
//!
//! Converts raw image bytes into the base64 form the hosting
//! collaborator accepts, and wraps inference payloads as renderable
//! data URIs for display.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::models::EncodedPayload;

#[cfg(test)]
mod tests;

/// Media type used when wrapping an inference payload for rendering.
/// The detection workflow always returns JPEG-encoded annotations.
const DATA_URI_MEDIA_TYPE: &str = "image/jpeg";

/// Encode raw image bytes as a base64 payload.
pub fn encode(bytes: &[u8]) -> EncodedPayload {
    EncodedPayload(STANDARD.encode(bytes))
}

/// Strip a `data:<media-type>;base64,` scheme prefix, if present.
///
/// The publishing collaborator requires the raw base64 body only, so
/// anything produced by a data-URI file reader has to lose its header
/// before upload. Text without a prefix passes through unchanged.
pub fn strip_data_uri_prefix(text: &str) -> &str {
    match text.split_once(',') {
        Some((head, body)) if head.starts_with("data:") => body,
        _ => text,
    }
}

/// Wrap base64 text as a directly renderable image source.
///
/// Never fails: malformed base64 produces a handle that simply fails to
/// render, which is the signal at this layer.
pub fn to_data_uri(base64_text: &str) -> String {
    format!("data:{};base64,{}", DATA_URI_MEDIA_TYPE, base64_text)
}
