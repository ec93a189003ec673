//! Data URLs for product images.
//!
//! A dropped file is read fully and embedded in the product payload. No size
//! or type checks.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode `bytes` as `data:<mime>;base64,<payload>`.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() { FALLBACK_MIME } else { mime.trim() };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
