//! Attachment MIME types and data URIs

use base64::Engine;

/// Fallback for extensions outside the image table
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Map a file extension (without the dot) to its MIME type.
/// Matching is case-insensitive.
pub fn mime_type_for_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        _ => DEFAULT_MIME_TYPE,
    }
}

/// Encode bytes as a `data:<mime>;base64,<payload>` URI
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime_type, payload)
}
