//! MIME helpers for artifact handling.

/// Fallback when the artifact carries no MIME type.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// File extension for a MIME type: the subtype, or `bin` when the type has
/// no `/` separator.
pub fn extension_for_mime(mime: &str) -> &str {
    match mime.rsplit_once('/') {
        Some((_, subtype)) => subtype,
        None => "bin",
    }
}

/// Whether a MIME type is for an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}
