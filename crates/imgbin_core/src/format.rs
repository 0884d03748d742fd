//! Image format detection.

/// Detect the image format tag from the byte stream's magic bytes.
///
/// Returns the short tag used in `Content-Type: image/{tag}` headers
/// ("png", "jpeg", "gif", ...). Detection failure is not an error: unknown
/// or malformed headers yield an empty tag and the upload proceeds.
pub fn detect_format(data: &[u8]) -> String {
    match image::guess_format(data) {
        Ok(format) => format
            .to_mime_type()
            .trim_start_matches("image/")
            .to_string(),
        Err(e) => {
            tracing::debug!(size = data.len(), "Could not detect image format: {}", e);
            String::new()
        }
    }
}
