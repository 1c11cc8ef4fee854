//! Image encoding for the AI request.
//!
//! Images travel inline with the request as base64 data plus a declared
//! MIME type. Multiple files are encoded concurrently but the result
//! sequence always preserves input order, since prompts may refer to "the
//! attached images" as an ordered set.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures::future::try_join_all;
use log::debug;
use std::path::Path;
use tokio::fs;

use crate::error::CompanionError;

/// An encoded image ready to attach to the outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPart {
    /// Base64-encoded image bytes.
    pub data: String,
    /// MIME type reported by the source, e.g. "image/jpeg".
    pub mime_type: String,
}

/// Guess the MIME type from the file extension.
///
/// Unknown extensions fall back to "image/jpeg", the most common camera
/// output.
fn mime_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/jpeg",
    }
    .to_string()
}

/// Encode a single image file.
///
/// # Errors
/// Returns `CompanionError::Encoding` if the file cannot be read.
pub async fn encode_image_file(path: &Path) -> Result<MediaPart, CompanionError> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| CompanionError::Encoding(format!("{}: {}", path.display(), e)))?;
    debug!("Encoded {} ({} bytes)", path.display(), bytes.len());
    Ok(MediaPart {
        data: STANDARD.encode(&bytes),
        mime_type: mime_type_for(path),
    })
}

/// Encode a batch of image files concurrently, preserving input order.
///
/// Any single read failure aborts the whole batch; there is no
/// partial-image fallback.
pub async fn encode_image_files<P: AsRef<Path>>(
    paths: &[P],
) -> Result<Vec<MediaPart>, CompanionError> {
    // try_join_all keeps result order aligned with input order regardless
    // of which read completes first.
    try_join_all(paths.iter().map(|p| encode_image_file(p.as_ref()))).await
}
