//! Image upload policy.
//!
//! Image hosting is delegated to a third-party service; this crate only
//! decides whether a proposed upload may proceed (admin token, image content
//! type, size ceiling) and records the hosted URL the service reports back.

use crate::auth::{AdminGate, AuthError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Upload size ceiling (4 MiB, matching the hosting plan).
pub const MAX_IMAGE_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("{0}")]
    Unauthorized(#[from] AuthError),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("File too large: {0} bytes (max {MAX_IMAGE_BYTES})")]
    TooLarge(u64),
}

/// Which admin form the upload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadKind {
    HeroTileImage,
    ProductImage,
}

/// A proposed upload, described by the client before any bytes move.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub kind: UploadKind,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Authorize an upload against the policy.
///
/// # Errors
///
/// [`UploadError::Unauthorized`] on a bad admin token,
/// [`UploadError::UnsupportedContentType`] for non-image payloads, and
/// [`UploadError::TooLarge`] past the size ceiling.
pub fn authorize_upload(
    gate: &AdminGate,
    token: &str,
    request: &UploadRequest,
) -> Result<(), UploadError> {
    gate.require(token)?;

    if !request.content_type.starts_with("image/") {
        return Err(UploadError::UnsupportedContentType(
            request.content_type.clone(),
        ));
    }
    if request.size_bytes > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge(request.size_bytes));
    }

    info!(
        "Authorized {:?} upload of {} ({} bytes)",
        request.kind, request.file_name, request.size_bytes
    );
    Ok(())
}

/// What the hosting service reports once the upload finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedUpload {
    pub kind: UploadKind,
    pub url: String,
}
