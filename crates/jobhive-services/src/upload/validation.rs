//! Policy checks run before any network call

use jobhive_core::{UploadError, UploadPolicy};

/// Normalize MIME type by stripping parameters
/// (e.g. "application/pdf; name=cv" -> "application/pdf").
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_lowercase()
}

/// Validate the declared media type against the policy's allow-list.
pub fn validate_media_type(declared: &str, policy: &UploadPolicy) -> Result<(), UploadError> {
    let normalized = normalize_mime_type(declared);
    if !policy
        .allowed_media_types
        .iter()
        .any(|allowed| normalized == allowed.to_lowercase())
    {
        return Err(UploadError::InvalidMediaType {
            declared: declared.to_string(),
            allowed: policy.allowed_media_types.clone(),
        });
    }
    Ok(())
}

/// Validate file size
pub fn validate_size(size_bytes: u64, policy: &UploadPolicy) -> Result<(), UploadError> {
    if size_bytes > policy.max_size_bytes {
        return Err(UploadError::PayloadTooLarge {
            size: size_bytes,
            limit: policy.max_size_bytes,
        });
    }
    Ok(())
}

/// Type first, then size.
pub fn validate_against_policy(
    declared: &str,
    size_bytes: u64,
    policy: &UploadPolicy,
) -> Result<(), UploadError> {
    validate_media_type(declared, policy)?;
    validate_size(size_bytes, policy)
}
