//! Shared constants

/// Owner id recorded for uploads made without an authenticated session.
pub const ANONYMOUS_OWNER_ID: &str = "anonymous";

/// Size limit for profile images (5 MiB).
pub const MAX_IMAGE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Size limit for resumes and company licenses (10 MiB).
pub const MAX_DOCUMENT_SIZE_BYTES: u64 = 10 * 1024 * 1024;

pub const IMAGE_ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpg", "image/png", "image/gif"];

pub const DOCUMENT_ALLOWED_CONTENT_TYPES: &[&str] = &["application/pdf"];

pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://gateway.pinata.cloud";
pub const DEFAULT_PINATA_API_URL: &str = "https://api.pinata.cloud";
pub const DEFAULT_PINATA_UPLOAD_URL: &str = "https://uploads.pinata.cloud";

/// Accessibility probe defaults: 3 attempts, 2 seconds apart.
pub const ACCESS_PROBE_MAX_ATTEMPTS: u32 = 3;
pub const ACCESS_PROBE_DELAY_MS: u64 = 2000;
