//! Error types module
//!
//! Every failure of an upload call is one of the `UploadError` kinds so callers
//! can branch on the kind instead of matching message text. Route handlers use
//! `ErrorMetadata` to turn a kind into an API error response; the upload
//! service itself never formats HTTP responses.
//!
//! A gateway that does not serve the uploaded content in time is not an error:
//! the upload succeeds with `accessibility_confirmed = false`.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "PAYLOAD_TOO_LARGE")
    fn error_code(&self) -> &'static str;

    /// Whether retrying the same call may succeed
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Unauthorized: no authenticated session and anonymous uploads are not allowed")]
    Unauthorized,

    #[error("Invalid file type '{declared}'. Allowed types: {}", .allowed.join(", "))]
    InvalidMediaType {
        declared: String,
        allowed: Vec<String>,
    },

    #[error("File too large: {size} bytes exceeds the maximum of {limit} bytes ({} MB)", .limit / 1024 / 1024)]
    PayloadTooLarge { size: u64, limit: u64 },

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("File {content_id} was uploaded but the storage backend has not pinned it")]
    PinNotConfirmed { content_id: String },
}

/// Static metadata for each variant: (http_status, error_code, recoverable, suggested_action, log_level).
fn upload_error_static_metadata(
    err: &UploadError,
) -> (u16, &'static str, bool, Option<&'static str>, LogLevel) {
    match err {
        UploadError::Unauthorized => (
            401,
            "UNAUTHORIZED",
            false,
            Some("Sign in before uploading"),
            LogLevel::Debug,
        ),
        UploadError::InvalidMediaType { .. } => (
            400,
            "INVALID_MEDIA_TYPE",
            false,
            Some("Upload a file of one of the allowed types"),
            LogLevel::Debug,
        ),
        UploadError::PayloadTooLarge { .. } => (
            413,
            "PAYLOAD_TOO_LARGE",
            false,
            Some("Reduce file size and try again"),
            LogLevel::Debug,
        ),
        UploadError::UploadFailed(_) => (
            502,
            "UPLOAD_FAILED",
            true,
            Some("Retry after a short delay"),
            LogLevel::Error,
        ),
        UploadError::PinNotConfirmed { .. } => (
            502,
            "PIN_NOT_CONFIRMED",
            true,
            Some("Upload the file again"),
            LogLevel::Error,
        ),
    }
}

impl UploadError {
    /// Get the error kind name
    pub fn error_type(&self) -> &'static str {
        match self {
            UploadError::Unauthorized => "Unauthorized",
            UploadError::InvalidMediaType { .. } => "InvalidMediaType",
            UploadError::PayloadTooLarge { .. } => "PayloadTooLarge",
            UploadError::UploadFailed(_) => "UploadFailed",
            UploadError::PinNotConfirmed { .. } => "PinNotConfirmed",
        }
    }
}

impl ErrorMetadata for UploadError {
    fn http_status_code(&self) -> u16 {
        upload_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        upload_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        upload_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        upload_error_static_metadata(self).3
    }

    fn log_level(&self) -> LogLevel {
        upload_error_static_metadata(self).4
    }

    fn client_message(&self) -> String {
        match self {
            // Backend messages can carry credentials or internal hosts
            UploadError::UploadFailed(_) => "Failed to upload file".to_string(),
            other => other.to_string(),
        }
    }
}
