//! Storage abstraction traits
//!
//! This module defines the pinning backend and public gateway traits that the
//! upload service is written against.

use async_trait::async_trait;
use bytes::Bytes;
use jobhive_core::UploadError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("Gateway probe failed: {0}")]
    ProbeFailed(String),

    #[error("Invalid response from storage backend: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for UploadError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UploadFailed(msg) => UploadError::UploadFailed(msg),
            other => UploadError::UploadFailed(other.to_string()),
        }
    }
}

/// Name and key/value tags attached to an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMetadata {
    pub name: String,
    pub keyvalues: BTreeMap<String, String>,
}

impl PinMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyvalues: BTreeMap::new(),
        }
    }

    pub fn with_keyvalue(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.keyvalues.insert(key.into(), value.into());
        self
    }
}

/// Handle returned by the backend for an accepted upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedObject {
    pub content_id: String,
}

/// One entry of a pin listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedFile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub cid: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Content-addressed storage backend that pins what it stores.
///
/// An accepted upload does not guarantee the content is retained; callers
/// confirm retention with `list_by_content_id`.
#[async_trait]
pub trait PinningStorage: Send + Sync {
    /// Upload a payload with its metadata and return the content id.
    async fn upload(
        &self,
        data: Bytes,
        content_type: &str,
        metadata: &PinMetadata,
    ) -> StorageResult<PinnedObject>;

    /// List pinned files whose content id equals `content_id`.
    async fn list_by_content_id(&self, content_id: &str) -> StorageResult<Vec<PinnedFile>>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Public HTTP gateway serving pinned content by content id.
#[async_trait]
pub trait PublicGateway: Send + Sync {
    /// Public URL for a content id
    fn public_url(&self, content_id: &str) -> String;

    /// Issue a reachability check for `url` and return the HTTP status.
    ///
    /// Transport failures are returned as errors; any status, including
    /// non-2xx, is returned as `Ok`.
    async fn probe(&self, url: &str) -> StorageResult<u16>;
}
