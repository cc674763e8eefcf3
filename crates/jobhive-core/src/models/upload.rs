use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::constants::{
    DOCUMENT_ALLOWED_CONTENT_TYPES, IMAGE_ALLOWED_CONTENT_TYPES, MAX_DOCUMENT_SIZE_BYTES,
    MAX_IMAGE_SIZE_BYTES,
};

/// What an uploaded asset is used for.
///
/// The category picks both the validation policy and the object-name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadCategory {
    ProfileImage,
    Resume,
    CompanyLicense,
}

/// Which of the two policies applies to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Image,
    Document,
}

impl UploadCategory {
    /// Prefix of the object name, also sent as the `type` metadata value.
    pub fn prefix(&self) -> &'static str {
        match self {
            UploadCategory::ProfileImage => "profile",
            UploadCategory::Resume => "resume",
            UploadCategory::CompanyLicense => "license",
        }
    }

    pub fn policy_kind(&self) -> PolicyKind {
        match self {
            UploadCategory::ProfileImage => PolicyKind::Image,
            UploadCategory::Resume | UploadCategory::CompanyLicense => PolicyKind::Document,
        }
    }
}

impl FromStr for UploadCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "profile_image" | "profile" => Ok(UploadCategory::ProfileImage),
            "resume" => Ok(UploadCategory::Resume),
            "company_license" | "license" => Ok(UploadCategory::CompanyLicense),
            _ => Err(anyhow::anyhow!("Invalid upload category: {}", s)),
        }
    }
}

impl Display for UploadCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadCategory::ProfileImage => write!(f, "profile_image"),
            UploadCategory::Resume => write!(f, "resume"),
            UploadCategory::CompanyLicense => write!(f, "company_license"),
        }
    }
}

/// Allowed media types and size limit for one kind of upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub allowed_media_types: Vec<String>,
    pub max_size_bytes: u64,
}

impl UploadPolicy {
    pub fn new(allowed_media_types: Vec<String>, max_size_bytes: u64) -> Self {
        Self {
            allowed_media_types,
            max_size_bytes,
        }
    }

    /// `image/jpg`, `image/png`, `image/gif` up to 5 MiB.
    pub fn images() -> Self {
        Self::new(
            IMAGE_ALLOWED_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            MAX_IMAGE_SIZE_BYTES,
        )
    }

    /// `application/pdf` up to 10 MiB.
    pub fn documents() -> Self {
        Self::new(
            DOCUMENT_ALLOWED_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            MAX_DOCUMENT_SIZE_BYTES,
        )
    }
}

/// A candidate file submitted for upload.
///
/// Built once by the caller and not modified afterwards. `size_bytes` is the
/// size the caller declares; it defaults to the payload length.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub content: Bytes,
    pub declared_media_type: String,
    pub size_bytes: u64,
    pub category: UploadCategory,
    /// Explicit owner; when `None` the owner comes from the caller's session.
    pub owner_id: Option<String>,
    /// Whether a call without a session may proceed as the anonymous owner.
    pub allow_anonymous: bool,
}

impl UploadRequest {
    pub fn new(
        content: impl Into<Bytes>,
        declared_media_type: impl Into<String>,
        category: UploadCategory,
    ) -> Self {
        let content = content.into();
        Self {
            size_bytes: content.len() as u64,
            content,
            declared_media_type: declared_media_type.into(),
            category,
            owner_id: None,
            allow_anonymous: false,
        }
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn allow_anonymous(mut self, allow: bool) -> Self {
        self.allow_anonymous = allow;
        self
    }

    pub fn with_declared_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }
}

/// An asset that the storage backend has accepted and pinned.
///
/// A re-upload produces a new `StoredAsset`; existing ones are never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAsset {
    pub content_id: String,
    pub public_url: String,
    pub object_name: String,
    pub owner_id: String,
    pub category: UploadCategory,
    pub pin_confirmed: bool,
    /// False when the gateway did not serve the URL within the probe budget.
    pub accessibility_confirmed: bool,
}

/// Outcome of re-checking an existing content id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub content_id: String,
    pub public_url: String,
    pub pin_confirmed: bool,
    pub accessibility_confirmed: bool,
}
