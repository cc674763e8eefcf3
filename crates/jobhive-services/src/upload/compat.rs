//! Flag-based upload entry point
//!
//! Older route handlers pass an `is_resume` flag and an optional upload type
//! instead of a category, and only need the public URL back.

use bytes::Bytes;
use jobhive_core::{UploadCategory, UploadError, UploadRequest};

use super::service::AssetUploadService;
use super::traits::IdentityProvider;

/// Raw file as received from a multipart form
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub bytes: Bytes,
    pub content_type: String,
}

impl FileUpload {
    pub fn new(bytes: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.into(),
        }
    }
}

/// `"license"` selects the company license, otherwise `is_resume` decides
/// between resume and profile image.
pub fn category_for(is_resume: bool, upload_type: Option<&str>) -> UploadCategory {
    match upload_type {
        Some(t) if t.eq_ignore_ascii_case("license") => UploadCategory::CompanyLicense,
        _ if is_resume => UploadCategory::Resume,
        _ => UploadCategory::ProfileImage,
    }
}

impl AssetUploadService {
    /// Upload `file` and return its public URL.
    pub async fn upload_file(
        &self,
        identity: &dyn IdentityProvider,
        file: FileUpload,
        is_resume: bool,
        user_id: Option<&str>,
        allow_anonymous: bool,
        upload_type: Option<&str>,
    ) -> Result<String, UploadError> {
        let category = category_for(is_resume, upload_type);

        let mut request = UploadRequest::new(file.bytes, file.content_type, category)
            .allow_anonymous(allow_anonymous);
        if let Some(owner) = user_id {
            request = request.with_owner(owner);
        }

        let asset = self.upload(request, identity).await?;
        Ok(asset.public_url)
    }
}
