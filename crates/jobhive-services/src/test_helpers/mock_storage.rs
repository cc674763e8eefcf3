//! Mock pinning backend

use async_trait::async_trait;
use bytes::Bytes;
use jobhive_storage::{
    PinMetadata, PinnedFile, PinnedObject, PinningStorage, StorageError, StorageResult,
};
use std::sync::Mutex;

/// One recorded upload call
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub metadata: PinMetadata,
    pub content_type: String,
    pub size: usize,
}

/// Pinning backend that records calls and answers from configured results.
pub struct MockStorage {
    content_id: String,
    upload_error: Option<String>,
    listing: Mutex<Option<Vec<PinnedFile>>>,
    list_error: Option<String>,
    uploads: Mutex<Vec<RecordedUpload>>,
    list_calls: Mutex<Vec<String>>,
}

impl MockStorage {
    /// Backend that accepts uploads as `content_id` and lists them as pinned.
    pub fn new(content_id: &str) -> Self {
        Self {
            content_id: content_id.to_string(),
            upload_error: None,
            listing: Mutex::new(None),
            list_error: None,
            uploads: Mutex::new(Vec::new()),
            list_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_upload(message: &str) -> Self {
        Self {
            upload_error: Some(message.to_string()),
            ..Self::new("unused")
        }
    }

    /// Accepts uploads but never lists them.
    pub fn unpinned(content_id: &str) -> Self {
        let storage = Self::new(content_id);
        *storage.listing.lock().unwrap() = Some(Vec::new());
        storage
    }

    pub fn failing_listing(content_id: &str, message: &str) -> Self {
        Self {
            list_error: Some(message.to_string()),
            ..Self::new(content_id)
        }
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.uploads.lock().unwrap().len() + self.list_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PinningStorage for MockStorage {
    async fn upload(
        &self,
        data: Bytes,
        content_type: &str,
        metadata: &PinMetadata,
    ) -> StorageResult<PinnedObject> {
        self.uploads.lock().unwrap().push(RecordedUpload {
            metadata: metadata.clone(),
            content_type: content_type.to_string(),
            size: data.len(),
        });

        if let Some(ref message) = self.upload_error {
            return Err(StorageError::UploadFailed(message.clone()));
        }

        Ok(PinnedObject {
            content_id: self.content_id.clone(),
        })
    }

    async fn list_by_content_id(&self, content_id: &str) -> StorageResult<Vec<PinnedFile>> {
        self.list_calls.lock().unwrap().push(content_id.to_string());

        if let Some(ref message) = self.list_error {
            return Err(StorageError::ListFailed(message.clone()));
        }

        if let Some(ref listing) = *self.listing.lock().unwrap() {
            return Ok(listing.clone());
        }

        Ok(vec![PinnedFile {
            id: "file-1".to_string(),
            name: None,
            cid: content_id.to_string(),
            size: None,
            created_at: None,
        }])
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
