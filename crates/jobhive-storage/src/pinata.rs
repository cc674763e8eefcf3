//! Pinata pinning backend (v3 files API)

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::traits::{
    PinMetadata, PinnedFile, PinnedObject, PinningStorage, StorageError, StorageResult,
};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: UploadedFileData,
}

#[derive(Debug, Deserialize)]
struct UploadedFileData {
    id: String,
    cid: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    data: ListData,
}

#[derive(Debug, Deserialize)]
struct ListData {
    #[serde(default)]
    files: Vec<PinnedFile>,
}

/// Pinata storage implementation
///
/// Holds one shared `reqwest::Client`; create it once and reuse it for every
/// upload.
#[derive(Clone)]
pub struct PinataStorage {
    client: Client,
    jwt: String,
    api_url: String,
    upload_url: String,
}

impl PinataStorage {
    /// Create a new PinataStorage instance
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `jwt` - Pinata API JWT
    /// * `api_url` - Base URL of the files API (e.g., "https://api.pinata.cloud")
    /// * `upload_url` - Base URL of the upload API (e.g., "https://uploads.pinata.cloud")
    pub fn new(client: Client, jwt: String, api_url: String, upload_url: String) -> Self {
        Self {
            client,
            jwt,
            api_url: api_url.trim_end_matches('/').to_string(),
            upload_url: upload_url.trim_end_matches('/').to_string(),
        }
    }

    async fn error_body(response: reqwest::Response) -> String {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!("status {}: {}", status, text)
    }
}

#[async_trait]
impl PinningStorage for PinataStorage {
    async fn upload(
        &self,
        data: Bytes,
        content_type: &str,
        metadata: &PinMetadata,
    ) -> StorageResult<PinnedObject> {
        let size = data.len();
        let keyvalues = serde_json::to_string(&metadata.keyvalues)
            .map_err(|e| StorageError::UploadFailed(format!("Invalid metadata: {}", e)))?;

        let part = Part::stream_with_length(data, size as u64)
            .file_name(metadata.name.clone())
            .mime_str(content_type)
            .map_err(|e| StorageError::UploadFailed(format!("Invalid content type: {}", e)))?;

        let form = Form::new()
            .part("file", part)
            .text("name", metadata.name.clone())
            .text("keyvalues", keyvalues)
            .text("network", "public");

        let start = std::time::Instant::now();

        let response = self
            .client
            .post(format!("{}/v3/files", self.upload_url))
            .bearer_auth(&self.jwt)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StorageError::UploadFailed(format!("Failed to send upload: {}", e)))?;

        if !response.status().is_success() {
            return Err(StorageError::UploadFailed(Self::error_body(response).await));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(format!("Upload response: {}", e)))?;

        tracing::debug!(
            name = %metadata.name,
            file_id = %body.data.id,
            content_id = %body.data.cid,
            size = size,
            duration_ms = start.elapsed().as_millis(),
            "Pinata upload accepted"
        );

        Ok(PinnedObject {
            content_id: body.data.cid,
        })
    }

    async fn list_by_content_id(&self, content_id: &str) -> StorageResult<Vec<PinnedFile>> {
        let response = self
            .client
            .get(format!("{}/v3/files/public", self.api_url))
            .bearer_auth(&self.jwt)
            .query(&[("cid", content_id)])
            .send()
            .await
            .map_err(|e| StorageError::ListFailed(format!("Failed to send listing: {}", e)))?;

        if !response.status().is_success() {
            return Err(StorageError::ListFailed(Self::error_body(response).await));
        }

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(format!("Listing response: {}", e)))?;

        Ok(body.data.files)
    }

    fn backend_name(&self) -> &'static str {
        "pinata"
    }
}
