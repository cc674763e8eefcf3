//! Public IPFS gateway client

use async_trait::async_trait;
use reqwest::Client;

use crate::keys;
use crate::traits::{PublicGateway, StorageError, StorageResult};

/// HTTP gateway serving content at `<base_url>/ipfs/<content_id>`
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PublicGateway for HttpGateway {
    fn public_url(&self, content_id: &str) -> String {
        keys::public_url(&self.base_url, content_id)
    }

    async fn probe(&self, url: &str) -> StorageResult<u16> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| StorageError::ProbeFailed(format!("HEAD {}: {}", url, e)))?;

        Ok(response.status().as_u16())
    }
}
