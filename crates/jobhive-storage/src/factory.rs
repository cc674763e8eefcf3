use crate::{
    HttpGateway, PinataStorage, PinningStorage, PublicGateway, StorageError, StorageResult,
};
use jobhive_core::Config;
use reqwest::Client;
use std::sync::Arc;

/// Build the HTTP client shared by the storage backend and the gateway.
pub fn build_http_client(config: &Config) -> StorageResult<Client> {
    Client::builder()
        .timeout(config.http_timeout())
        .build()
        .map_err(StorageError::from)
}

/// Create the pinning backend from configuration
pub fn create_storage(config: &Config, client: Client) -> StorageResult<Arc<dyn PinningStorage>> {
    if config.pinata_jwt().trim().is_empty() {
        return Err(StorageError::ConfigError(
            "PINATA_JWT not configured".to_string(),
        ));
    }

    let storage = PinataStorage::new(
        client,
        config.pinata_jwt().to_string(),
        config.pinata_api_url().to_string(),
        config.pinata_upload_url().to_string(),
    );
    Ok(Arc::new(storage))
}

/// Create the public gateway client from configuration
pub fn create_gateway(config: &Config, client: Client) -> Arc<dyn PublicGateway> {
    Arc::new(HttpGateway::new(
        client,
        config.gateway_base_url().to_string(),
    ))
}
