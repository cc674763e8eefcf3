//! Jobhive Storage Library
//!
//! Storage abstraction for uploaded assets: a content-addressed pinning backend
//! (Pinata) and the public gateway that serves pinned content by content id.
//!
//! # Object names
//!
//! Uploads are named `<prefix>-<owner_id>-<epoch_millis>` so the backend can be
//! queried and audited by owner. Name generation lives in the `keys` module.
//!
//! # Public URLs
//!
//! Content is served at `<gateway_base>/ipfs/<content_id>`.

pub mod factory;
pub mod gateway;
pub mod keys;
pub mod pinata;
pub mod traits;

// Re-export commonly used types
pub use factory::{build_http_client, create_gateway, create_storage};
pub use gateway::HttpGateway;
pub use pinata::PinataStorage;
pub use traits::{
    PinMetadata, PinnedFile, PinnedObject, PinningStorage, PublicGateway, StorageError,
    StorageResult,
};
