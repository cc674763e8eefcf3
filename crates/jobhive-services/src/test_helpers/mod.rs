//! Test helpers for upload service unit tests
//!
//! Mock collaborators that record every call so tests can assert on network
//! traffic without any HTTP server.

pub mod mock_collaborators;
pub mod mock_storage;

pub use mock_collaborators::*;
pub use mock_storage::*;

use std::sync::Arc;

use jobhive_core::{Config, RetryPolicy};

use crate::AssetUploadService;

/// Service wired to the given mocks, zero-delay probing and a stepping clock.
pub fn create_test_service(
    storage: Arc<MockStorage>,
    gateway: Arc<ScriptedGateway>,
) -> AssetUploadService {
    AssetUploadService::new(storage, gateway, Arc::new(Config::new("test-jwt")))
        .with_probe_policy(RetryPolicy::immediate(3))
        .with_clock(Arc::new(SteppingClock::new(1_700_000_000_000, 1)))
}
