//! Jobhive Core Library
//!
//! This crate provides the domain models, upload policies, error taxonomy and
//! configuration shared by the storage, service and CLI crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod retry;

// Re-export commonly used types
pub use config::Config;
pub use error::{ErrorMetadata, LogLevel, UploadError};
pub use models::{
    Session, StoredAsset, UploadCategory, UploadPolicy, UploadRequest, UserRole,
    VerificationReport,
};
pub use retry::RetryPolicy;
