//! Domain models for asset uploads

pub mod upload;
pub mod user;

pub use upload::{
    PolicyKind, StoredAsset, UploadCategory, UploadPolicy, UploadRequest, VerificationReport,
};
pub use user::{Session, UserRole};
