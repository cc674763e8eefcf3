//! Jobhive Services Library
//!
//! The asset upload service: validates a candidate file, uploads it to the
//! pinning backend, confirms the pin and probes the public URL.

pub mod upload;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use upload::{
    AssetUploadService, Clock, FileUpload, IdentityProvider, NoSession, StaticIdentity,
    SystemClock, UploadStage,
};
