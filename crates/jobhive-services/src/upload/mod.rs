//! Asset upload workflow
//!
//! validate → upload → confirm pin → probe public URL

mod compat;
mod service;
mod traits;
mod types;
pub mod validation;

pub use compat::{category_for, FileUpload};
pub use service::AssetUploadService;
pub use traits::{Clock, IdentityProvider, NoSession, StaticIdentity, SystemClock};
pub use types::UploadStage;
