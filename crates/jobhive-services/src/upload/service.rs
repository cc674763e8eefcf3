//! Asset upload service
//!
//! One call runs the whole workflow for a single file:
//! resolve owner → validate → name → upload → confirm pin → probe public URL.
//!
//! Calls share no mutable state, so one service instance can serve any number
//! of concurrent uploads.

use std::sync::Arc;

use jobhive_core::constants::ANONYMOUS_OWNER_ID;
use jobhive_core::{
    Config, ErrorMetadata, LogLevel, RetryPolicy, StoredAsset, UploadError, UploadRequest,
    VerificationReport,
};
use jobhive_storage::{keys, PinMetadata, PinningStorage, PublicGateway};

use super::traits::{Clock, IdentityProvider, SystemClock};
use super::types::UploadStage;
use super::validation::validate_against_policy;

/// Uploads job-board assets and verifies they are pinned and served.
///
/// The storage backend and gateway clients are created once at startup and
/// injected here; the service never builds clients of its own.
#[derive(Clone)]
pub struct AssetUploadService {
    storage: Arc<dyn PinningStorage>,
    gateway: Arc<dyn PublicGateway>,
    config: Arc<Config>,
    probe_policy: RetryPolicy,
    clock: Arc<dyn Clock>,
}

impl AssetUploadService {
    /// Create a new AssetUploadService
    ///
    /// The accessibility probe uses `config.probe_retry_policy()` and object
    /// names are stamped with the system clock.
    pub fn new(
        storage: Arc<dyn PinningStorage>,
        gateway: Arc<dyn PublicGateway>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            probe_policy: config.probe_retry_policy(),
            storage,
            gateway,
            config,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_probe_policy(mut self, policy: RetryPolicy) -> Self {
        self.probe_policy = policy;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn probe_policy(&self) -> RetryPolicy {
        self.probe_policy
    }

    /// Upload one asset.
    ///
    /// Returns only after the backend has confirmed the pin. If the gateway
    /// does not serve the URL within the probe budget the asset is still
    /// returned, with `accessibility_confirmed = false`.
    pub async fn upload(
        &self,
        request: UploadRequest,
        identity: &dyn IdentityProvider,
    ) -> Result<StoredAsset, UploadError> {
        let mut stage = UploadStage::Validating;
        let category = request.category;

        let result = self.run(request, identity, &mut stage).await;

        match &result {
            Ok(asset) => {
                tracing::info!(
                    content_id = %asset.content_id,
                    public_url = %asset.public_url,
                    accessibility_confirmed = asset.accessibility_confirmed,
                    "Upload complete"
                );
            }
            Err(err) => {
                let failed_at = stage;
                stage.advance(UploadStage::Failed);
                log_failure(failed_at, category.to_string(), err);
            }
        }

        result
    }

    async fn run(
        &self,
        request: UploadRequest,
        identity: &dyn IdentityProvider,
        stage: &mut UploadStage,
    ) -> Result<StoredAsset, UploadError> {
        // 1. Resolve owner
        let owner_id = self.resolve_owner(&request, identity).await?;

        // 2. Validate against the category policy, never below the payload length
        let size_bytes = request.size_bytes.max(request.content.len() as u64);
        let policy = self.config.policy_for(request.category);
        validate_against_policy(&request.declared_media_type, size_bytes, policy)?;

        tracing::info!(
            owner_id = %owner_id,
            category = %request.category,
            media_type = %request.declared_media_type,
            size_bytes = size_bytes,
            "Upload validated"
        );

        // 3. Name the object
        let prefix = request.category.prefix();
        let object_name = keys::object_name(prefix, &owner_id, self.clock.now_millis());
        let metadata = PinMetadata::new(object_name.clone())
            .with_keyvalue("userId", owner_id.clone())
            .with_keyvalue("type", prefix);

        tracing::info!(object_name = %object_name, "Object named");

        // 4. Upload
        stage.advance(UploadStage::Uploading);
        let pinned = self
            .storage
            .upload(request.content, &request.declared_media_type, &metadata)
            .await
            .map_err(UploadError::from)?;

        tracing::info!(
            object_name = %object_name,
            content_id = %pinned.content_id,
            backend = self.storage.backend_name(),
            "Upload accepted by storage backend"
        );

        // 5. Confirm pin
        stage.advance(UploadStage::ConfirmingPin);
        if !self.confirm_pin(&pinned.content_id).await? {
            return Err(UploadError::PinNotConfirmed {
                content_id: pinned.content_id,
            });
        }

        tracing::info!(content_id = %pinned.content_id, "Pin confirmed");

        // 6. Probe public URL
        stage.advance(UploadStage::ProbingAccess);
        let public_url = self.gateway.public_url(&pinned.content_id);
        let accessibility_confirmed = self.probe_access(&public_url).await;

        // 7. Done
        stage.advance(UploadStage::Done);
        Ok(StoredAsset {
            content_id: pinned.content_id,
            public_url,
            object_name,
            owner_id,
            category: request.category,
            pin_confirmed: true,
            accessibility_confirmed,
        })
    }

    /// Re-check an existing content id: pin listing, then the public URL.
    ///
    /// A missing pin is reported in the result rather than as an error; only a
    /// failing listing call is an error.
    pub async fn verify(&self, content_id: &str) -> Result<VerificationReport, UploadError> {
        let public_url = self.gateway.public_url(content_id);

        let pin_confirmed = self.confirm_pin(content_id).await?;
        let accessibility_confirmed = if pin_confirmed {
            self.probe_access(&public_url).await
        } else {
            tracing::warn!(content_id = %content_id, "Content id is not pinned");
            false
        };

        tracing::info!(
            content_id = %content_id,
            pin_confirmed = pin_confirmed,
            accessibility_confirmed = accessibility_confirmed,
            "Verification complete"
        );

        Ok(VerificationReport {
            content_id: content_id.to_string(),
            public_url,
            pin_confirmed,
            accessibility_confirmed,
        })
    }

    async fn resolve_owner(
        &self,
        request: &UploadRequest,
        identity: &dyn IdentityProvider,
    ) -> Result<String, UploadError> {
        // A blank owner id counts as absent
        let explicit = request
            .owner_id
            .as_deref()
            .map(str::trim)
            .filter(|owner_id| !owner_id.is_empty());
        if let Some(owner_id) = explicit {
            return Ok(owner_id.to_string());
        }

        match identity.current_session().await {
            Some(session) => {
                tracing::debug!(
                    user_id = %session.user_id,
                    role = %session.role,
                    "Owner resolved from session"
                );
                Ok(session.user_id)
            }
            None if request.allow_anonymous => {
                tracing::debug!("No session, uploading as anonymous");
                Ok(ANONYMOUS_OWNER_ID.to_string())
            }
            None => Err(UploadError::Unauthorized),
        }
    }

    /// Whether the backend lists `content_id` as pinned.
    async fn confirm_pin(&self, content_id: &str) -> Result<bool, UploadError> {
        let files = self
            .storage
            .list_by_content_id(content_id)
            .await
            .map_err(UploadError::from)?;

        Ok(!files.is_empty())
    }

    /// HEAD the public URL until it answers 2xx or the attempts run out.
    async fn probe_access(&self, public_url: &str) -> bool {
        let max_attempts = self.probe_policy.attempts();

        for attempt in 1..=max_attempts {
            match self.gateway.probe(public_url).await {
                Ok(status) if (200..300).contains(&status) => {
                    tracing::info!(
                        public_url = %public_url,
                        attempt = attempt,
                        status = status,
                        "Public URL accessible"
                    );
                    return true;
                }
                Ok(status) => {
                    tracing::warn!(
                        public_url = %public_url,
                        attempt = attempt,
                        max_attempts = max_attempts,
                        status = status,
                        "Accessibility probe returned non-success status"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        public_url = %public_url,
                        attempt = attempt,
                        max_attempts = max_attempts,
                        error = %e,
                        "Accessibility probe failed"
                    );
                }
            }

            if let Some(delay) = self.probe_policy.delay_after(attempt) {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        }

        tracing::warn!(
            public_url = %public_url,
            attempts = max_attempts,
            "Public URL not accessible yet, returning asset without accessibility confirmation"
        );
        false
    }
}

fn log_failure(stage: UploadStage, category: String, err: &UploadError) {
    match err.log_level() {
        LogLevel::Debug => tracing::debug!(
            stage = %stage,
            category = %category,
            kind = err.error_type(),
            error = %err,
            "Upload rejected"
        ),
        LogLevel::Warn => tracing::warn!(
            stage = %stage,
            category = %category,
            kind = err.error_type(),
            error = %err,
            "Upload rejected"
        ),
        LogLevel::Error => tracing::error!(
            stage = %stage,
            category = %category,
            kind = err.error_type(),
            error = %err,
            "Upload failed"
        ),
    }
}
