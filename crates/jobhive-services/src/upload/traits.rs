//! Collaborators the upload service is written against

use async_trait::async_trait;
use jobhive_core::Session;

/// Supplies the identity of the current caller.
///
/// The upload service only asks for it when a request carries no explicit
/// owner id.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_session(&self) -> Option<Session>;
}

/// Identity already resolved by the caller (e.g. a route handler).
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<Session>);

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_session(&self) -> Option<Session> {
        self.0.clone()
    }
}

/// Caller without any session (command-line tools, background jobs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

#[async_trait]
impl IdentityProvider for NoSession {
    async fn current_session(&self) -> Option<Session> {
        None
    }
}

/// Source of the timestamp used in object names.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
