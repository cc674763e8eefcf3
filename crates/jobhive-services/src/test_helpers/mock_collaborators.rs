//! Mock gateway, identity provider and clock

use async_trait::async_trait;
use jobhive_core::Session;
use jobhive_storage::{keys, PublicGateway, StorageError, StorageResult};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::{Clock, IdentityProvider};

pub const TEST_GATEWAY_BASE: &str = "https://gateway.pinata.cloud";

/// Gateway answering probes from a script; once the script is exhausted it
/// keeps returning `fallback`.
pub struct ScriptedGateway {
    script: Mutex<VecDeque<Result<u16, String>>>,
    fallback: Result<u16, String>,
    probes: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new(script: Vec<Result<u16, String>>, fallback: Result<u16, String>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            probes: Mutex::new(Vec::new()),
        }
    }

    /// Every probe returns `status`.
    pub fn always(status: u16) -> Self {
        Self::new(Vec::new(), Ok(status))
    }

    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }
}

#[async_trait]
impl PublicGateway for ScriptedGateway {
    fn public_url(&self, content_id: &str) -> String {
        keys::public_url(TEST_GATEWAY_BASE, content_id)
    }

    async fn probe(&self, url: &str) -> StorageResult<u16> {
        self.probes.lock().unwrap().push(url.to_string());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        next.map_err(StorageError::ProbeFailed)
    }
}

/// Identity provider that counts how often it is asked.
pub struct CountingIdentity {
    session: Option<Session>,
    calls: AtomicUsize,
}

impl CountingIdentity {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for CountingIdentity {
    async fn current_session(&self) -> Option<Session> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.session.clone()
    }
}

/// Clock that advances by `step` milliseconds on every read.
pub struct SteppingClock {
    next: AtomicI64,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(self.step, Ordering::SeqCst)
    }
}
