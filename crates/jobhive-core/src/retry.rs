//! Bounded retry with a fixed delay between attempts

use std::time::Duration;

use crate::constants::{ACCESS_PROBE_DELAY_MS, ACCESS_PROBE_MAX_ATTEMPTS};

/// How many times to try an operation and how long to wait between tries.
///
/// The delay is fixed: no exponential backoff and no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Policy without any wait between attempts (tests, local tooling).
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }

    /// Number of attempts actually made; at least one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay to sleep after a failed `attempt` (1-based), or `None` after the last one.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt < self.attempts() {
            Some(self.delay)
        } else {
            None
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            ACCESS_PROBE_MAX_ATTEMPTS,
            Duration::from_millis(ACCESS_PROBE_DELAY_MS),
        )
    }
}
