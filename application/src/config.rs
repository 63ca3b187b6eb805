//! Application-level configuration.
//!
//! Behavior values are passed explicitly to each component at construction
//! time; there is no global settings object.

use crate::retry::RetryPolicy;
use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of model-calling components: the per-call
/// timeout bound and the shared retry policy.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for one model response. `None` means unbounded
    /// at this layer (the transport may still enforce its own bound).
    pub timeout: Option<Duration>,
    pub retry: RetryPolicy,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Default::default()
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Default::default()
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
