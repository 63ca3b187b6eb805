//! Retry wrapper shared by every model-calling component.
//!
//! Two failure classes drive different backoff: a malformed response (the
//! call answered but could not be parsed) waits a short delay before the
//! next attempt, a transport failure (timeout, rate limit, connection)
//! waits longer. Exhausting the attempts yields a terminal [`RetryError`]
//! carrying the last underlying cause; agents convert that into an
//! `AgentResult` with status Error.

use crate::ports::llm_gateway::GatewayError;
use consilium_domain::FailureKind;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Attempt limits and per-class delays.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Delay after a malformed response.
    pub malformed_delay: Duration,
    /// Delay after a transport failure.
    pub transport_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            malformed_delay: Duration::from_secs(1),
            transport_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Policy without delays, for tests and fail-fast callers.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            malformed_delay: Duration::ZERO,
            transport_delay: Duration::ZERO,
        }
    }
}

/// Failure of a single attempt, classified for backoff.
#[derive(Error, Debug)]
pub enum AttemptError {
    /// The response arrived but could not be parsed or validated.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The call itself failed.
    #[error("transport failure: {0}")]
    Transport(GatewayError),
}

impl From<GatewayError> for AttemptError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::InvalidResponse(message) => AttemptError::Malformed(message),
            other => AttemptError::Transport(other),
        }
    }
}

/// Terminal error after all attempts failed.
#[derive(Error, Debug)]
#[error("operation failed after {attempts} attempts: {last}")]
pub struct RetryError {
    pub attempts: u32,
    #[source]
    pub last: AttemptError,
}

impl RetryError {
    /// Failure classification for the resulting `AgentResult`.
    pub fn failure_kind(&self) -> FailureKind {
        match self.last {
            AttemptError::Malformed(_) => FailureKind::MalformedResponse,
            AttemptError::Transport(_) => FailureKind::Transport,
        }
    }
}

/// Run `operation` until it succeeds or the policy's attempts are spent.
///
/// A `max_attempts` of 0 is treated as 1; the operation always runs at
/// least once.
pub async fn call_with_retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, RetryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AttemptError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt >= max_attempts => {
                return Err(RetryError {
                    attempts: attempt,
                    last: error,
                });
            }
            Err(error) => {
                let delay = match &error {
                    AttemptError::Malformed(_) => policy.malformed_delay,
                    AttemptError::Transport(_) => policy.transport_delay,
                };
                warn!(
                    "attempt {}/{} failed ({}), retrying in {:?}",
                    attempt, max_attempts, error, delay
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_success_after_failures() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(3);

        let result = call_with_retry(&policy, || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(AttemptError::Transport(GatewayError::Timeout))
                } else {
                    Ok("ok")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "ok");
        // Fails exactly max_attempts - 1 times, then succeeds
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhausted_attempts_is_terminal() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(3);

        let result: Result<(), _> = call_with_retry(&policy, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(AttemptError::Malformed("bad json".to_string())) }
        })
        .await;

        let error = result.unwrap_err();
        assert_eq!(error.attempts, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(error.failure_kind(), FailureKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_runs_once() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(0);

        let result = call_with_retry(&policy, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, AttemptError>(42) }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_gateway_error_classification() {
        let malformed: AttemptError = GatewayError::InvalidResponse("no choices".to_string()).into();
        assert!(matches!(malformed, AttemptError::Malformed(_)));

        let transport: AttemptError = GatewayError::RateLimited.into();
        assert!(matches!(transport, AttemptError::Transport(_)));
    }
}
