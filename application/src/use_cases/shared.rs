//! Shared helpers for model-calling use cases.

use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::retry::AttemptError;
use std::time::Duration;

/// Issue one completion with the configured wait bound.
///
/// A timeout elapses into `GatewayError::Timeout`, i.e. the transport
/// failure class, so the retry wrapper applies the longer delay.
pub(crate) async fn complete_bounded<G>(
    gateway: &G,
    timeout: Option<Duration>,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String, AttemptError>
where
    G: LlmGateway + ?Sized,
{
    let call = gateway.complete(system_prompt, user_prompt);
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout),
        },
        None => call.await,
    };
    result.map_err(AttemptError::from)
}

/// Convenience: bound the call with the config's timeout.
pub(crate) async fn complete_with_config<G>(
    gateway: &G,
    config: &BehaviorConfig,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String, AttemptError>
where
    G: LlmGateway + ?Sized,
{
    complete_bounded(gateway, config.timeout, system_prompt, user_prompt).await
}
