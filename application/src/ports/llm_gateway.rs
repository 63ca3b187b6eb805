//! LLM Gateway port
//!
//! Defines the interface for the text-completion capability. Adapters live
//! in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed (status {status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Request timeout")]
    Timeout,

    /// The call succeeded at the transport level but the body did not have
    /// the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for model completions.
///
/// One operation: given a system prompt and a user prompt, return the
/// response text. Latency is unbounded here; callers bound it with the
/// timeout from their `BehaviorConfig`.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError>;
}
