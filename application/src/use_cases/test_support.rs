//! Scripted gateway stub shared by use-case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway returning pre-scripted responses in order, recording every call.
pub(crate) struct StubGateway {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    calls: Mutex<Vec<(String, String)>>,
    always_timeout: bool,
}

impl StubGateway {
    pub(crate) fn with_responses(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
            always_timeout: false,
        }
    }

    /// Every call fails with a transport timeout.
    pub(crate) fn always_timeout() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            always_timeout: true,
        }
    }

    /// Recorded (system prompt, user prompt) pairs.
    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for StubGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        if self.always_timeout {
            return Err(GatewayError::Timeout);
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("no scripted response".to_string())))
    }
}
