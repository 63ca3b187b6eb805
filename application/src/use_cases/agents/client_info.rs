//! Client-info research agent (model-delegated).
//!
//! Asks the model for every analysis bucket as one JSON object. The
//! response may come fenced in a code block; the fence is stripped before
//! parsing, and a parse failure counts as a malformed response (short
//! retry delay), distinct from transport failures.

use super::Agent;
use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::LlmGateway;
use crate::retry::{AttemptError, RetryError, call_with_retry};
use crate::use_cases::shared::complete_with_config;
use async_trait::async_trait;
use consilium_domain::{
    AgentResult, AnalysisPayload, ClientInfoPrompt, ClientProfile, ProjectData, ProjectInfo,
    extract_json_block,
};
use std::sync::Arc;
use tracing::info;

/// Fetches a structured [`ClientProfile`] from the model.
pub struct ClientInfoAgent<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    config: BehaviorConfig,
}

impl<G: LlmGateway + 'static> ClientInfoAgent<G> {
    pub const NAME: &'static str = "ClientInfoAgent";

    pub fn new(gateway: Arc<G>, config: BehaviorConfig) -> Self {
        Self { gateway, config }
    }

    /// Fetch the profile for the given project identity.
    ///
    /// Also used directly by the CLI prefetch flow, outside the agent
    /// contract, hence the public terminal error.
    pub async fn fetch_profile(&self, project: &ProjectInfo) -> Result<ClientProfile, RetryError> {
        info!(
            "fetching client info for {} ({})",
            project.client_name, project.industry
        );
        let prompt = ClientInfoPrompt::fetch_prompt(project);

        call_with_retry(&self.config.retry, || async {
            let text = complete_with_config(
                self.gateway.as_ref(),
                &self.config,
                ClientInfoPrompt::system(),
                &prompt,
            )
            .await?;

            let body = extract_json_block(&text);
            serde_json::from_str::<ClientProfile>(body)
                .map_err(|e| AttemptError::Malformed(format!("JSON解析に失敗しました: {e}")))
        })
        .await
    }

    fn format_profile(profile: &ClientProfile) -> String {
        let rule = "=".repeat(60);
        format!("{rule}\n{}\n{rule}", profile.summary())
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> Agent for ClientInfoAgent<G> {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn analyze(&self, data: &ProjectData) -> AgentResult {
        if data.client_name.trim().is_empty() {
            return AgentResult::skipped(Self::NAME, "クライアント名が指定されていません");
        }

        match self.fetch_profile(&data.info()).await {
            Ok(profile) => {
                let text = Self::format_profile(&profile);
                AgentResult::success(Self::NAME, AnalysisPayload::ClientInfo(profile), text)
            }
            Err(e) => AgentResult::failure(Self::NAME, e.failure_kind(), e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::RetryPolicy;
    use crate::use_cases::test_support::StubGateway;
    use consilium_domain::{AgentStatus, FailureKind};

    fn config() -> BehaviorConfig {
        BehaviorConfig::default().with_retry(RetryPolicy::immediate(3))
    }

    fn project() -> ProjectData {
        ProjectData::new(ProjectInfo::new("サンプル企業", "IT業界", "シェア拡大"))
    }

    const FENCED: &str = "\
以下が調査結果です。
```json
{\"financial_data\": {\"revenue\": 50000000000.0}}
```
";

    #[tokio::test]
    async fn test_fenced_json_is_extracted() {
        let gateway = Arc::new(StubGateway::with_responses(vec![Ok(FENCED.to_string())]));
        let agent = ClientInfoAgent::new(gateway, config());
        let result = agent.analyze(&project()).await;

        assert!(result.is_success());
        match result.payload {
            Some(AnalysisPayload::ClientInfo(profile)) => {
                assert_eq!(profile.financial_data.unwrap().revenue, 50_000_000_000.0);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bare_json_parses_as_is() {
        let gateway = Arc::new(StubGateway::with_responses(vec![Ok(
            "{\"customer_data\": {\"growth_rate\": 5.0}}".to_string(),
        )]));
        let agent = ClientInfoAgent::new(gateway, config());
        let result = agent.analyze(&project()).await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_malformed_json_retries_then_errors() {
        let gateway = Arc::new(StubGateway::with_responses(vec![
            Ok("```json\nnot json at all\n```".to_string()),
            Ok("still not json".to_string()),
            Ok("nope".to_string()),
        ]));
        let agent = ClientInfoAgent::new(gateway.clone(), config());
        let result = agent.analyze(&project()).await;

        assert_eq!(result.status, AgentStatus::Error);
        assert_eq!(result.failure_kind, Some(FailureKind::MalformedResponse));
        // One retry cycle per malformed response, up to the attempt cap
        assert_eq!(gateway.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_then_valid_recovers() {
        let gateway = Arc::new(StubGateway::with_responses(vec![
            Ok("garbage".to_string()),
            Ok("{}".to_string()),
        ]));
        let agent = ClientInfoAgent::new(gateway.clone(), config());
        let result = agent.analyze(&project()).await;

        assert!(result.is_success());
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_client_name_skips() {
        let gateway = Arc::new(StubGateway::with_responses(vec![]));
        let agent = ClientInfoAgent::new(gateway, config());
        let data = ProjectData::default();
        let result = agent.analyze(&data).await;
        assert_eq!(result.status, AgentStatus::Skipped);
    }
}
