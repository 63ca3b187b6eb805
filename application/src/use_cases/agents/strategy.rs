//! Strategy analysis agent (model-delegated).
//!
//! Computes a 3C digest from the available buckets, embeds it in the
//! strategy prompt as factual grounding, and asks the model for the
//! strategy narrative. The call goes through the shared retry policy;
//! exhausted retries surface as an Error result, never as a panic or a
//! propagated error.

use super::Agent;
use crate::config::BehaviorConfig;
use crate::retry::call_with_retry;
use crate::use_cases::shared::complete_with_config;
use async_trait::async_trait;
use consilium_domain::frameworks::three_c;
use consilium_domain::{
    AgentResult, AnalysisPayload, ProjectData, StrategyPrompt, StrategyReport,
};
use std::sync::Arc;
use tracing::debug;

use crate::ports::llm_gateway::LlmGateway;

/// Model-backed strategy analysis.
pub struct StrategyAgent<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    config: BehaviorConfig,
}

impl<G: LlmGateway + 'static> StrategyAgent<G> {
    pub const NAME: &'static str = "StrategyAnalysisAgent";

    pub fn new(gateway: Arc<G>, config: BehaviorConfig) -> Self {
        Self { gateway, config }
    }

    fn format_output(report: &StrategyReport, digest: &str) -> String {
        let rule = "=".repeat(60);
        format!(
            "{rule}\n戦略分析結果\n{rule}\n\n{}\n\n{}\n実行された分析フレームワーク\n{}\n\n{}\n\n{rule}",
            report.output,
            "-".repeat(60),
            "-".repeat(60),
            digest
        )
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> Agent for StrategyAgent<G> {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn analyze(&self, data: &ProjectData) -> AgentResult {
        if data.customer_data.is_none() && data.competitor_data.is_none() {
            return AgentResult::skipped(Self::NAME, "戦略分析に必要なデータが提供されていません");
        }

        let customer = data.customer_data.clone().unwrap_or_default();
        let competitor = data.competitor_data.clone().unwrap_or_default();
        let company = data.company_data.clone().unwrap_or_default();
        let digest = three_c::format_report(&three_c::analyze(&customer, &competitor, &company));

        let project = data.info();
        let prompt = StrategyPrompt::analysis_prompt(&project, &digest);
        debug!("strategy prompt built ({} chars)", prompt.chars().count());

        let narrative = call_with_retry(&self.config.retry, || {
            complete_with_config(
                self.gateway.as_ref(),
                &self.config,
                StrategyPrompt::system(),
                &prompt,
            )
        })
        .await;

        match narrative {
            Ok(output) => {
                let report = StrategyReport {
                    output,
                    frameworks_used: vec!["3C分析".to_string()],
                };
                let text = Self::format_output(&report, &digest);
                AgentResult::success(Self::NAME, AnalysisPayload::Strategy(report), text)
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
    use consilium_domain::{AgentStatus, CustomerData, FailureKind, ProjectInfo};

    fn project_with_customer() -> ProjectData {
        let mut data = ProjectData::new(ProjectInfo::new("A社", "IT業界", "シェア拡大"));
        data.customer_data = Some(CustomerData {
            market_size: 80_000_000_000.0,
            growth_rate: 12.0,
            ..Default::default()
        });
        data
    }

    fn config() -> BehaviorConfig {
        BehaviorConfig::default().with_retry(RetryPolicy::immediate(3))
    }

    #[tokio::test]
    async fn test_missing_buckets_skip() {
        let gateway = Arc::new(StubGateway::with_responses(vec![]));
        let agent = StrategyAgent::new(gateway, config());
        let data = ProjectData::new(ProjectInfo::new("A社", "IT業界", "シェア拡大"));
        let result = agent.analyze(&data).await;
        assert_eq!(result.status, AgentStatus::Skipped);
    }

    #[tokio::test]
    async fn test_success_embeds_narrative() {
        let gateway = Arc::new(StubGateway::with_responses(vec![Ok(
            "差別化戦略を推奨します".to_string()
        )]));
        let agent = StrategyAgent::new(gateway.clone(), config());
        let result = agent.analyze(&project_with_customer()).await;

        assert!(result.is_success());
        assert!(result.formatted_text.contains("差別化戦略を推奨します"));
        assert!(result.formatted_text.contains("3C分析"));
        // The prompt carried the 3C digest
        let (_, user_prompt) = gateway.calls()[0].clone();
        assert!(user_prompt.contains("【3C分析】"));
    }

    #[tokio::test]
    async fn test_exhausted_retries_become_error_result() {
        let gateway = Arc::new(StubGateway::always_timeout());
        let agent = StrategyAgent::new(gateway.clone(), config());
        let result = agent.analyze(&project_with_customer()).await;

        assert_eq!(result.status, AgentStatus::Error);
        assert_eq!(result.failure_kind, Some(FailureKind::Transport));
        assert_eq!(gateway.calls().len(), 3);
    }
}
