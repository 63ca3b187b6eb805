//! Market analysis agent (pure compute).

use super::Agent;
use async_trait::async_trait;
use consilium_domain::frameworks::market;
use consilium_domain::{AgentResult, AnalysisPayload, FailureKind, ProjectData};

/// Wraps the market scoring framework.
#[derive(Debug, Default)]
pub struct MarketAgent;

impl MarketAgent {
    pub const NAME: &'static str = "MarketAnalysisAgent";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Agent for MarketAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn analyze(&self, data: &ProjectData) -> AgentResult {
        let Some(input) = data
            .market_analysis_data
            .as_ref()
            .filter(|bucket| !bucket.is_empty())
        else {
            return AgentResult::skipped(Self::NAME, "市場分析データが提供されていません");
        };

        // Scoring is CPU-only; a worker thread keeps the fan-out breathing.
        let input = input.clone();
        let scored = tokio::task::spawn_blocking(move || {
            let report = market::analyze(&input);
            let text = market::format_report(&report);
            (report, text)
        })
        .await;

        match scored {
            Ok((report, text)) => {
                AgentResult::success(Self::NAME, AnalysisPayload::Market(report), text)
            }
            Err(e) => AgentResult::failure(
                Self::NAME,
                FailureKind::Internal,
                format!("市場分析の実行に失敗しました: {e}"),
            ),
        }
    }
}
