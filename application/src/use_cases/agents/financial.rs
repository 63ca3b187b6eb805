//! Financial analysis agent (pure compute).

use super::Agent;
use async_trait::async_trait;
use consilium_domain::frameworks::financial;
use consilium_domain::{AgentResult, AnalysisPayload, FailureKind, ProjectData};

/// Wraps the financial scoring framework.
#[derive(Debug, Default)]
pub struct FinancialAgent;

impl FinancialAgent {
    pub const NAME: &'static str = "FinancialAnalysisAgent";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Agent for FinancialAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn analyze(&self, data: &ProjectData) -> AgentResult {
        let Some(input) = data
            .financial_data
            .as_ref()
            .filter(|bucket| !bucket.is_empty())
        else {
            return AgentResult::skipped(Self::NAME, "財務データが提供されていません");
        };

        let input = input.clone();
        let scored = tokio::task::spawn_blocking(move || {
            let report = financial::analyze(&input);
            let text = financial::format_report(&report);
            (report, text)
        })
        .await;

        match scored {
            Ok((report, text)) => {
                AgentResult::success(Self::NAME, AnalysisPayload::Financial(report), text)
            }
            Err(e) => AgentResult::failure(
                Self::NAME,
                FailureKind::Internal,
                format!("財務分析の実行に失敗しました: {e}"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consilium_domain::{AgentStatus, FinancialData, ProjectInfo};

    #[tokio::test]
    async fn test_missing_bucket_is_skipped() {
        let data = ProjectData::new(ProjectInfo::new("A社", "製造業", "収益性向上"));
        let result = FinancialAgent::new().analyze(&data).await;
        assert_eq!(result.status, AgentStatus::Skipped);
    }

    #[tokio::test]
    async fn test_analysis_success() {
        let mut data = ProjectData::new(ProjectInfo::new("A社", "製造業", "収益性向上"));
        data.financial_data = Some(FinancialData {
            revenue: 100_000.0,
            cost_of_sales: 60_000.0,
            operating_expenses: 25_000.0,
            assets: 150_000.0,
            liabilities: 60_000.0,
            equity: 90_000.0,
            cash_flow_operating: 12_000.0,
            cash_flow_investing: -6_000.0,
            cash_flow_financing: -2_000.0,
        });
        let result = FinancialAgent::new().analyze(&data).await;
        assert!(result.is_success());
        assert!(result.formatted_text.contains("財務分析結果"));
        assert!(!result.recommendations().is_empty());
    }
}
