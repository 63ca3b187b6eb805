//! Analysis payload variants.
//!
//! A closed set of typed results, one per agent kind. The orchestrator
//! treats payloads as opaque; only the dialogue digests and the report
//! assembler look inside, through the accessors here.

use crate::core::string::truncate_chars;
use crate::frameworks::financial::FinancialReport;
use crate::frameworks::market::MarketReport;
use crate::project::ClientProfile;
use serde::Serialize;

/// Number of characters kept when digesting free-form output.
const INSIGHT_EXCERPT_CHARS: usize = 200;

/// Kind tag for an analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Market,
    Financial,
    Strategy,
    ClientInfo,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Market => "market",
            AnalysisType::Financial => "financial",
            AnalysisType::Strategy => "strategy",
            AnalysisType::ClientInfo => "client_info",
        }
    }
}

impl std::fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// LLM-delegated strategy analysis output.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    /// The model's strategy narrative.
    pub output: String,
    /// Framework digests that grounded the prompt.
    pub frameworks_used: Vec<String>,
}

/// Structured result of one agent, tagged by kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisPayload {
    Market(MarketReport),
    Financial(FinancialReport),
    Strategy(StrategyReport),
    ClientInfo(ClientProfile),
}

impl AnalysisPayload {
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            AnalysisPayload::Market(_) => AnalysisType::Market,
            AnalysisPayload::Financial(_) => AnalysisType::Financial,
            AnalysisPayload::Strategy(_) => AnalysisType::Strategy,
            AnalysisPayload::ClientInfo(_) => AnalysisType::ClientInfo,
        }
    }

    /// Recommendation strings carried by this payload, if any.
    pub fn recommendations(&self) -> &[String] {
        match self {
            AnalysisPayload::Market(report) => &report.recommendations,
            AnalysisPayload::Financial(report) => &report.recommendations,
            _ => &[],
        }
    }

    /// One-line digest used when agents share insights in the dialogue.
    pub fn key_insight(&self) -> String {
        match self {
            AnalysisPayload::Market(report) => format!(
                "市場魅力度: {}, 成長率: {}%, 推奨: {}",
                report.market_attractiveness,
                report.growth_rate,
                top_recommendations(&report.recommendations)
            ),
            AnalysisPayload::Financial(report) => format!(
                "総合評価: {}, 営業利益率: {:.1}%, 推奨: {}",
                report.overall_assessment,
                report.profitability_ratios.operating_margin,
                top_recommendations(&report.recommendations)
            ),
            AnalysisPayload::Strategy(report) => {
                truncate_chars(&report.output, INSIGHT_EXCERPT_CHARS)
            }
            AnalysisPayload::ClientInfo(profile) => {
                truncate_chars(&profile.summary(), INSIGHT_EXCERPT_CHARS)
            }
        }
    }
}

fn top_recommendations(recommendations: &[String]) -> String {
    recommendations
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frameworks::market;
    use crate::project::MarketData;

    #[test]
    fn test_market_insight_digest() {
        let data = MarketData {
            market_size: 120_000_000_000.0,
            growth_rate: 12.0,
            ..Default::default()
        };
        let payload = AnalysisPayload::Market(market::analyze(&data));
        let insight = payload.key_insight();
        assert!(insight.contains("市場魅力度: 非常に高い"));
        assert!(insight.contains("成長率: 12%"));
    }

    #[test]
    fn test_strategy_insight_truncated() {
        let payload = AnalysisPayload::Strategy(StrategyReport {
            output: "あ".repeat(500),
            frameworks_used: vec![],
        });
        let insight = payload.key_insight();
        assert_eq!(insight.chars().count(), INSIGHT_EXCERPT_CHARS + 3);
        assert!(insight.ends_with("..."));
    }

    #[test]
    fn test_recommendations_accessor() {
        let payload = AnalysisPayload::Strategy(StrategyReport {
            output: "戦略".to_string(),
            frameworks_used: vec![],
        });
        assert!(payload.recommendations().is_empty());
    }
}
