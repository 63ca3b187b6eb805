//! Agent result value object.
//!
//! Exactly one [`AgentResult`] exists per agent invocation per run. The
//! constructors enforce the status contract: a Success carries a payload
//! and formatted text, a Skipped or Error carries a message instead.

use super::payload::{AnalysisPayload, AnalysisType};
use serde::Serialize;

/// Outcome status of one agent invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// The agent produced an analysis.
    Success,
    /// Required input was structurally absent. Expected, not a fault.
    Skipped,
    /// The agent failed after exhausting its own recovery.
    Error,
}

impl AgentStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, AgentStatus::Success)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Success => "success",
            AgentStatus::Skipped => "skipped",
            AgentStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of an agent failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport-level failure (timeout, rate limit, connection).
    Transport,
    /// The external call answered but the response could not be parsed.
    MalformedResponse,
    /// Unexpected internal fault (worker task died, etc.).
    Internal,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FailureKind::Transport => "transport",
            FailureKind::MalformedResponse => "malformed_response",
            FailureKind::Internal => "internal",
        };
        write!(f, "{}", label)
    }
}

/// Immutable record of one agent invocation.
#[derive(Debug, Clone, Serialize)]
pub struct AgentResult {
    pub agent_name: String,
    pub status: AgentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<AnalysisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<AnalysisPayload>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub formatted_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<FailureKind>,
}

impl AgentResult {
    /// A completed analysis with its formatted rendering.
    pub fn success(
        agent_name: impl Into<String>,
        payload: AnalysisPayload,
        formatted_text: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            status: AgentStatus::Success,
            analysis_type: Some(payload.analysis_type()),
            payload: Some(payload),
            formatted_text: formatted_text.into(),
            message: None,
            failure_kind: None,
        }
    }

    /// Required input was missing; the agent stepped aside.
    pub fn skipped(agent_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
            status: AgentStatus::Skipped,
            analysis_type: None,
            payload: None,
            formatted_text: String::new(),
            message: Some(message.into()),
            failure_kind: None,
        }
    }

    /// The agent failed; the fault is recorded, never propagated.
    pub fn failure(
        agent_name: impl Into<String>,
        kind: FailureKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            status: AgentStatus::Error,
            analysis_type: None,
            payload: None,
            formatted_text: String::new(),
            message: Some(message.into()),
            failure_kind: Some(kind),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Recommendation strings from the payload, empty unless Success.
    pub fn recommendations(&self) -> &[String] {
        self.payload
            .as_ref()
            .map(|p| p.recommendations())
            .unwrap_or(&[])
    }

    /// One-line digest for the insight-sharing phase.
    pub fn key_insight(&self) -> String {
        match &self.payload {
            Some(payload) => payload.key_insight(),
            None => "詳細な分析結果を参照してください".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::payload::StrategyReport;

    #[test]
    fn test_success_carries_payload_and_text() {
        let result = AgentResult::success(
            "StrategyAnalysisAgent",
            AnalysisPayload::Strategy(StrategyReport {
                output: "差別化戦略を推奨".to_string(),
                frameworks_used: vec!["3C分析".to_string()],
            }),
            "整形済みテキスト",
        );
        assert!(result.is_success());
        assert_eq!(result.analysis_type, Some(AnalysisType::Strategy));
        assert!(result.message.is_none());
        assert!(!result.formatted_text.is_empty());
    }

    #[test]
    fn test_skipped_carries_message_only() {
        let result = AgentResult::skipped("MarketAnalysisAgent", "市場分析データが提供されていません");
        assert_eq!(result.status, AgentStatus::Skipped);
        assert!(result.payload.is_none());
        assert!(result.formatted_text.is_empty());
        assert!(result.message.is_some());
    }

    #[test]
    fn test_failure_carries_kind() {
        let result = AgentResult::failure(
            "ClientInfoAgent",
            FailureKind::MalformedResponse,
            "JSON解析に失敗しました",
        );
        assert_eq!(result.status, AgentStatus::Error);
        assert_eq!(result.failure_kind, Some(FailureKind::MalformedResponse));
    }

    #[test]
    fn test_recommendations_empty_without_payload() {
        let result = AgentResult::skipped("FinancialAnalysisAgent", "データなし");
        assert!(result.recommendations().is_empty());
    }
}
