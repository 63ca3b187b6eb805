//! Orchestration value objects - immutable aggregates of one run.

use crate::analysis::{AgentResult, AgentStatus};
use crate::dialogue::DialogueResult;
use serde::Serialize;

/// Pure aggregate over the result list: counts and success rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrchestrationSummary {
    pub total_agents: usize,
    pub successful: usize,
    pub skipped: usize,
    pub failed: usize,
    /// `successful / total × 100`, 0 when no agents ran.
    pub success_rate: f64,
}

impl OrchestrationSummary {
    pub fn from_results(results: &[AgentResult]) -> Self {
        let total_agents = results.len();
        let successful = results.iter().filter(|r| r.is_success()).count();
        let skipped = results
            .iter()
            .filter(|r| r.status == AgentStatus::Skipped)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.status == AgentStatus::Error)
            .count();

        let success_rate = if total_agents > 0 {
            successful as f64 / total_agents as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_agents,
            successful,
            skipped,
            failed,
            success_rate,
        }
    }
}

/// Complete result of one orchestration run.
#[derive(Debug, Clone, Serialize)]
pub struct OrchestrationOutcome {
    /// One entry per configured agent, in configuration order.
    pub agent_results: Vec<AgentResult>,
    pub dialogue: DialogueResult,
    /// Assembled Markdown report.
    pub report: String,
    pub summary: OrchestrationSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FailureKind;

    #[test]
    fn test_summary_counts() {
        let results = vec![
            AgentResult::skipped("a", "データなし"),
            AgentResult::failure("b", FailureKind::Transport, "timeout"),
            AgentResult::skipped("c", "データなし"),
        ];
        let summary = OrchestrationSummary::from_results(&results);
        assert_eq!(summary.total_agents, 3);
        assert_eq!(summary.successful, 0);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.success_rate, 0.0);
    }

    #[test]
    fn test_success_rate_two_of_three() {
        use crate::analysis::{AnalysisPayload, StrategyReport};
        let success = || {
            AgentResult::success(
                "s",
                AnalysisPayload::Strategy(StrategyReport {
                    output: "o".to_string(),
                    frameworks_used: vec![],
                }),
                "t",
            )
        };
        let results = vec![success(), success(), AgentResult::skipped("c", "なし")];
        let summary = OrchestrationSummary::from_results(&results);
        assert!((summary.success_rate - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_success_rate_zero_agents() {
        let summary = OrchestrationSummary::from_results(&[]);
        assert_eq!(summary.total_agents, 0);
        assert_eq!(summary.success_rate, 0.0);
    }
}
