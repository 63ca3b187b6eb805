//! Aggregate dialogue result.

use super::phase::{DialoguePhase, DialoguePhaseResult};
use serde::Serialize;

/// Result of one dialogue run.
///
/// A dialogue needs at least two successful analyses to reconcile; with
/// fewer, or when a phase fails, the result is a degenerate value with
/// `occurred = false` and an explanatory message.
#[derive(Debug, Clone, Serialize)]
pub struct DialogueResult {
    pub occurred: bool,
    pub phases: Vec<DialoguePhaseResult>,
    pub consensus_items: Vec<String>,
    pub action_items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DialogueResult {
    /// A completed dialogue with its extracted items.
    pub fn held(
        phases: Vec<DialoguePhaseResult>,
        consensus_items: Vec<String>,
        action_items: Vec<String>,
    ) -> Self {
        Self {
            occurred: true,
            phases,
            consensus_items,
            action_items,
            message: None,
        }
    }

    /// A dialogue that did not take place.
    pub fn not_held(message: impl Into<String>) -> Self {
        Self {
            occurred: false,
            phases: Vec::new(),
            consensus_items: Vec::new(),
            action_items: Vec::new(),
            message: Some(message.into()),
        }
    }

    /// Narrative of the final (consensus) phase, if the dialogue occurred.
    pub fn final_narrative(&self) -> Option<&str> {
        self.phases
            .iter()
            .find(|p| p.phase == DialoguePhase::ConsensusBuilding)
            .map(|p| p.narrative.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_held_is_empty() {
        let result = DialogueResult::not_held("対話に必要な分析結果が不足しています");
        assert!(!result.occurred);
        assert!(result.phases.is_empty());
        assert!(result.consensus_items.is_empty());
        assert!(result.message.is_some());
    }

    #[test]
    fn test_final_narrative_lookup() {
        let phases = vec![
            DialoguePhaseResult::new(DialoguePhase::InsightSharing, "共有"),
            DialoguePhaseResult::new(DialoguePhase::ConflictIdentification, "矛盾"),
            DialoguePhaseResult::new(DialoguePhase::ConsensusBuilding, "合意"),
        ];
        let result = DialogueResult::held(phases, vec![], vec![]);
        assert_eq!(result.final_narrative(), Some("合意"));
    }
}
