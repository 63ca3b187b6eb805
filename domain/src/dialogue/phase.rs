//! Dialogue phase value objects.

use crate::analysis::AnalysisType;
use serde::Serialize;

/// One step of the dialogue state machine, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialoguePhase {
    InsightSharing,
    ConflictIdentification,
    ConsensusBuilding,
}

impl DialoguePhase {
    /// All phases in execution order.
    pub fn ordered() -> [DialoguePhase; 3] {
        [
            DialoguePhase::InsightSharing,
            DialoguePhase::ConflictIdentification,
            DialoguePhase::ConsensusBuilding,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DialoguePhase::InsightSharing => "insight_sharing",
            DialoguePhase::ConflictIdentification => "conflict_identification",
            DialoguePhase::ConsensusBuilding => "consensus_building",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DialoguePhase::InsightSharing => "洞察の共有",
            DialoguePhase::ConflictIdentification => "矛盾点の特定",
            DialoguePhase::ConsensusBuilding => "合意形成",
        }
    }
}

impl std::fmt::Display for DialoguePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One agent's contribution to the insight-sharing phase.
#[derive(Debug, Clone, Serialize)]
pub struct AgentInsight {
    pub agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<AnalysisType>,
    pub digest: String,
}

/// Output of one dialogue phase.
#[derive(Debug, Clone, Serialize)]
pub struct DialoguePhaseResult {
    pub phase: DialoguePhase,
    /// Raw model text for this phase.
    pub narrative: String,
    /// Structured per-agent digests; populated for insight sharing only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<AgentInsight>,
}

impl DialoguePhaseResult {
    pub fn new(phase: DialoguePhase, narrative: impl Into<String>) -> Self {
        Self {
            phase,
            narrative: narrative.into(),
            insights: Vec::new(),
        }
    }

    pub fn with_insights(mut self, insights: Vec<AgentInsight>) -> Self {
        self.insights = insights;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        let phases = DialoguePhase::ordered();
        assert_eq!(phases[0], DialoguePhase::InsightSharing);
        assert_eq!(phases[2], DialoguePhase::ConsensusBuilding);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DialoguePhase::InsightSharing.to_string(), "洞察の共有");
        assert_eq!(DialoguePhase::ConsensusBuilding.as_str(), "consensus_building");
    }
}
