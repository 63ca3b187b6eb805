//! Dialogue manager use case.
//!
//! Drives the three-phase negotiation over the successful agent results.
//! Phases run strictly in sequence because each prompt embeds the output
//! of the previous phases; the consensus prompt receives the two earlier
//! narratives as explicit parameters.
//!
//! A model failure inside any phase aborts the whole dialogue (the phases
//! are causally chained, a partial dialogue has no meaning). The error
//! propagates to the orchestrator, which degrades the run's dialogue
//! result instead of failing the run.

use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use crate::retry::{RetryError, call_with_retry};
use crate::use_cases::shared::complete_with_config;
use consilium_domain::{
    AgentInsight, AgentResult, DialoguePhase, DialoguePhaseResult, DialoguePromptTemplate,
    DialogueResult, ProjectInfo, extract_consensus_and_actions,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during the dialogue flow
#[derive(Error, Debug)]
pub enum DialogueError {
    #[error("dialogue phase '{}' failed: {source}", .phase.as_str())]
    PhaseFailed {
        phase: DialoguePhase,
        #[source]
        source: RetryError,
    },
}

/// Use case for facilitating the inter-agent dialogue.
pub struct DialogueManager<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    config: BehaviorConfig,
}

impl<G: LlmGateway + 'static> DialogueManager<G> {
    pub fn new(gateway: Arc<G>, config: BehaviorConfig) -> Self {
        Self { gateway, config }
    }

    /// Run the dialogue over the agent results.
    ///
    /// Returns a degenerate `occurred = false` result when fewer than two
    /// analyses succeeded; one perspective has nothing to negotiate with.
    pub async fn run(
        &self,
        agent_results: &[AgentResult],
        project: &ProjectInfo,
        progress: &dyn ProgressNotifier,
    ) -> Result<DialogueResult, DialogueError> {
        let successful: Vec<&AgentResult> =
            agent_results.iter().filter(|r| r.is_success()).collect();

        if successful.len() < 2 {
            debug!(
                "dialogue not held: {} successful result(s)",
                successful.len()
            );
            return Ok(DialogueResult::not_held("対話に必要な分析結果が不足しています"));
        }

        info!("Starting dialogue across {} analyses", successful.len());
        progress.on_dialogue_start();

        let sharing = self.phase_share_insights(&successful, project, progress).await?;
        let conflict = self
            .phase_identify_conflicts(&successful, project, progress)
            .await?;
        let consensus = self
            .phase_build_consensus(project, &sharing.narrative, &conflict.narrative, progress)
            .await?;

        let (consensus_items, action_items) = extract_consensus_and_actions(&consensus.narrative);
        info!(
            "Dialogue complete: {} consensus item(s), {} action item(s)",
            consensus_items.len(),
            action_items.len()
        );
        progress.on_dialogue_complete(true);

        Ok(DialogueResult::held(
            vec![sharing, conflict, consensus],
            consensus_items,
            action_items,
        ))
    }

    /// Phase 1: put each agent's digest on the table and synthesize.
    async fn phase_share_insights(
        &self,
        results: &[&AgentResult],
        project: &ProjectInfo,
        progress: &dyn ProgressNotifier,
    ) -> Result<DialoguePhaseResult, DialogueError> {
        let phase = DialoguePhase::InsightSharing;
        progress.on_phase_start(&phase);

        let insights: Vec<AgentInsight> = results
            .iter()
            .map(|result| AgentInsight {
                agent: result.agent_name.clone(),
                analysis_type: result.analysis_type,
                digest: result.key_insight(),
            })
            .collect();

        let prompt = DialoguePromptTemplate::insight_sharing_prompt(project, &insights);
        let narrative = self
            .complete(phase, DialoguePromptTemplate::insight_sharing_system(), &prompt)
            .await?;

        progress.on_phase_complete(&phase);
        Ok(DialoguePhaseResult::new(phase, narrative).with_insights(insights))
    }

    /// Phase 2: compare recommendations for contradictions.
    async fn phase_identify_conflicts(
        &self,
        results: &[&AgentResult],
        project: &ProjectInfo,
        progress: &dyn ProgressNotifier,
    ) -> Result<DialoguePhaseResult, DialogueError> {
        let phase = DialoguePhase::ConflictIdentification;
        progress.on_phase_start(&phase);

        let prompt = DialoguePromptTemplate::conflict_prompt(project, results);
        let narrative = self
            .complete(phase, DialoguePromptTemplate::conflict_system(), &prompt)
            .await?;

        progress.on_phase_complete(&phase);
        Ok(DialoguePhaseResult::new(phase, narrative))
    }

    /// Phase 3: reconcile the two preceding narratives into a consensus.
    async fn phase_build_consensus(
        &self,
        project: &ProjectInfo,
        insight_narrative: &str,
        conflict_narrative: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<DialoguePhaseResult, DialogueError> {
        let phase = DialoguePhase::ConsensusBuilding;
        progress.on_phase_start(&phase);

        let prompt = DialoguePromptTemplate::consensus_prompt(
            project,
            insight_narrative,
            conflict_narrative,
        );
        let narrative = self
            .complete(phase, DialoguePromptTemplate::consensus_system(), &prompt)
            .await?;

        progress.on_phase_complete(&phase);
        Ok(DialoguePhaseResult::new(phase, narrative))
    }

    async fn complete(
        &self,
        phase: DialoguePhase,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, DialogueError> {
        call_with_retry(&self.config.retry, || {
            complete_with_config(self.gateway.as_ref(), &self.config, system_prompt, user_prompt)
        })
        .await
        .map_err(|source| DialogueError::PhaseFailed { phase, source })
    }
}
