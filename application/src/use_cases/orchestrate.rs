//! Orchestration use case.
//!
//! Fans the configured agents out concurrently over one immutable project
//! snapshot, joins them all (an individual failure never cancels its
//! siblings), optionally runs the dialogue, and assembles the report.
//!
//! `run` never fails: agent faults are values in the result list, a
//! dialogue fault degrades to a not-held dialogue, and assembly is a pure
//! function over well-formed inputs.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::agents::Agent;
use crate::use_cases::run_dialogue::DialogueManager;
use consilium_domain::{
    AgentResult, DialogueResult, FailureKind, OrchestrationOutcome, OrchestrationSummary,
    ProjectData, ReportAssembler,
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::ports::llm_gateway::LlmGateway;

/// Runs the full multi-agent analysis flow.
pub struct Orchestrator<G: LlmGateway + 'static> {
    agents: Vec<Arc<dyn Agent>>,
    dialogue: Option<DialogueManager<G>>,
}

impl<G: LlmGateway + 'static> Orchestrator<G> {
    pub fn new(agents: Vec<Arc<dyn Agent>>) -> Self {
        Self {
            agents,
            dialogue: None,
        }
    }

    /// Enable the dialogue stage.
    pub fn with_dialogue(mut self, manager: DialogueManager<G>) -> Self {
        self.dialogue = Some(manager);
        self
    }

    /// Execute the run with default (no-op) progress.
    pub async fn run(&self, project_data: ProjectData) -> OrchestrationOutcome {
        self.run_with_progress(project_data, &NoProgress).await
    }

    /// Execute the run with progress callbacks.
    pub async fn run_with_progress(
        &self,
        project_data: ProjectData,
        progress: &dyn ProgressNotifier,
    ) -> OrchestrationOutcome {
        info!("Starting orchestration with {} agents", self.agents.len());
        let project_info = project_data.info();

        let agent_results = self.fan_out(Arc::new(project_data), progress).await;
        let summary = OrchestrationSummary::from_results(&agent_results);

        let dialogue = match &self.dialogue {
            Some(manager) => match manager.run(&agent_results, &project_info, progress).await {
                Ok(result) => result,
                Err(e) => {
                    // Dialogue failure must never abort the run
                    warn!("dialogue failed, continuing without it: {e}");
                    progress.on_dialogue_complete(false);
                    DialogueResult::not_held(format!("対話フェーズでエラーが発生しました: {e}"))
                }
            },
            None => DialogueResult::not_held("エージェント間対話は無効化されています"),
        };

        let report = ReportAssembler::assemble(&project_info, &agent_results, &dialogue);
        progress.on_run_complete(&summary);

        OrchestrationOutcome {
            agent_results,
            dialogue,
            report,
            summary,
        }
    }

    /// Launch every agent against the shared snapshot and join them all.
    ///
    /// Results land in configuration-order slots regardless of completion
    /// order. A task that died at the scheduling layer (agents themselves
    /// never fail) leaves a hole, filled with a placeholder Error result so
    /// the list always has exactly one entry per configured agent.
    async fn fan_out(
        &self,
        data: Arc<ProjectData>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<AgentResult> {
        progress.on_fanout_start(self.agents.len());

        let mut join_set = JoinSet::new();
        for (index, agent) in self.agents.iter().enumerate() {
            progress.on_agent_start(agent.name());
            let agent = Arc::clone(agent);
            let data = Arc::clone(&data);
            join_set.spawn(async move { (index, agent.analyze(&data).await) });
        }

        let mut slots: Vec<Option<AgentResult>> = vec![None; self.agents.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    info!("agent {} finished: {}", result.agent_name, result.status);
                    progress.on_agent_complete(&result.agent_name, result.status);
                    slots[index] = Some(result);
                }
                Err(e) => {
                    warn!("agent task aborted before producing a result: {e}");
                }
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    AgentResult::failure(
                        format!("Agent_{}", index + 1),
                        FailureKind::Internal,
                        "エージェントタスクが結果を返しませんでした",
                    )
                })
            })
            .collect()
    }
}
