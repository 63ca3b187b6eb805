//! Progress reporting for orchestration runs

use consilium_application::ProgressNotifier;
use consilium_domain::{AgentStatus, DialoguePhase};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress during a run with per-agent spinners and a phase bar
/// for the dialogue.
pub struct ProgressReporter {
    multi: MultiProgress,
    agent_bars: Mutex<HashMap<String, ProgressBar>>,
    dialogue_bar: Mutex<Option<ProgressBar>>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            agent_bars: Mutex::new(HashMap::new()),
            dialogue_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn status_label(status: AgentStatus) -> &'static str {
        match status {
            AgentStatus::Success => "✓ 成功",
            AgentStatus::Skipped => "⊘ スキップ",
            AgentStatus::Error => "✗ エラー",
        }
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_agent_start(&self, agent: &str) {
        let bar = self.multi.add(ProgressBar::new_spinner());
        bar.set_style(Self::spinner_style());
        bar.set_prefix(agent.to_string());
        bar.set_message("分析中...");
        bar.enable_steady_tick(Duration::from_millis(100));
        self.agent_bars
            .lock()
            .unwrap()
            .insert(agent.to_string(), bar);
    }

    fn on_agent_complete(&self, agent: &str, status: AgentStatus) {
        if let Some(bar) = self.agent_bars.lock().unwrap().remove(agent) {
            bar.finish_with_message(Self::status_label(status));
        }
    }

    fn on_dialogue_start(&self) {
        let phases = DialoguePhase::ordered().len() as u64;
        let bar = self.multi.add(ProgressBar::new(phases));
        bar.set_style(Self::phase_style());
        bar.set_prefix("エージェント間対話");
        *self.dialogue_bar.lock().unwrap() = Some(bar);
    }

    fn on_phase_start(&self, phase: &DialoguePhase) {
        if let Some(bar) = self.dialogue_bar.lock().unwrap().as_ref() {
            bar.set_message(phase.display_name());
        }
    }

    fn on_phase_complete(&self, _phase: &DialoguePhase) {
        if let Some(bar) = self.dialogue_bar.lock().unwrap().as_ref() {
            bar.inc(1);
        }
    }

    fn on_dialogue_complete(&self, occurred: bool) {
        if let Some(bar) = self.dialogue_bar.lock().unwrap().take() {
            if occurred {
                bar.finish_with_message("✓ 完了");
            } else {
                bar.abandon_with_message("⚠ 対話は実施されませんでした");
            }
        }
    }
}
