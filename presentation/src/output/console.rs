//! Console output formatter for orchestration results

use crate::cli::OutputFormat;
use colored::Colorize;
use consilium_domain::{AgentStatus, OrchestrationOutcome};

/// Formats orchestration results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the result according to the selected output format.
    pub fn format(outcome: &OrchestrationOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => {
                format!("{}\n\n{}", Self::format_summary(outcome), outcome.report)
            }
            OutputFormat::Report => outcome.report.clone(),
            OutputFormat::Json => serde_json::to_string_pretty(outcome)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        }
    }

    /// Per-agent status table plus counts.
    pub fn format_summary(outcome: &OrchestrationOutcome) -> String {
        let mut output = String::new();
        let rule = "=".repeat(60);

        output.push_str(&format!("\n{}\n", "分析結果サマリー".bold()));
        output.push_str(&format!("{}\n", rule));

        for result in &outcome.agent_results {
            let line = match result.status {
                AgentStatus::Success => {
                    format!("✓ {}: {}", result.agent_name, "成功".green())
                }
                AgentStatus::Skipped => format!(
                    "⊘ {}: {} ({})",
                    result.agent_name,
                    "スキップ".yellow(),
                    result.message.as_deref().unwrap_or("データなし")
                ),
                AgentStatus::Error => format!(
                    "✗ {}: {} ({})",
                    result.agent_name,
                    "エラー".red(),
                    result.message.as_deref().unwrap_or("不明なエラー")
                ),
            };
            output.push_str(&line);
            output.push('\n');
        }

        let summary = &outcome.summary;
        output.push_str(&format!("{}\n", rule));
        output.push_str(&format!(
            "総エージェント数: {} / 成功: {} / スキップ: {} / 失敗: {}\n",
            summary.total_agents, summary.successful, summary.skipped, summary.failed
        ));
        output.push_str(&format!("成功率: {:.1}%\n", summary.success_rate));

        if !outcome.dialogue.occurred
            && let Some(message) = &outcome.dialogue.message
        {
            output.push_str(&format!("対話: {}\n", message.yellow()));
        }

        output
    }
}
