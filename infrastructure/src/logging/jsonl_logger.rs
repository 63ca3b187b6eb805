//! JSONL file writer for run lifecycle events.
//!
//! Implements the progress port as a persistence adapter: every callback
//! is appended to the log file as a single JSON line with a `type` field
//! and `timestamp`. Composes with the interactive reporter through
//! `CompositeProgress`, so one run can both render bars and leave an audit
//! trail.

use consilium_application::ProgressNotifier;
use consilium_domain::{AgentStatus, DialoguePhase, OrchestrationSummary};
use serde_json::json;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL run logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on every event (the
/// event rate is a handful per run) and on `Drop`.
pub struct JsonlRunLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlRunLog {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create run log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create run log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_event(&self, event_type: &str, mut payload: serde_json::Value) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        if let serde_json::Value::Object(map) = &mut payload {
            map.insert("type".to_string(), json!(event_type));
            map.insert("timestamp".to_string(), json!(timestamp));
        }

        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(writer, "{}", payload) {
            warn!("Failed to write run log event: {}", e);
        }
        let _ = writer.flush();
    }
}

impl Drop for JsonlRunLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

impl ProgressNotifier for JsonlRunLog {
    fn on_fanout_start(&self, total_agents: usize) {
        self.write_event("fanout_start", json!({ "total_agents": total_agents }));
    }

    fn on_agent_complete(&self, agent: &str, status: AgentStatus) {
        self.write_event(
            "agent_complete",
            json!({ "agent": agent, "status": status.as_str() }),
        );
    }

    fn on_dialogue_start(&self) {
        self.write_event("dialogue_start", json!({}));
    }

    fn on_phase_complete(&self, phase: &DialoguePhase) {
        self.write_event("dialogue_phase_complete", json!({ "phase": phase.as_str() }));
    }

    fn on_dialogue_complete(&self, occurred: bool) {
        self.write_event("dialogue_complete", json!({ "occurred": occurred }));
    }

    fn on_run_complete(&self, summary: &OrchestrationSummary) {
        self.write_event(
            "run_complete",
            json!({
                "total_agents": summary.total_agents,
                "successful": summary.successful,
                "skipped": summary.skipped,
                "failed": summary.failed,
                "success_rate": summary.success_rate,
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.jsonl");

        let log = JsonlRunLog::new(&path).unwrap();
        log.on_fanout_start(3);
        log.on_agent_complete("MarketAnalysisAgent", AgentStatus::Success);
        log.on_dialogue_complete(true);
        drop(log);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "fanout_start");
        assert_eq!(first["total_agents"], 3);
        assert!(first["timestamp"].is_string());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["agent"], "MarketAnalysisAgent");
        assert_eq!(second["status"], "success");
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("run.jsonl");
        let log = JsonlRunLog::new(&path).unwrap();
        log.on_dialogue_start();
        assert!(path.exists());
    }
}
