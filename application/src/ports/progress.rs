//! Progress notification port
//!
//! Fire-and-forget side channel for run lifecycle events. Implementations
//! live in the presentation and infrastructure layers (console bars, JSONL
//! run log). Notifications must never affect control flow and are never
//! awaited.

use consilium_domain::{AgentStatus, DialoguePhase, OrchestrationSummary};

/// Callbacks for orchestration lifecycle events.
///
/// Every method has a no-op default so implementations subscribe only to
/// what they render.
pub trait ProgressNotifier: Send + Sync {
    /// The concurrent agent fan-out is about to launch.
    fn on_fanout_start(&self, _total_agents: usize) {}

    /// One agent has been scheduled.
    fn on_agent_start(&self, _agent: &str) {}

    /// One agent finished (in completion order, not configuration order).
    fn on_agent_complete(&self, _agent: &str, _status: AgentStatus) {}

    /// The dialogue is starting (entry condition was met).
    fn on_dialogue_start(&self) {}

    fn on_phase_start(&self, _phase: &DialoguePhase) {}

    fn on_phase_complete(&self, _phase: &DialoguePhase) {}

    /// The dialogue finished; `occurred` is false when it degraded.
    fn on_dialogue_complete(&self, _occurred: bool) {}

    /// The whole run finished.
    fn on_run_complete(&self, _summary: &OrchestrationSummary) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {}

/// A progress notifier that delegates to multiple inner notifiers.
///
/// Used to fan out lifecycle events to both the console reporter and the
/// JSONL run log simultaneously.
pub struct CompositeProgress<'a> {
    delegates: Vec<&'a dyn ProgressNotifier>,
}

impl<'a> CompositeProgress<'a> {
    pub fn new(delegates: Vec<&'a dyn ProgressNotifier>) -> Self {
        Self { delegates }
    }
}

/// Macro to delegate a method call to all inner notifiers.
macro_rules! delegate {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        for d in &$self.delegates {
            d.$method($($arg),*);
        }
    };
}

impl ProgressNotifier for CompositeProgress<'_> {
    fn on_fanout_start(&self, total_agents: usize) {
        delegate!(self, on_fanout_start, total_agents);
    }

    fn on_agent_start(&self, agent: &str) {
        delegate!(self, on_agent_start, agent);
    }

    fn on_agent_complete(&self, agent: &str, status: AgentStatus) {
        delegate!(self, on_agent_complete, agent, status);
    }

    fn on_dialogue_start(&self) {
        delegate!(self, on_dialogue_start);
    }

    fn on_phase_start(&self, phase: &DialoguePhase) {
        delegate!(self, on_phase_start, phase);
    }

    fn on_phase_complete(&self, phase: &DialoguePhase) {
        delegate!(self, on_phase_complete, phase);
    }

    fn on_dialogue_complete(&self, occurred: bool) {
        delegate!(self, on_dialogue_complete, occurred);
    }

    fn on_run_complete(&self, summary: &OrchestrationSummary) {
        delegate!(self, on_run_complete, summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting(AtomicUsize);

    impl ProgressNotifier for Counting {
        fn on_agent_complete(&self, _agent: &str, _status: AgentStatus) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_composite_fans_out() {
        let a = Counting(AtomicUsize::new(0));
        let b = Counting(AtomicUsize::new(0));
        let composite = CompositeProgress::new(vec![&a, &b]);
        composite.on_agent_complete("MarketAnalysisAgent", AgentStatus::Success);
        assert_eq!(a.0.load(Ordering::SeqCst), 1);
        assert_eq!(b.0.load(Ordering::SeqCst), 1);
    }
}
