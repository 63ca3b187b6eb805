//! Analysis agents.
//!
//! An agent is one unit of analysis behind a single capability:
//! `analyze(project_data) -> AgentResult`. The operation is **total**: any
//! internal fault is caught and converted into a result with status Error,
//! and structurally missing input yields Skipped. This keeps the
//! orchestrator's fan-in trivial: it only ever collects values.
//!
//! Two shapes exist:
//! - pure-compute agents wrapping a deterministic scoring framework
//!   ([`MarketAgent`], [`FinancialAgent`])
//! - delegating agents issuing a retried model call
//!   ([`StrategyAgent`], [`ClientInfoAgent`])

pub mod client_info;
pub mod financial;
pub mod market;
pub mod strategy;

pub use client_info::ClientInfoAgent;
pub use financial::FinancialAgent;
pub use market::MarketAgent;
pub use strategy::StrategyAgent;

use async_trait::async_trait;
use consilium_domain::{AgentResult, ProjectData};

/// One analysis unit. `analyze` never fails.
#[async_trait]
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    async fn analyze(&self, data: &ProjectData) -> AgentResult;
}
