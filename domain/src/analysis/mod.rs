//! Analysis results produced by agents.

pub mod payload;
pub mod result;

pub use payload::{AnalysisPayload, AnalysisType, StrategyReport};
pub use result::{AgentResult, AgentStatus, FailureKind};
