//! Application layer for consilium
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod retry;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{CompositeProgress, NoProgress, ProgressNotifier},
};
pub use retry::{AttemptError, RetryError, RetryPolicy, call_with_retry};
pub use use_cases::agents::{
    Agent, ClientInfoAgent, FinancialAgent, MarketAgent, StrategyAgent,
};
pub use use_cases::orchestrate::Orchestrator;
pub use use_cases::run_dialogue::{DialogueError, DialogueManager};
