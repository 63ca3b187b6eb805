//! Orchestration run aggregates.

pub mod value_objects;

pub use value_objects::{OrchestrationOutcome, OrchestrationSummary};
