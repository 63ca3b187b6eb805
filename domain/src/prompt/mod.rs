//! Prompt templates for model-backed operations.

pub mod analysis;
pub mod dialogue;

pub use analysis::{ClientInfoPrompt, StrategyPrompt};
pub use dialogue::DialoguePromptTemplate;
