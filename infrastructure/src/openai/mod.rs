//! OpenAI-compatible chat-completion adapter.

pub mod gateway;

pub use gateway::{OpenAiConfig, OpenAiGateway};
