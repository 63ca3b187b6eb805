//! Configuration loading and file schema.

pub mod file_config;
pub mod loader;

pub use file_config::{ApiConfig, ConfigError, DialogueConfig, FileConfig, RetryConfig};
pub use loader::ConfigLoader;
