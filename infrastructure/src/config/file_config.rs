//! Configuration file schema.
//!
//! Everything has a default so an empty (or absent) file is a valid
//! configuration; the API key itself never lives in the file, only the
//! name of the environment variable holding it.

use consilium_application::{BehaviorConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::openai::OpenAiConfig;

/// Errors raised while resolving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Root configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub dialogue: DialogueConfig,
}

/// `[api]` section - model endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Per-call wait bound in seconds; absent means unbounded.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_timeout_secs() -> Option<u64> {
    Some(120)
}

/// `[retry]` section - shared retry policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_malformed_delay_secs")]
    pub malformed_delay_secs: u64,
    #[serde(default = "default_transport_delay_secs")]
    pub transport_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            malformed_delay_secs: default_malformed_delay_secs(),
            transport_delay_secs: default_transport_delay_secs(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_malformed_delay_secs() -> u64 {
    1
}

fn default_transport_delay_secs() -> u64 {
    2
}

/// `[dialogue]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialogueConfig {
    #[serde(default = "default_dialogue_enabled")]
    pub enabled: bool,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            enabled: default_dialogue_enabled(),
        }
    }
}

fn default_dialogue_enabled() -> bool {
    true
}

impl FileConfig {
    /// Behavior values for the application layer.
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.api.timeout_secs).with_retry(RetryPolicy {
            max_attempts: self.retry.max_attempts,
            malformed_delay: Duration::from_secs(self.retry.malformed_delay_secs),
            transport_delay: Duration::from_secs(self.retry.transport_delay_secs),
        })
    }

    /// Gateway settings, resolving the API key from the environment.
    pub fn gateway_config(&self) -> Result<OpenAiConfig, ConfigError> {
        let api_key = std::env::var(&self.api.api_key_env)
            .map_err(|_| ConfigError::MissingApiKey(self.api.api_key_env.clone()))?;

        Ok(OpenAiConfig {
            base_url: self.api.base_url.clone(),
            api_key,
            model: self.api.model.clone(),
            temperature: self.api.temperature,
            max_tokens: self.api.max_tokens,
            timeout: self.api.timeout_secs.map(Duration::from_secs),
        })
    }
}
