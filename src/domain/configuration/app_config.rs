//! Application configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `postcraft.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Defaults applied to CLI inputs that were not given.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Remote orchestrator configuration.
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.remote.validate()?;
        Ok(())
    }
}

/// Input defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Brand voice used when none is given.
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Timezone used for scheduling when none is given.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Platforms used when none are given.
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { voice: default_voice(), timezone: default_timezone(), platforms: Vec::new() }
    }
}

/// Remote orchestrator configuration.
///
/// The orchestrator is considered available only when `api_url` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Orchestrator run endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<Url>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Agent name sent with each run.
    #[serde(default = "default_agent")]
    pub agent: String,
    /// Model identifier sent with each run.
    #[serde(default = "default_model")]
    pub model: String,
    /// Token budget for the generation task.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Environment variable holding the API key, read at call time.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_secs: default_timeout(),
            agent: default_agent(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("remote.timeout_secs must be greater than 0"));
        }
        if self.max_tokens == 0 {
            return Err(AppError::config_error("remote.max_tokens must be greater than 0"));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::config_error("remote.api_key_env must not be empty"));
        }
        Ok(())
    }
}

fn default_voice() -> String {
    "Friendly".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_timeout() -> u64 {
    20
}

fn default_agent() -> String {
    "content_agent".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1200
}

fn default_api_key_env() -> String {
    "CREW_API_KEY".to_string()
}
