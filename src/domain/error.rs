use std::io;

use thiserror::Error;

/// Library-wide error type for postcraft operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Generation was requested without a usable topic.
    #[error("Topic must not be blank")]
    BlankTopic,

    /// Generic input validation failure.
    #[error("{0}")]
    Validation(String),

    /// Configuration values are out of range or inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote orchestrator call failed.
    #[error("Orchestrator request failed: {message}")]
    OrchestratorError { message: String, status: Option<u16> },

    /// Instruction template could not be rendered.
    #[error("Template render failed: {0}")]
    TemplateRender(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
