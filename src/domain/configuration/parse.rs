//! Pure parse/validate for `postcraft.toml`.

use crate::domain::{AppConfig, AppError};

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Render configuration back to TOML.
pub fn render_config(config: &AppConfig) -> Result<String, AppError> {
    Ok(toml::to_string_pretty(config)?)
}
