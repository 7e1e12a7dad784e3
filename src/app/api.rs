//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, session creation and command execution.

use std::path::Path;

use crate::app::Session;
use crate::app::commands::{export, preview};
use crate::app::config;
use crate::domain::configuration::render_config;

pub use crate::app::commands::export::DEFAULT_EXPORT_FILE;
pub use crate::app::commands::generate::{AssemblyMode, Generation, PackageSource};
pub use crate::domain::{AppConfig, AppError, ContentPackage, GenerationRequest};

/// Load configuration from an explicit path or the default locations.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    config::load_config(path)
}

/// Open a session using configuration from `config_path`.
pub fn open_session(config_path: Option<&Path>) -> Result<Session, AppError> {
    Ok(Session::from_config(load_config(config_path)?))
}

/// Generate a single package with a fresh session.
pub fn generate(
    config_path: Option<&Path>,
    request: &GenerationRequest,
    use_remote: bool,
) -> Result<Generation, AppError> {
    open_session(config_path)?.generate(request, use_remote)
}

/// Plain-text preview of a package.
pub fn render_preview(package: &ContentPackage) -> String {
    preview::render(package)
}

/// Pretty-printed JSON export of a package.
pub fn export_json(package: &ContentPackage) -> Result<String, AppError> {
    export::to_json(package)
}

/// Write the JSON export of a package to `path`.
pub fn export_to(package: &ContentPackage, path: &Path) -> Result<(), AppError> {
    export::write(package, path)
}

/// Effective configuration rendered as TOML.
pub fn show_config(config_path: Option<&Path>) -> Result<String, AppError> {
    render_config(&load_config(config_path)?)
}
