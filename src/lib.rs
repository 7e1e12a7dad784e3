//! postcraft: draft platform-tailored social media copy, image prompts and
//! posting schedules, optionally through a remote LLM orchestrator.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::Session;
pub use app::api::{AssemblyMode, DEFAULT_EXPORT_FILE, Generation, PackageSource};
pub use domain::{AppConfig, AppError, ContentPackage, GenerationRequest, PlatformCopyMap};

/// Generate a package using configuration from `config_path` (or the
/// default locations) and return it with any fallback warnings.
pub fn generate(
    config_path: Option<&Path>,
    request: &GenerationRequest,
    use_remote: bool,
) -> Result<Generation, AppError> {
    app::api::generate(config_path, request, use_remote)
}

/// Generate a package with the local pipeline only.
pub fn generate_local(request: &GenerationRequest) -> Result<ContentPackage, AppError> {
    request.validate()?;
    Ok(app::commands::generate::build_local(request))
}
