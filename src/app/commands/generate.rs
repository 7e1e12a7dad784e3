//! Content assembly: choose remote or local generation and build the package.

use tracing::info;

use crate::domain::content::{compose, ideate, image_prompt, schedule};
use crate::domain::{AppError, ContentPackage, GenerationRequest};
use crate::services::{RemoteAttempt, RemoteFragment, RemoteGenerator};

pub const REMOTE_UNAVAILABLE_WARNING: &str =
    "Remote orchestrator not configured; using local generation";
pub const REMOTE_UNUSABLE_WARNING: &str =
    "Remote orchestrator returned no usable JSON; using local generation";

/// Whether a remote attempt was made for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyMode {
    LocalOnly,
    RemoteAttempted,
}

/// Which pipeline produced the package content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageSource {
    Local,
    Remote,
}

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct Generation {
    pub package: ContentPackage,
    pub mode: AssemblyMode,
    pub source: PackageSource,
    /// Non-fatal problems to show the operator.
    pub warnings: Vec<String>,
}

/// Generate a package for `request`.
///
/// The remote path is taken only when `use_remote` is set and a generator is
/// available; any remote failure falls through to the local pipeline.
pub fn execute(
    request: &GenerationRequest,
    use_remote: bool,
    remote: Option<&RemoteGenerator<'_>>,
) -> Result<Generation, AppError> {
    request.validate()?;

    let mut warnings = Vec::new();
    let generator = match (use_remote, remote) {
        (true, Some(generator)) => Some(generator),
        (true, None) => {
            warnings.push(REMOTE_UNAVAILABLE_WARNING.to_string());
            None
        }
        (false, _) => None,
    };

    let mode = match generator {
        Some(_) => AssemblyMode::RemoteAttempted,
        None => AssemblyMode::LocalOnly,
    };

    if let Some(generator) = generator {
        match generator.generate(request) {
            RemoteAttempt::Generated(fragment) => {
                info!(topic = %request.topic, "package generated remotely");
                return Ok(Generation {
                    package: from_remote(request, fragment),
                    mode,
                    source: PackageSource::Remote,
                    warnings,
                });
            }
            RemoteAttempt::Unusable => warnings.push(REMOTE_UNUSABLE_WARNING.to_string()),
            RemoteAttempt::Failed(err) => {
                warnings.push(format!("Remote generation failed: {}; using local generation", err))
            }
        }
    }

    info!(topic = %request.topic, "package generated locally");
    Ok(Generation { package: build_local(request), mode, source: PackageSource::Local, warnings })
}

/// Run the full local pipeline.
pub fn build_local(request: &GenerationRequest) -> ContentPackage {
    let ideation = ideate(&request.topic);
    let publisher_preview = compose(&ideation, &request.topic, &request.platforms);

    ContentPackage::from_parts(
        request,
        publisher_preview,
        image_prompt(&request.topic),
        schedule(&request.timezone),
    )
}

/// Adopt a remote fragment, filling an empty preview from the local copywriter.
fn from_remote(request: &GenerationRequest, fragment: RemoteFragment) -> ContentPackage {
    let publisher_preview = if fragment.publisher_preview.is_empty() {
        compose(&ideate(&request.topic), &request.topic, &request.platforms)
    } else {
        fragment.publisher_preview
    };

    ContentPackage::from_parts(request, publisher_preview, fragment.image_prompt, fragment.schedule)
}
