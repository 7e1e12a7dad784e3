//! The assembled content package and its per-platform copy map.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::GenerationRequest;

/// Platform identifier to post text, kept in insertion order.
pub type PlatformCopyMap = IndexMap<String, String>;

/// The canonical output of one generation run.
///
/// Built once, fully populated, then held read-only for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPackage {
    pub topic: String,
    pub voice: String,
    pub audience: Option<String>,
    pub platforms: Vec<String>,
    pub publisher_preview: PlatformCopyMap,
    pub image_prompt: String,
    pub schedule: Vec<String>,
}

impl ContentPackage {
    /// Combine request metadata with generated content.
    pub fn from_parts(
        request: &GenerationRequest,
        publisher_preview: PlatformCopyMap,
        image_prompt: String,
        schedule: Vec<String>,
    ) -> Self {
        Self {
            topic: request.topic.clone(),
            voice: request.voice.clone(),
            audience: request.audience.clone(),
            platforms: request.platforms.clone(),
            publisher_preview,
            image_prompt,
            schedule,
        }
    }
}
