//! Generation request model.

use crate::domain::AppError;

/// User inputs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Free-text topic or brief.
    pub topic: String,
    /// Brand voice, e.g. "Friendly" or "Professional".
    pub voice: String,
    /// Optional target audience description.
    pub audience: Option<String>,
    /// Platform identifiers in the order they were requested.
    pub platforms: Vec<String>,
    /// IANA timezone identifier used for the posting schedule.
    pub timezone: String,
}

impl GenerationRequest {
    /// Build a request, normalizing the optional and repeated fields.
    ///
    /// Blank audiences become `None`; platform identifiers are trimmed, empty
    /// entries dropped and duplicates (case-insensitive) collapsed keeping the
    /// first occurrence.
    pub fn new(
        topic: impl Into<String>,
        voice: impl Into<String>,
        audience: Option<String>,
        platforms: Vec<String>,
        timezone: impl Into<String>,
    ) -> Self {
        let audience = audience.map(|value| value.trim().to_string()).filter(|v| !v.is_empty());

        let mut unique: Vec<String> = Vec::with_capacity(platforms.len());
        for platform in platforms {
            let platform = platform.trim();
            if platform.is_empty() {
                continue;
            }
            if unique.iter().any(|seen| seen.eq_ignore_ascii_case(platform)) {
                continue;
            }
            unique.push(platform.to_string());
        }

        Self {
            topic: topic.into(),
            voice: voice.into(),
            audience,
            platforms: unique,
            timezone: timezone.into(),
        }
    }

    /// Reject requests that cannot be generated.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.topic.trim().is_empty() {
            return Err(AppError::BlankTopic);
        }
        Ok(())
    }
}
