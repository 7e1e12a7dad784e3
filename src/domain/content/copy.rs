//! Copywriting: length variants and platform-specific post text.

use crate::domain::PlatformCopyMap;
use crate::domain::content::IdeationResult;

const LINKEDIN_CTA: &str = "CTA: Share your thoughts in the comments.";

/// Platforms with a dedicated copy rule. Anything else gets the short variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Twitter,
    LinkedIn,
    Other,
}

impl Platform {
    /// Match a platform identifier case-insensitively.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.trim().to_lowercase().as_str() {
            "instagram" => Platform::Instagram,
            "twitter" | "x/twitter" => Platform::Twitter,
            "linkedin" => Platform::LinkedIn,
            _ => Platform::Other,
        }
    }
}

/// Short, medium and long copy for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyVariants {
    pub short: String,
    pub medium: String,
    pub long: String,
}

/// Compose the three length variants.
pub fn variants(ideation: &IdeationResult, topic: &str) -> CopyVariants {
    let hook = ideation.hooks.first().map(String::as_str).unwrap_or_default();
    let angle = ideation.angles.first().map(String::as_str).unwrap_or_default();
    let leading_tags = ideation.hashtags.iter().take(2).cloned().collect::<Vec<_>>().join(" ");
    let all_tags = ideation.hashtags.join(" ");

    CopyVariants {
        short: format!("{hook} {topic} — quick summary. {leading_tags}").trim_end().to_string(),
        medium: format!("{hook} A short note about {topic}. Key reasons and a simple CTA. {all_tags}")
            .trim_end()
            .to_string(),
        long: format!("A detailed take on {topic}: {angle}. Tips: 1) ... 2) ... 3) ..."),
    }
}

/// Render post text for exactly the requested platforms, in request order.
pub fn compose(ideation: &IdeationResult, topic: &str, platforms: &[String]) -> PlatformCopyMap {
    let copy = variants(ideation, topic);
    let tags = ideation.hashtags.join(" ");

    platforms
        .iter()
        .map(|platform| {
            let text = match Platform::from_identifier(platform) {
                Platform::Instagram => format!("{}\n\n{}", copy.medium, tags),
                Platform::Twitter => format!("{} {}", copy.short, tags),
                Platform::LinkedIn => format!("{}\n{} {}", copy.long, LINKEDIN_CTA, tags),
                Platform::Other => copy.short.clone(),
            };
            (platform.clone(), text.trim_end().to_string())
        })
        .collect()
}
