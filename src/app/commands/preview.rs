//! Human-readable rendering of a content package.

use chrono::DateTime;

use crate::domain::ContentPackage;

const MISSING_COPY: &str = "(no copy generated for this platform)";

/// Format an ISO-8601 timestamp as `YYYY-MM-DD hh:mm AM`, or return it unchanged.
pub fn iso_to_readable(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|at| at.format("%Y-%m-%d %I:%M %p").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Render the package as plain text for the terminal.
pub fn render(package: &ContentPackage) -> String {
    let mut out = String::new();

    out.push_str(&format!("Topic: {}\n", package.topic));
    out.push_str(&format!(
        "Voice: {} | Audience: {}\n",
        package.voice,
        package.audience.as_deref().unwrap_or("—")
    ));
    out.push_str("\nImage Prompt:\n");
    out.push_str(&format!("  {}\n", package.image_prompt));
    out.push_str("\nRecommended Schedule:\n");
    if package.schedule.is_empty() {
        out.push_str("  - No schedule generated.\n");
    }
    for slot in &package.schedule {
        out.push_str(&format!("  - {}\n", iso_to_readable(slot)));
    }
    out.push_str("\nPlatform-specific Preview:\n");
    if package.platforms.is_empty() {
        out.push_str(
            "⚠️  No platforms selected. Choose at least one platform to get platform-specific copy.\n",
        );
    }
    for platform in &package.platforms {
        let copy = package.publisher_preview.get(platform).map(String::as_str).unwrap_or(MISSING_COPY);
        out.push_str(&format!("[{} Post]\n{}\n---\n", platform, copy));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlatformCopyMap;

    fn package(platforms: &[&str], preview: PlatformCopyMap, schedule: Vec<String>) -> ContentPackage {
        ContentPackage {
            topic: "Solar Backpack Launch".into(),
            voice: "Friendly".into(),
            audience: None,
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            publisher_preview: preview,
            image_prompt: "A hiker".into(),
            schedule,
        }
    }

    #[test]
    fn readable_timestamp_keeps_local_wall_time() {
        assert_eq!(iso_to_readable("2025-11-22T19:00:00+05:30"), "2025-11-22 07:00 PM");
        assert_eq!(iso_to_readable("2025-11-22T10:00:00+00:00"), "2025-11-22 10:00 AM");
    }

    #[test]
    fn unparseable_timestamp_is_returned_verbatim() {
        assert_eq!(iso_to_readable("next tuesday"), "next tuesday");
    }

    #[test]
    fn render_lists_requested_platforms_only() {
        let preview: PlatformCopyMap = [("Instagram", "Hello"), ("Mastodon", "extra")]
            .into_iter()
            .map(|(platform, copy)| (platform.to_string(), copy.to_string()))
            .collect();
        let text = render(&package(
            &["Instagram", "Twitter"],
            preview,
            vec!["2025-11-22T10:00:00+00:00".into()],
        ));

        assert!(text.contains("Voice: Friendly | Audience: —"));
        assert!(text.contains("  - 2025-11-22 10:00 AM"));
        assert!(text.contains("[Instagram Post]\nHello\n"));
        assert!(text.contains("[Twitter Post]\n(no copy generated for this platform)\n"));
        assert!(!text.contains("Mastodon"));
    }

    #[test]
    fn render_flags_empty_schedule_and_platforms() {
        let text = render(&package(&[], PlatformCopyMap::new(), vec![]));

        assert!(text.contains("No schedule generated."));
        assert!(text.contains("No platforms selected."));
    }

    #[test]
    fn render_sections_are_separated_by_blank_lines() {
        let mut preview = PlatformCopyMap::new();
        preview.insert("Twitter".to_string(), "Hi".to_string());
        let text = render(&package(&["Twitter"], preview, vec![]));

        assert!(text.starts_with("Topic: Solar Backpack Launch\nVoice: Friendly | Audience: —\n\n"));
        assert!(text.contains("\n\nImage Prompt:\n  A hiker\n\nRecommended Schedule:\n"));
        assert!(text.ends_with("Platform-specific Preview:\n[Twitter Post]\nHi\n---\n"));
    }
}
