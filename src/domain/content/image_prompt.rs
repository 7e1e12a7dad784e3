//! Image prompt construction for a topic.

const MAX_TOPIC_CHARS: usize = 30;

/// Build an image-generation prompt for `topic`, truncating long topics.
pub fn image_prompt(topic: &str) -> String {
    let short = if topic.chars().count() <= MAX_TOPIC_CHARS {
        topic.to_string()
    } else {
        let mut truncated: String = topic.chars().take(MAX_TOPIC_CHARS).collect();
        truncated.push_str("...");
        truncated
    };
    format!("High quality photo of '{short}', bright lighting, social-media friendly")
}
