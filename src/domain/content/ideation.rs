//! Topic ideation: angles, hooks and hashtags derived from a free-text topic.

const MAX_BASE_WORDS: usize = 3;
const FALLBACK_BASE: &str = "Topic";

/// Ideas derived from a topic, consumed by the copywriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeationResult {
    pub angles: Vec<String>,
    pub hooks: Vec<String>,
    pub hashtags: Vec<String>,
}

/// Derive three angles, three hooks and up to three hashtags from `topic`.
///
/// Deterministic and infallible. A blank topic produces placeholder text.
pub fn ideate(topic: &str) -> IdeationResult {
    let words: Vec<String> = topic.split_whitespace().map(capitalize).collect();

    let base = if words.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        words.iter().take(MAX_BASE_WORDS).cloned().collect::<Vec<_>>().join(" ")
    };
    let first = words.first().map(String::as_str);

    let angles = vec![
        format!("Introduction and benefits of {base}"),
        format!("Practical tips for using {base}"),
        format!("A short use-case for {base}"),
    ];
    let hooks = vec![
        format!("You'll love this about {}!", first.unwrap_or("this topic")),
        format!("Have you ever tried {}?", first.unwrap_or("this")),
        format!("Try {} today!", first.unwrap_or("this")),
    ];
    let hashtags = words.iter().take(MAX_BASE_WORDS).map(|word| format!("#{word}")).collect();

    IdeationResult { angles, hooks, hashtags }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
