//! Normalization of untrusted orchestrator output.
//!
//! The chain is: raw payload → text ([`extract_text`]) → unfenced text
//! ([`strip_code_fence`]) → JSON object ([`parse_json_object`]) → fragment
//! with defaults ([`normalize_fragment`]).

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::trace;

use crate::domain::PlatformCopyMap;
use crate::domain::content::{image_prompt, schedule};
use crate::ports::RawResponse;

/// Timezone for schedules substituted when the orchestrator omits one.
pub const FALLBACK_SCHEDULE_TIMEZONE: &str = "UTC";

/// Canonical fields recovered from an orchestrator response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFragment {
    pub publisher_preview: PlatformCopyMap,
    pub image_prompt: String,
    pub schedule: Vec<String>,
}

type Extractor = fn(&RawResponse) -> Option<String>;

/// Extraction rules in priority order. The first rule that matches wins.
const EXTRACTORS: &[(&str, Extractor)] = &[
    ("plain_text", plain_text),
    ("outputs[0].text", first_output_text),
    ("outputs[0].output", first_output_output),
    ("outputs[0]", first_output),
    ("text", top_level_text),
    ("result", top_level_result),
];

/// Coerce a raw payload into text, falling back to serializing the whole payload.
pub fn extract_text(raw: &RawResponse) -> String {
    let extracted = EXTRACTORS.iter().find_map(|(rule, extract)| {
        let text = extract(raw)?;
        trace!(rule, "extracted orchestrator output");
        Some(text)
    });

    extracted.unwrap_or_else(|| match raw {
        RawResponse::Json(value) => value.to_string(),
        RawResponse::Text(text) => text.clone(),
    })
}

fn plain_text(raw: &RawResponse) -> Option<String> {
    match raw {
        RawResponse::Text(text) => Some(text.clone()),
        RawResponse::Json(Value::String(text)) => Some(text.clone()),
        RawResponse::Json(_) => None,
    }
}

fn first_output_value(raw: &RawResponse) -> Option<&Value> {
    match raw {
        RawResponse::Json(value) => value.get("outputs")?.as_array()?.first(),
        RawResponse::Text(_) => None,
    }
}

fn first_output_field(raw: &RawResponse, field: &str) -> Option<String> {
    non_empty_str(first_output_value(raw)?.get(field)?)
}

fn first_output_text(raw: &RawResponse) -> Option<String> {
    first_output_field(raw, "text")
}

fn first_output_output(raw: &RawResponse) -> Option<String> {
    first_output_field(raw, "output")
}

fn first_output(raw: &RawResponse) -> Option<String> {
    first_output_value(raw).map(stringify)
}

fn top_level_text(raw: &RawResponse) -> Option<String> {
    match raw {
        RawResponse::Json(value) => non_empty_str(value.get("text")?),
        RawResponse::Text(_) => None,
    }
}

fn top_level_result(raw: &RawResponse) -> Option<String> {
    match raw {
        RawResponse::Json(value) => {
            value.get("result").filter(|result| !is_falsy(result)).map(stringify)
        }
        RawResponse::Text(_) => None,
    }
}

/// Null, `false`, zero and empty strings or collections carry no payload.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value.as_str().filter(|text| !text.is_empty()).map(ToOwned::to_owned)
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Strip a surrounding Markdown code fence (```` ``` ```` or ```` ```json ````).
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop a language tag on the opening fence line.
    let body = match rest.split_once('\n') {
        Some((tag, remainder)) if tag.trim().chars().all(|ch| ch.is_ascii_alphanumeric()) => {
            remainder
        }
        _ => rest,
    };

    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

fn first_object_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("object pattern must compile"))
}

/// Parse `text` as a JSON object, or the outermost `{...}` span embedded in it.
///
/// Returns `None` for non-object JSON and for empty objects.
pub fn parse_json_object(text: &str) -> Option<Map<String, Value>> {
    let parsed = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(_) => {
            let span = first_object_pattern().find(text)?;
            serde_json::from_str::<Value>(span.as_str()).ok()?
        }
    };

    match parsed {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

/// Pull the canonical fields out of a parsed object, substituting local defaults.
pub fn normalize_fragment(object: &Map<String, Value>, topic: &str) -> RemoteFragment {
    let publisher_preview: PlatformCopyMap = object
        .get("publisher_preview")
        .and_then(Value::as_object)
        .map(|preview| {
            preview
                .iter()
                .filter(|(_, copy)| !copy.is_null())
                .map(|(platform, copy)| (platform.clone(), stringify(copy)))
                .collect()
        })
        .unwrap_or_default();

    let prompt = object
        .get("image_prompt")
        .and_then(Value::as_str)
        .filter(|prompt| !prompt.trim().is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| image_prompt(topic));

    let slots = object
        .get("schedule")
        .and_then(Value::as_array)
        .map(|slots| {
            slots.iter().filter_map(Value::as_str).map(ToOwned::to_owned).collect::<Vec<_>>()
        })
        .filter(|slots| !slots.is_empty())
        .unwrap_or_else(|| schedule(FALLBACK_SCHEDULE_TIMEZONE));

    RemoteFragment { publisher_preview, image_prompt: prompt, schedule: slots }
}

/// Run the full chain. `None` means the payload held no usable JSON object.
pub fn normalize_response(raw: &RawResponse, topic: &str) -> Option<RemoteFragment> {
    let text = extract_text(raw);
    let object = parse_json_object(strip_code_fence(&text))?;
    Some(normalize_fragment(&object, topic))
}
