//! Rendering of the natural-language contract sent to the orchestrator.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, GenerationRequest};
use crate::ports::{InstructionInputs, RemoteInstruction};

pub const TASK: &str = "generate_social_media_content";
pub const FORMAT: &str = "json";

const INSTRUCTIONS_TEMPLATE: &str = "\
Return a JSON object (no extra explanation) with keys: publisher_preview, image_prompt, schedule.
publisher_preview should be a mapping of platform names to post copy ({{ platforms }}).
image_prompt should be a short prompt suitable for image generation.
schedule should be an array of 3 ISO8601 datetimes (one per next 3 days) in the {{ timezone }} timezone.
";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Build the structured instruction for `request`.
pub fn build_instruction(request: &GenerationRequest) -> Result<RemoteInstruction, AppError> {
    let platforms = if request.platforms.is_empty() {
        "Instagram, Twitter, LinkedIn".to_string()
    } else {
        request.platforms.join(", ")
    };

    Ok(RemoteInstruction {
        task: TASK.to_string(),
        instructions: render_instructions(&platforms, &request.timezone)?,
        inputs: InstructionInputs {
            topic: request.topic.clone(),
            voice: request.voice.clone(),
            audience: request.audience.clone(),
            platforms: request.platforms.clone(),
            timezone: request.timezone.clone(),
        },
        format: FORMAT.to_string(),
    })
}

/// Render the contract text with strict undefined-variable semantics.
fn render_instructions(platforms: &str, timezone: &str) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(INSTRUCTIONS_TEMPLATE, context! { platforms, timezone })
        .map_err(|err| AppError::TemplateRender(err.to_string()))
}
