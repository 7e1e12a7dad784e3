//! Remote orchestrator client port definition.

use serde::Serialize;
use serde_json::Value;

use crate::domain::AppError;

/// Structured instruction sent to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteInstruction {
    /// Task identifier understood by the orchestrator.
    pub task: String,
    /// Natural-language description of the expected JSON contract.
    pub instructions: String,
    /// Generation inputs.
    pub inputs: InstructionInputs,
    /// Requested output format.
    pub format: String,
}

/// User inputs forwarded with the instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructionInputs {
    pub topic: String,
    pub voice: String,
    pub audience: Option<String>,
    pub platforms: Vec<String>,
    pub timezone: String,
}

/// One orchestrator run: which agent and model should execute the instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorRequest {
    pub agent: String,
    pub model: String,
    pub max_tokens: u32,
    pub instruction: RemoteInstruction,
}

/// Untrusted orchestrator payload.
///
/// The body is kept as JSON when it parses as JSON, otherwise as raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    Json(Value),
    Text(String),
}

impl RawResponse {
    /// Classify a response body.
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => RawResponse::Json(value),
            Err(_) => RawResponse::Text(body),
        }
    }
}

/// Port for remote orchestrator operations.
pub trait OrchestratorClient {
    /// Execute one generation run and return its raw output.
    fn run(&self, request: &OrchestratorRequest) -> Result<RawResponse, AppError>;
}
