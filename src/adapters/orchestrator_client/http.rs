//! Orchestrator client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::domain::{AppError, RemoteConfig};
use crate::ports::{OrchestratorClient, OrchestratorRequest, RawResponse};

const DEFAULT_STATUS_MESSAGE: &str = "Orchestrator request failed";
const TASK_NAME: &str = "generate_social_media";

/// HTTP transport for the remote orchestrator.
///
/// One request per call, bounded by the configured timeout. The API key is
/// looked up in the environment on every call and omitted when unset.
#[derive(Clone)]
pub struct HttpOrchestratorClient {
    api_url: Url,
    api_key_env: String,
    timeout_secs: u64,
    client: Client,
}

impl std::fmt::Debug for HttpOrchestratorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOrchestratorClient")
            .field("api_url", &self.api_url)
            .field("api_key_env", &self.api_key_env)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl HttpOrchestratorClient {
    /// Create a client for `api_url` using the remaining remote settings.
    pub fn new(api_url: Url, config: &RemoteConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::OrchestratorError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_url,
            api_key_env: config.api_key_env.clone(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    /// Create from configuration, returning `None` when no endpoint is configured.
    pub fn from_config(config: &RemoteConfig) -> Result<Option<Self>, AppError> {
        match &config.api_url {
            Some(url) => Self::new(url.clone(), config).map(Some),
            None => Ok(None),
        }
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<RawResponse, AppError> {
        let mut builder = self
            .client
            .post(self.api_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request);

        if let Some(key) = std::env::var(&self.api_key_env).ok().filter(|key| !key.is_empty()) {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", key));
        }

        let response = builder.send().map_err(|e| AppError::OrchestratorError {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        let body_text = response.text().map_err(|e| AppError::OrchestratorError {
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;

        if status.is_success() {
            return Ok(RawResponse::from_body(body_text));
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::OrchestratorError { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    agent: ApiAgent<'a>,
    task: ApiTask<'a>,
    timeout_secs: u64,
}

#[derive(Debug, Serialize)]
struct ApiAgent<'a> {
    name: &'a str,
    model: &'a str,
}

#[derive(Debug, Serialize)]
struct ApiTask<'a> {
    name: &'a str,
    prompt: String,
    max_tokens: u32,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl OrchestratorClient for HttpOrchestratorClient {
    fn run(&self, request: &OrchestratorRequest) -> Result<RawResponse, AppError> {
        let api_request = ApiRequest {
            agent: ApiAgent { name: &request.agent, model: &request.model },
            task: ApiTask {
                name: TASK_NAME,
                prompt: serde_json::to_string(&request.instruction)?,
                max_tokens: request.max_tokens,
            },
            timeout_secs: self.timeout_secs,
        };

        self.send_request(&api_request)
    }
}
