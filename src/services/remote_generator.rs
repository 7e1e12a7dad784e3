//! Delegated generation through the remote orchestrator.

use tracing::{debug, warn};

use crate::domain::{AppError, GenerationRequest, RemoteConfig};
use crate::ports::{OrchestratorClient, OrchestratorRequest};
use crate::services::instruction_prompt::build_instruction;
use crate::services::response_normalizer::{RemoteFragment, normalize_response};

/// Outcome of one remote attempt. Only `Generated` carries content; the other
/// variants signal that generation should fall back to the local pipeline.
#[derive(Debug)]
pub enum RemoteAttempt {
    Generated(RemoteFragment),
    /// The orchestrator answered but no JSON object could be recovered.
    Unusable,
    /// The call or instruction rendering failed.
    Failed(AppError),
}

pub struct RemoteGenerator<'a> {
    client: &'a dyn OrchestratorClient,
    settings: &'a RemoteConfig,
}

impl<'a> RemoteGenerator<'a> {
    pub fn new(client: &'a dyn OrchestratorClient, settings: &'a RemoteConfig) -> Self {
        Self { client, settings }
    }

    /// Make a single attempt. Never returns an error; failures are logged and
    /// reported through [`RemoteAttempt::Failed`].
    pub fn generate(&self, request: &GenerationRequest) -> RemoteAttempt {
        match self.try_generate(request) {
            Ok(Some(fragment)) => RemoteAttempt::Generated(fragment),
            Ok(None) => {
                warn!(topic = %request.topic, "orchestrator returned no usable JSON object");
                RemoteAttempt::Unusable
            }
            Err(err) => {
                warn!(error = %err, "orchestrator generation failed");
                RemoteAttempt::Failed(err)
            }
        }
    }

    fn try_generate(&self, request: &GenerationRequest) -> Result<Option<RemoteFragment>, AppError> {
        let orchestrator_request = OrchestratorRequest {
            agent: self.settings.agent.clone(),
            model: self.settings.model.clone(),
            max_tokens: self.settings.max_tokens,
            instruction: build_instruction(request)?,
        };

        debug!(
            agent = %orchestrator_request.agent,
            model = %orchestrator_request.model,
            "calling orchestrator"
        );
        let raw = self.client.run(&orchestrator_request)?;
        Ok(normalize_response(&raw, &request.topic))
    }
}
