use tracing::warn;

use crate::adapters::HttpOrchestratorClient;
use crate::app::commands::generate::{self, Generation};
use crate::domain::{AppConfig, AppError, ContentPackage, GenerationRequest};
use crate::ports::OrchestratorClient;
use crate::services::RemoteGenerator;

/// Holds configuration, the optional orchestrator client and the package
/// from the most recent run.
pub struct Session {
    config: AppConfig,
    client: Option<Box<dyn OrchestratorClient>>,
    /// Why a configured endpoint could not be used, if it could not.
    client_error: Option<String>,
    current: Option<ContentPackage>,
}

impl Session {
    /// Build a session from configuration. The HTTP client is created only
    /// when an endpoint is configured.
    pub fn from_config(config: AppConfig) -> Self {
        let client = HttpOrchestratorClient::from_config(&config.remote)
            .map(|client| client.map(|client| Box::new(client) as Box<dyn OrchestratorClient>));
        Self::with_client_outcome(config, client)
    }

    /// Build a session around an explicit client.
    pub fn with_client(config: AppConfig, client: Box<dyn OrchestratorClient>) -> Self {
        Self::with_client_outcome(config, Ok(Some(client)))
    }

    fn with_client_outcome(
        config: AppConfig,
        client: Result<Option<Box<dyn OrchestratorClient>>, AppError>,
    ) -> Self {
        let (client, client_error) = match client {
            Ok(client) => (client, None),
            Err(err) => {
                warn!(error = %err, "remote orchestrator disabled");
                (None, Some(err.to_string()))
            }
        };

        Self { config, client, client_error, current: None }
    }

    /// Whether a remote orchestrator is reachable from this session.
    pub fn remote_available(&self) -> bool {
        self.client.is_some()
    }

    /// Generate a package and make it the current one.
    ///
    /// A failed run leaves the previous package in place.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
        use_remote: bool,
    ) -> Result<Generation, AppError> {
        let generator =
            self.client.as_deref().map(|client| RemoteGenerator::new(client, &self.config.remote));
        let mut generation = generate::execute(request, use_remote, generator.as_ref())?;

        if let Some(reason) = &self.client_error {
            for warning in &mut generation.warnings {
                if warning == generate::REMOTE_UNAVAILABLE_WARNING {
                    *warning =
                        format!("Remote orchestrator disabled: {}; using local generation", reason);
                }
            }
        }

        self.current = Some(generation.package.clone());
        Ok(generation)
    }

    pub fn current(&self) -> Option<&ContentPackage> {
        self.current.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
