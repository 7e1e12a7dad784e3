pub mod orchestrator_client;

pub use orchestrator_client::HttpOrchestratorClient;
