pub mod fake_orchestrator_client;
pub mod stalled_server;

pub use fake_orchestrator_client::FakeOrchestratorClient;
pub use stalled_server::StalledServer;
