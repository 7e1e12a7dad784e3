mod orchestrator_client;

pub use orchestrator_client::{
    InstructionInputs, OrchestratorClient, OrchestratorRequest, RawResponse, RemoteInstruction,
};
