use crate::domain::AppError;
use crate::ports::{OrchestratorClient, OrchestratorRequest, RawResponse};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct FakeOrchestratorClient {
    pub received: Arc<Mutex<Vec<OrchestratorRequest>>>,
    pub outcome: Result<RawResponse, String>,
}

impl FakeOrchestratorClient {
    pub fn responding(response: RawResponse) -> Self {
        Self { received: Arc::new(Mutex::new(vec![])), outcome: Ok(response) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { received: Arc::new(Mutex::new(vec![])), outcome: Err(message.into()) }
    }

    pub fn received_requests(&self) -> Vec<OrchestratorRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl OrchestratorClient for FakeOrchestratorClient {
    fn run(&self, request: &OrchestratorRequest) -> Result<RawResponse, AppError> {
        self.received.lock().unwrap().push(request.clone());
        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err(message) => {
                Err(AppError::OrchestratorError { message: message.clone(), status: None })
            }
        }
    }
}
