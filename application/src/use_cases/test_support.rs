//! Hand-written test doubles for the ports.

use crate::ports::credentials::{ApiKey, CredentialSource};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::AskProgressNotifier;
use async_trait::async_trait;
use qa_domain::{Model, ProcessedQuestion};
use std::sync::Mutex;

/// Gateway that records every request and replays a fixed outcome
pub struct MockGateway {
    outcome: Result<String, GatewayError>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl MockGateway {
    pub fn answering(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: GatewayError) -> Self {
        Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

pub struct MockCredentials(pub Option<&'static str>);

impl CredentialSource for MockCredentials {
    fn api_key(&self) -> Option<ApiKey> {
        self.0.and_then(ApiKey::new)
    }

    fn env_var(&self) -> &str {
        "TEST_API_KEY"
    }
}

/// Records progress callbacks as strings
#[derive(Default)]
pub struct RecordingProgress {
    pub events: Mutex<Vec<String>>,
}

impl AskProgressNotifier for RecordingProgress {
    fn on_question_processed(&self, processed: &ProcessedQuestion) {
        self.events
            .lock()
            .unwrap()
            .push(format!("processed:{}", processed));
    }

    fn on_request_start(&self, model: &Model) {
        self.events.lock().unwrap().push(format!("start:{}", model));
    }

    fn on_request_complete(&self, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("complete:{}", success));
    }
}
