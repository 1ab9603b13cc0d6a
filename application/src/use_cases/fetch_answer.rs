//! Fetch Answer use case
//!
//! Sends one processed question to the completion gateway and turns every
//! outcome into an [`Answer`]. Nothing escapes this boundary as an error.

use crate::ports::credentials::CredentialSource;
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use qa_domain::{Answer, AnswerFailure, Model, ProcessedQuestion, PromptTemplate};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for asking the model one question
pub struct FetchAnswerUseCase {
    gateway: Arc<dyn LlmGateway>,
    credentials: Arc<dyn CredentialSource>,
    model: Model,
}

impl Clone for FetchAnswerUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            credentials: self.credentials.clone(),
            model: self.model.clone(),
        }
    }
}

impl FetchAnswerUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            gateway,
            credentials,
            model: Model::default(),
        }
    }

    /// Use a model other than the default
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Ask the model and return its answer or a classified failure
    ///
    /// Without a credential the gateway is never called.
    pub async fn execute(&self, question: &ProcessedQuestion) -> Answer {
        let Some(api_key) = self.credentials.api_key() else {
            warn!(
                env_var = self.credentials.env_var(),
                "API key not configured, skipping request"
            );
            return AnswerFailure::missing_credential(self.credentials.env_var()).into();
        };

        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: PromptTemplate::answer_concisely(question),
            api_key,
        };

        info!(model = %self.model, "Sending question to LLM");

        match self.gateway.generate(&request).await {
            Ok(text) => {
                info!(model = %self.model, chars = text.chars().count(), "Received answer");
                Answer::Text(text)
            }
            Err(e) => {
                warn!(model = %self.model, "Completion call failed: {}", e);
                AnswerFailure::external(e.to_string()).into()
            }
        }
    }
}
