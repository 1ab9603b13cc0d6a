//! Gemini LLM Gateway implementation

use super::error::{GeminiError, Result};
use super::protocol::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use qa_application::{CompletionRequest, GatewayError, LlmGateway};
use qa_domain::{Model, preview};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Connection settings for [`GeminiGateway`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API root, e.g. `https://generativelanguage.googleapis.com`
    pub base_url: String,
    /// Whole-request timeout; None keeps the client default
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: None,
        }
    }
}

/// Gateway that calls the Gemini `generateContent` endpoint
///
/// Holds one `reqwest::Client` for the life of the process. If the client
/// could not be built the gateway still exists, and every call reports the
/// initialization failure instead of sending anything.
pub struct GeminiGateway {
    client: std::result::Result<reqwest::Client, String>,
    base_url: String,
}

impl GeminiGateway {
    /// Build the gateway, failing if the HTTP client cannot be created
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Self::build_client(&config)?;
        Ok(Self {
            client: Ok(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the gateway, degrading to an always-failing gateway on error
    pub fn new_or_degraded(config: GeminiConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        match Self::build_client(&config) {
            Ok(client) => {
                info!(base_url = %base_url, "Gemini gateway initialized");
                Self {
                    client: Ok(client),
                    base_url,
                }
            }
            Err(e) => {
                warn!("Gemini client not available, questions will fail: {}", e);
                Self {
                    client: Err(e.to_string()),
                    base_url,
                }
            }
        }
    }

    fn build_client(config: &GeminiConfig) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("llm-qa/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| GeminiError::ClientInit(e.to_string()))
    }

    /// Full URL for a model's generateContent method
    pub fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }

    async fn call(&self, request: &CompletionRequest) -> Result<String> {
        let client = self
            .client
            .as_ref()
            .map_err(|e| GeminiError::ClientInit(e.clone()))?;

        let url = self.endpoint(&request.model);
        debug!(url = %url, "POST generateContent");

        let response = client
            .post(&url)
            .header("x-goog-api-key", request.api_key.expose())
            .json(&GenerateContentRequest::from_prompt(&request.prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => envelope.error.describe(),
                Err(_) => format!(
                    "{} {}",
                    status.canonical_reason().unwrap_or("Unknown"),
                    preview(body.trim(), 200)
                )
                .trim_end()
                .to_string(),
            };
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::ParseError {
                error: e.to_string(),
                raw: preview(&body, 500),
            })?;

        parsed
            .text()
            .ok_or_else(|| GeminiError::EmptyResponse(parsed.empty_reason()))
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(&self, request: &CompletionRequest) -> std::result::Result<String, GatewayError> {
        self.call(request).await.map_err(GatewayError::from)
    }
}
