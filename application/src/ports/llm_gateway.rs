//! LLM Gateway port
//!
//! Defines the interface for sending a prompt to a completion provider.

use super::credentials::ApiKey;
use async_trait::async_trait;
use qa_domain::Model;
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A single "generate text from a prompt" request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: Model,
    pub prompt: String,
    pub api_key: ApiKey,
}

/// Gateway for completion calls
///
/// This port defines how the application layer talks to the hosted model.
/// Implementations (adapters) live in the infrastructure layer. One call to
/// [`generate`](LlmGateway::generate) is one outbound request; adapters do not
/// retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the prompt and return the completion text
    async fn generate(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
