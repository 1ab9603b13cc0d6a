//! Error types for the Gemini adapter

use qa_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP client could not be initialized: {0}")]
    ClientInit(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("No answer text: {0}")]
    EmptyResponse(String),
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::ClientInit(msg) => GatewayError::Unavailable(msg),
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Http(e) => GatewayError::Other(e.to_string()),
            GeminiError::Api { status, message } if status == 401 || status == 403 => {
                GatewayError::Unauthorized(message)
            }
            GeminiError::Api { status, message } => GatewayError::Status {
                code: status,
                message,
            },
            GeminiError::ParseError { error, .. } => GatewayError::MalformedResponse(error),
            GeminiError::EmptyResponse(reason) => GatewayError::MalformedResponse(reason),
        }
    }
}
