//! Answer value objects

use super::normalize::ProcessedQuestion;
use super::question::Question;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why no answer text could be produced
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerFailure {
    /// The API key was not available; no request was sent.
    #[error("ERROR: LLM API Key is not configured. Please set {env_var} environment variable.")]
    MissingCredential { env_var: String },

    /// The request to the completion API failed in any way.
    #[error("An error occurred during API call: {reason}")]
    ExternalCallFailure { reason: String },
}

impl AnswerFailure {
    pub fn missing_credential(env_var: impl Into<String>) -> Self {
        Self::MissingCredential {
            env_var: env_var.into(),
        }
    }

    pub fn external(reason: impl Into<String>) -> Self {
        Self::ExternalCallFailure {
            reason: reason.into(),
        }
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential { .. })
    }
}

/// Result of asking the model (Value Object)
///
/// `Display` renders the text shown to the user: the completion verbatim,
/// or the failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Text(String),
    Failed(AnswerFailure),
}

impl Answer {
    pub fn is_success(&self) -> bool {
        matches!(self, Answer::Text(_))
    }

    /// Completion text, if the call succeeded
    pub fn text(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            Answer::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&AnswerFailure> {
        match self {
            Answer::Text(_) => None,
            Answer::Failed(failure) => Some(failure),
        }
    }
}

impl From<AnswerFailure> for Answer {
    fn from(failure: AnswerFailure) -> Self {
        Answer::Failed(failure)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Text(text) => write!(f, "{}", text),
            Answer::Failed(failure) => write!(f, "{}", failure),
        }
    }
}

/// One complete question/answer exchange, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResult {
    pub question: Question,
    pub processed: ProcessedQuestion,
    pub answer: Answer,
}
