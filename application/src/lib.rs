//! Application layer for llm-qa
//!
//! This crate contains the use cases and the port definitions that
//! infrastructure adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    credentials::{ApiKey, CredentialSource},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{AskProgressNotifier, NoProgress},
};
pub use use_cases::ask_question::AskQuestionUseCase;
pub use use_cases::fetch_answer::FetchAnswerUseCase;
