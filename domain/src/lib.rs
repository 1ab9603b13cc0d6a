//! Domain layer for llm-qa
//!
//! This crate contains the value objects of a single question/answer
//! exchange and the text normalization applied before a question is sent
//! to the model. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Question**: raw text typed by the user, rejected only when blank
//! - **ProcessedQuestion**: lowercased, punctuation-free, whitespace-collapsed
//!   form of a question (see [`normalize`])
//! - **Answer**: the completion text, or a classified [`AnswerFailure`]

pub mod config;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use self::core::{
    answer::{Answer, AnswerFailure, AskResult},
    error::DomainError,
    model::Model,
    normalize::{ProcessedQuestion, normalize},
    question::Question,
    string::preview,
};
pub use prompt::PromptTemplate;
