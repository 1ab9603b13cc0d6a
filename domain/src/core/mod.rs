//! Core domain concepts.
//!
//! - [`question::Question`]: a non-blank question typed by the user
//! - [`normalize::ProcessedQuestion`]: the normalized form sent to the model
//! - [`answer::Answer`]: completion text or a classified failure
//! - [`model::Model`]: the completion model identifier
//! - [`error::DomainError`]: domain-level errors

pub mod answer;
pub mod error;
pub mod model;
pub mod normalize;
pub mod question;
pub mod string;
