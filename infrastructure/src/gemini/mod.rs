//! Google Gemini adapter
//!
//! Implements the [`LlmGateway`](qa_application::LlmGateway) port on top of
//! the Gemini REST `generateContent` endpoint.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::GeminiError;
pub use gateway::{GeminiConfig, GeminiGateway};
