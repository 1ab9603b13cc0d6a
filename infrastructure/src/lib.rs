//! Infrastructure layer for llm-qa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod credentials;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileProviderConfig,
    FileServerConfig,
};
pub use credentials::EnvCredentialSource;
pub use gemini::{GeminiConfig, GeminiError, GeminiGateway};
