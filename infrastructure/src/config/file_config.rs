//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use qa_domain::{Model, OutputFormat};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("server.addr '{0}' is not a valid socket address")]
    InvalidServerAddr(String),
}

/// Completion provider configuration (`[provider]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Model identifier sent to the API
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (prefer the env var)
    pub api_key: Option<String>,
    /// Base URL of the Gemini API
    pub base_url: String,
    /// Request timeout; unset leaves the HTTP client default
    pub timeout_seconds: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileProviderConfig {
    pub fn model(&self) -> Model {
        Model::from(self.model.as_str())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Web form server configuration (`[server]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address
    pub addr: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:5000".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        self.addr
            .parse()
            .map_err(|_| ConfigValidationError::InvalidServerAddr(self.addr.clone()))
    }
}

/// Terminal output configuration (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format for one-shot answers
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Print the processed question before the answer
    pub show_processed: bool,
    /// Show a spinner while waiting for the model
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_processed: true,
            show_progress: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: FileProviderConfig,
    pub server: FileServerConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    ///
    /// `server.addr` is not checked here; it is parsed by
    /// [`FileServerConfig::socket_addr`] only when the web form is served.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.provider.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.provider.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.provider.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyEnv);
        }

        Ok(())
    }
}
