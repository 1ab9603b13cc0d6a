//! Environment-variable credential source

use qa_application::{ApiKey, CredentialSource};
use tracing::debug;

/// Reads the API key from an environment variable
///
/// The variable is read once when the source is created. If it was not set
/// at that point it is looked up again on every call, so a key exported
/// later is still picked up. A key from the config file takes precedence
/// over the environment.
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    env_var: String,
    startup_key: Option<ApiKey>,
}

impl EnvCredentialSource {
    pub fn new(env_var: impl Into<String>) -> Self {
        let env_var = env_var.into();
        let startup_key = Self::read(&env_var);
        debug!(
            env_var = %env_var,
            present = startup_key.is_some(),
            "Read API key from environment"
        );
        Self {
            env_var,
            startup_key,
        }
    }

    /// Prefer a key from configuration, falling back to the environment
    pub fn with_configured_key(env_var: impl Into<String>, configured: Option<&str>) -> Self {
        match configured.and_then(ApiKey::new) {
            Some(key) => Self {
                env_var: env_var.into(),
                startup_key: Some(key),
            },
            None => Self::new(env_var),
        }
    }

    fn read(env_var: &str) -> Option<ApiKey> {
        std::env::var(env_var).ok().and_then(ApiKey::new)
    }
}

impl CredentialSource for EnvCredentialSource {
    fn api_key(&self) -> Option<ApiKey> {
        self.startup_key
            .clone()
            .or_else(|| Self::read(&self.env_var))
    }

    fn env_var(&self) -> &str {
        &self.env_var
    }
}
