//! Credential port
//!
//! The API key is process-wide configuration: adapters decide where it comes
//! from, the fetch use case only asks whether one is available.

/// Secret token authorizing calls to the completion API
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, returning None if it is blank
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Source of the completion API key
pub trait CredentialSource: Send + Sync {
    /// Current key, or None when not configured
    fn api_key(&self) -> Option<ApiKey>;

    /// Name of the environment variable users should set
    fn env_var(&self) -> &str;
}
