//! Credential sources for the completion API.

mod env;

pub use env::EnvCredentialSource;
