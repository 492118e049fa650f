//! Credential management for Address API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Default environment variable holding the API token.
pub const API_TOKEN_VAR: &str = "ADDRESS_API_TOKEN";
/// Default environment variable holding the secret token.
pub const SECRET_TOKEN_VAR: &str = "ADDRESS_SECRET_TOKEN";

/// API credentials: a token sent with every request and an optional secret
/// used locally to sign mutating requests.
#[derive(Clone)]
pub struct Credentials {
    /// The API token, sent in the `X-Api-Token` header
    pub api_token: String,
    /// The secret token, never transmitted
    secret_token: Option<SecretString>,
}

impl Credentials {
    /// Create credentials with both an API token and a secret token.
    pub fn new(api_token: impl Into<String>, secret_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            secret_token: Some(SecretString::from(secret_token.into())),
        }
    }

    /// Create credentials that can only perform unsigned requests.
    pub fn token_only(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            secret_token: None,
        }
    }

    /// Get the secret token for signing, if one was configured.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> Option<&str> {
        self.secret_token
            .as_ref()
            .map(|secret| secret.expose_secret())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secret = self.secret_token.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("Credentials")
            .field("api_token", &"[REDACTED]")
            .field("secret_token", &secret)
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or environment variables.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider with a secret token.
    pub fn new(api_token: impl Into<String>, secret_token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_token, secret_token),
        }
    }

    /// Create a provider without a secret token.
    pub fn token_only(api_token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::token_only(api_token),
        }
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads `ADDRESS_API_TOKEN` (required) and
/// `ADDRESS_SECRET_TOKEN` (optional).
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `ADDRESS_API_TOKEN` is not set.
    pub fn from_env() -> Self {
        Self::from_env_vars(API_TOKEN_VAR, SECRET_TOKEN_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// The secret variable may be unset, in which case only unsigned
    /// operations are available.
    ///
    /// # Panics
    ///
    /// Panics if the token variable is not set.
    pub fn from_env_vars(token_var: &str, secret_var: &str) -> Self {
        Self::try_from_env_vars(token_var, secret_var)
            .unwrap_or_else(|| panic!("Environment variable {token_var} not set"))
    }

    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if the API token variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_TOKEN_VAR, SECRET_TOKEN_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if the API token variable is not set.
    pub fn try_from_env_vars(token_var: &str, secret_var: &str) -> Option<Self> {
        let api_token = std::env::var(token_var).ok()?;
        let credentials = match std::env::var(secret_var) {
            Ok(secret) if !secret.is_empty() => Credentials::new(api_token, secret),
            _ => Credentials::token_only(api_token),
        };

        Some(Self { credentials })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
