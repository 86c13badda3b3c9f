//! HTTP client construction for gateway implementations.

use std::time::Duration;

use reqwest::Client;

use crate::github::error::ResolveError;

const DEFAULT_API_URI: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubSettings {
    /// Base API URI, optionally with a path prefix (e.g. `/api/v3`).
    pub api_uri: String,
    /// Access token; blank sends an empty `Authorization` header.
    pub access_key: String,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_uri: DEFAULT_API_URI.to_owned(),
            access_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GitHubSettings {
    /// Constructs settings for an API base and token.
    #[must_use]
    pub fn new(api_uri: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            api_uri: api_uri.into(),
            access_key: access_key.into(),
            ..Self::default()
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Builds a `reqwest` client honouring the configured timeout.
///
/// # Errors
///
/// Returns `ResolveError::Configuration` when the client cannot be built.
pub(super) fn build_http_client(settings: &GitHubSettings) -> Result<Client, ResolveError> {
    Client::builder()
        .timeout(settings.timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|error| ResolveError::Configuration {
            message: format!("failed to configure GitHub HTTP client: {error}"),
        })
}
