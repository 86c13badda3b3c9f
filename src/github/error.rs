//! Error types exposed by the commit resolution layer.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors surfaced while parsing input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The CLI did not include a pull request URL.
    #[error("pull request URL is required")]
    MissingPullRequestUrl,

    /// The CLI did not include a cutoff date-time.
    #[error("cutoff date-time is required")]
    MissingCutoff,

    /// The pull request URL does not have the expected shape.
    #[error("pull request URL must look like https://<host>/<owner>/<repo>/pull/<number>: {0}")]
    InvalidUrlFormat(String),

    /// The cutoff could not be parsed or placed in the configured zone.
    #[error("invalid cutoff date-time: {value}")]
    InvalidCutoff {
        /// Raw cutoff value as supplied by the caller.
        value: String,
    },

    /// No commit on the pull request was made at or before the cutoff.
    #[error("no commit exists at or before {cutoff}")]
    NoQualifyingCommit {
        /// Cutoff the commits were compared against.
        cutoff: NaiveDateTime,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ResolveError {
    /// Returns true when the failure came from talking to the provider.
    ///
    /// These errors are propagated unchanged; callers decide whether to retry.
    #[must_use]
    pub const fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::Api { .. } | Self::Network { .. }
        )
    }

    /// Returns true when the failure is attributable to caller input.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingPullRequestUrl
                | Self::MissingCutoff
                | Self::InvalidUrlFormat(_)
                | Self::InvalidCutoff { .. }
                | Self::NoQualifyingCommit { .. }
        )
    }
}
