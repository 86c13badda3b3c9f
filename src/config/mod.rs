//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults**: Built-in application defaults
//! 2. **Configuration file**: `.assignment-archive.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables**: `ASSIGNMENT_ARCHIVE_PR_URL`,
//!    `ASSIGNMENT_ARCHIVE_ACCESS_KEY`, or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments**: `--pr-url`/`-u`, `--cutoff`/`-c`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! api_uri = "https://api.github.com"
//! access_key = "ghp_example"
//! cutoff_offset = "+09:00"
//! timeout_seconds = 10
//! ```

use std::env;
use std::time::Duration;

use chrono::{FixedOffset, NaiveDateTime};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ResolveError;
use crate::github::gateway::GitHubSettings;
use crate::github::selection::CutoffZone;

const DEFAULT_API_URI: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Layouts accepted for the zone-less cutoff.
const CUTOFF_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `ASSIGNMENT_ARCHIVE_PR_URL` or `--pr-url`: Pull request URL
/// - `ASSIGNMENT_ARCHIVE_CUTOFF` or `--cutoff`: Submission deadline
/// - `ASSIGNMENT_ARCHIVE_API_URI` or `--api-uri`: GitHub API base URI
/// - `ASSIGNMENT_ARCHIVE_ACCESS_KEY`, `GITHUB_TOKEN`, or `--access-key`:
///   Authentication token
///
/// # Example
///
/// ```no_run
/// use assignment_archive::ArchiveConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ArchiveConfig::load().expect("failed to load configuration");
/// let pr_url = config.require_pr_url().expect("PR URL required");
/// let cutoff = config.require_cutoff().expect("cutoff required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ASSIGNMENT_ARCHIVE",
    discovery(
        dotfile_name = ".assignment-archive.toml",
        config_file_name = "assignment-archive.toml",
        app_name = "assignment-archive"
    )
)]
pub struct ArchiveConfig {
    /// GitHub pull request URL holding the submission.
    ///
    /// Can be provided via:
    /// - CLI: `--pr-url <URL>` or `-u <URL>`
    /// - Environment: `ASSIGNMENT_ARCHIVE_PR_URL`
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Submission deadline without a time zone, e.g. `2024-01-10T12:00:00`.
    ///
    /// Can be provided via:
    /// - CLI: `--cutoff <DATETIME>` or `-c <DATETIME>`
    /// - Environment: `ASSIGNMENT_ARCHIVE_CUTOFF`
    #[ortho_config(cli_short = 'c')]
    pub cutoff: Option<String>,

    /// Base URI of the GitHub REST API.
    ///
    /// Defaults to `https://api.github.com`; GitHub Enterprise installations
    /// use `https://<host>/api/v3`.
    #[ortho_config(cli_short = 'a')]
    pub api_uri: String,

    /// Access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--access-key <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `ASSIGNMENT_ARCHIVE_ACCESS_KEY` or `GITHUB_TOKEN`
    /// - Config file: `access_key = "..."`
    #[ortho_config(cli_short = 't')]
    pub access_key: Option<String>,

    /// Fixed UTC offset for the cutoff, e.g. `+09:00`.
    ///
    /// When unset the cutoff is interpreted in the local time zone.
    #[ortho_config(cli_short = 'z')]
    pub cutoff_offset: Option<String>,

    /// HTTP request timeout in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            pr_url: None,
            cutoff: None,
            api_uri: DEFAULT_API_URI.to_owned(),
            access_key: None,
            cutoff_offset: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ArchiveConfig {
    /// Resolves the access key from configuration or the legacy
    /// `GITHUB_TOKEN` environment variable.
    ///
    /// A blank configured key counts as unset. Returns an empty string when
    /// neither source has a value; requests are then sent with an empty
    /// `Authorization` header.
    #[must_use]
    pub fn resolve_access_key(&self) -> String {
        self.access_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .unwrap_or_default()
    }

    /// Returns the pull request URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingPullRequestUrl`] when no URL is
    /// configured.
    pub fn require_pr_url(&self) -> Result<&str, ResolveError> {
        self.pr_url
            .as_deref()
            .ok_or(ResolveError::MissingPullRequestUrl)
    }

    /// Parses the configured cutoff.
    ///
    /// Accepts `YYYY-MM-DDTHH:MM[:SS]` with either `T` or a space between the
    /// date and the time.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingCutoff`] when no cutoff is configured
    /// and [`ResolveError::InvalidCutoff`] when it matches no accepted layout.
    pub fn require_cutoff(&self) -> Result<NaiveDateTime, ResolveError> {
        let raw = self.cutoff.as_deref().ok_or(ResolveError::MissingCutoff)?;
        parse_cutoff(raw)
    }

    /// Returns the zone cutoffs are interpreted in.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Configuration`] when `cutoff_offset` is not a
    /// valid UTC offset.
    pub fn cutoff_zone(&self) -> Result<CutoffZone, ResolveError> {
        let Some(raw) = self.cutoff_offset.as_deref() else {
            return Ok(CutoffZone::Local);
        };

        raw.trim()
            .parse::<FixedOffset>()
            .map(CutoffZone::Fixed)
            .map_err(|error| ResolveError::Configuration {
                message: format!("cutoff offset `{raw}` is invalid: {error}"),
            })
    }

    /// Collects the settings needed to talk to the GitHub API.
    #[must_use]
    pub fn github_settings(&self) -> GitHubSettings {
        GitHubSettings::new(self.api_uri.as_str(), self.resolve_access_key())
            .with_timeout(Duration::from_secs(self.timeout_seconds))
    }
}

fn parse_cutoff(raw: &str) -> Result<NaiveDateTime, ResolveError> {
    let trimmed = raw.trim();
    CUTOFF_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ResolveError::InvalidCutoff {
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests;
