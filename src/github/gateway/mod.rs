//! Gateways for loading pull request commits from GitHub.
//!
//! The trait-based design enables mocking in tests while the HTTP
//! implementation handles real requests.

mod client;
mod commits;
mod error_mapping;
mod http_utils;

pub use client::GitHubSettings;
pub use commits::{COMMIT_PAGE_SIZE, HttpCommitGateway};

use async_trait::async_trait;

use crate::github::error::ResolveError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::CommitRecord;

/// Gateway that can list the commits of a pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitGateway: Send + Sync {
    /// Fetch the first page of commits on the pull request.
    async fn pull_request_commits(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<CommitRecord>, ResolveError>;
}
