//! GitHub pull request commit resolution.
//!
//! This module parses pull request URLs, lists the commits of a pull request
//! over the GitHub REST API, and selects the last commit made before a
//! deadline. Transport and status failures are mapped into [`ResolveError`]
//! variants so that callers can tell input mistakes apart from provider
//! problems.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod resolver;
pub mod selection;

pub use error::ResolveError;
pub use gateway::{COMMIT_PAGE_SIZE, CommitGateway, GitHubSettings, HttpCommitGateway};
pub use locator::{PullRequestLocator, PullRequestNumber, RepositoryName, RepositoryOwner};
pub use models::{CommitHash, CommitRecord, ResolvedCommit};
pub use resolver::{AssignmentArchive, PullRequestCommitResolver};
pub use selection::{CutoffZone, select_last_commit_before};

#[cfg(test)]
pub use gateway::MockCommitGateway;
#[cfg(test)]
pub use resolver::MockAssignmentArchive;
