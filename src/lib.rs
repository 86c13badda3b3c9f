//! Assignment archive library resolving submitted commits on GitHub.
//!
//! The library parses pull request URLs, lists pull request commits through
//! the GitHub REST API, and picks the last commit made before a submission
//! deadline. Failures are surfaced as [`ResolveError`] variants that separate
//! caller mistakes from provider problems.

pub mod config;
pub mod github;

pub use config::ArchiveConfig;
pub use github::{
    AssignmentArchive, CutoffZone, GitHubSettings, HttpCommitGateway, PullRequestCommitResolver,
    PullRequestLocator, ResolveError, ResolvedCommit,
};
