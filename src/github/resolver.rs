//! Resolution of the last commit submitted before a deadline.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::error::ResolveError;
use super::gateway::CommitGateway;
use super::locator::PullRequestLocator;
use super::models::ResolvedCommit;
use super::selection::{CutoffZone, select_last_commit_before};

/// Source of the commit a candidate submitted for an assignment.
///
/// Submission workflows depend on this trait rather than on a concrete
/// resolver so they can be exercised without GitHub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentArchive: Send + Sync {
    /// Returns the last commit on the pull request made at or before
    /// `end_date_time`.
    async fn last_commit(
        &self,
        pull_request_url: &str,
        end_date_time: NaiveDateTime,
    ) -> Result<ResolvedCommit, ResolveError>;
}

/// Finds the deadline-bounded commit of a pull request using a gateway.
pub struct PullRequestCommitResolver<'client, Gateway>
where
    Gateway: CommitGateway,
{
    client: &'client Gateway,
    zone: CutoffZone,
}

impl<'client, Gateway> PullRequestCommitResolver<'client, Gateway>
where
    Gateway: CommitGateway,
{
    /// Create a resolver interpreting cutoffs in the local time zone.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self {
            client,
            zone: CutoffZone::Local,
        }
    }

    /// Interpret cutoffs in `zone` instead of the local time zone.
    #[must_use]
    pub const fn with_zone(mut self, zone: CutoffZone) -> Self {
        self.zone = zone;
        self
    }

    /// Resolve the most recent commit on `pull_request_url` made at or before
    /// `cutoff`.
    ///
    /// Only the first page of up to 100 commits is considered.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidUrlFormat` for a malformed URL,
    /// `ResolveError::InvalidCutoff` when the cutoff does not exist in the
    /// zone, `ResolveError::NoQualifyingCommit` when no commit precedes the
    /// cutoff, and propagates gateway failures unchanged.
    pub async fn resolve_last_commit_before(
        &self,
        pull_request_url: &str,
        cutoff: NaiveDateTime,
    ) -> Result<ResolvedCommit, ResolveError> {
        let locator = PullRequestLocator::parse(pull_request_url)?;
        let anchored = self.zone.anchor(cutoff)?;

        let commits = self.client.pull_request_commits(&locator).await?;
        let candidates = commits.len();

        let selected = select_last_commit_before(commits, &anchored)
            .ok_or(ResolveError::NoQualifyingCommit { cutoff })?;

        tracing::debug!(
            "selected commit {} of {candidates} on {}/{}#{} for cutoff {anchored}",
            selected.hash,
            locator.owner().as_str(),
            locator.repository().as_str(),
            locator.number().get()
        );
        Ok(selected.into())
    }
}

#[async_trait]
impl<Gateway> AssignmentArchive for PullRequestCommitResolver<'_, Gateway>
where
    Gateway: CommitGateway,
{
    async fn last_commit(
        &self,
        pull_request_url: &str,
        end_date_time: NaiveDateTime,
    ) -> Result<ResolvedCommit, ResolveError> {
        self.resolve_last_commit_before(pull_request_url, end_date_time)
            .await
    }
}
