//! Data models representing pull request commits.
//!
//! Types prefixed with `Api` are internal deserialisation targets for the
//! GitHub "list commits on a pull request" endpoint. They convert into the
//! public domain types, dropping entries that cannot satisfy the domain
//! invariants.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Non-empty commit identifier (the Git SHA).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitHash(String);

impl CommitHash {
    /// Wraps a commit hash, rejecting blank values.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the hash value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A commit listed on a pull request with its timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Commit identifier.
    pub hash: CommitHash,
    /// When the commit was made, with the offset GitHub reported.
    pub timestamp: DateTime<FixedOffset>,
}

/// The commit chosen as the submission for a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommit {
    /// Commit identifier.
    pub hash: CommitHash,
}

impl From<CommitRecord> for ResolvedCommit {
    fn from(value: CommitRecord) -> Self {
        Self { hash: value.hash }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCommit {
    pub(crate) sha: String,
    pub(crate) commit: ApiCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCommitDetail {
    pub(crate) author: Option<ApiSignature>,
    pub(crate) committer: Option<ApiSignature>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiSignature {
    pub(crate) date: Option<DateTime<FixedOffset>>,
}

impl ApiCommit {
    /// Converts the API payload into a domain record.
    ///
    /// Uses the committer date, falling back to the author date. Returns
    /// `None` when neither is present or the sha is blank.
    pub(crate) fn into_record(self) -> Option<CommitRecord> {
        let committed = self.commit.committer.and_then(|signature| signature.date);
        let authored = self.commit.author.and_then(|signature| signature.date);

        let Some(timestamp) = committed.or(authored) else {
            tracing::warn!("skipping commit {} without a timestamp", self.sha);
            return None;
        };

        let Some(hash) = CommitHash::new(&self.sha) else {
            tracing::warn!("skipping commit dated {timestamp} with an empty sha");
            return None;
        };

        Some(CommitRecord { hash, timestamp })
    }
}
