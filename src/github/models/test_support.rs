//! Test helpers for constructing `CommitRecord` fixtures.
//!
//! # Examples
//!
//! ```
//! use assignment_archive::github::models::test_support::commit_at;
//!
//! let commit = commit_at("a1", "2024-01-09T10:00:00+09:00");
//! assert_eq!(commit.hash.as_str(), "a1");
//! ```

use chrono::DateTime;

use super::{CommitHash, CommitRecord};

/// Constructs a `CommitRecord` from a hash and an RFC 3339 timestamp.
///
/// # Panics
///
/// Panics when the hash is blank or the timestamp is not valid RFC 3339;
/// fixtures are expected to be well formed.
#[must_use]
pub fn commit_at(hash: &str, timestamp: &str) -> CommitRecord {
    let Some(commit_hash) = CommitHash::new(hash) else {
        panic!("fixture hash must not be blank");
    };
    let parsed = DateTime::parse_from_rfc3339(timestamp)
        .unwrap_or_else(|error| panic!("fixture timestamp {timestamp} is invalid: {error}"));

    CommitRecord {
        hash: commit_hash,
        timestamp: parsed,
    }
}

/// Builds the JSON body GitHub returns for a single commit entry.
#[must_use]
pub fn api_commit_json(hash: &str, timestamp: &str) -> serde_json::Value {
    serde_json::json!({
        "sha": hash,
        "commit": {
            "author": { "name": "candidate", "date": timestamp },
            "committer": { "name": "candidate", "date": timestamp },
            "message": format!("commit {hash}")
        }
    })
}
