//! Cutoff anchoring and deadline-bounded commit selection.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeDelta, TimeZone};

use super::error::ResolveError;
use super::models::CommitRecord;

/// Time zone a zone-less cutoff is interpreted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CutoffZone {
    /// The process's local time zone.
    #[default]
    Local,
    /// A fixed UTC offset, independent of the host configuration.
    Fixed(FixedOffset),
}

impl CutoffZone {
    /// Places a zone-less cutoff on the timeline.
    ///
    /// Ambiguous local times (a DST overlap) take the earlier offset. Local
    /// times skipped by a DST gap move forward by one hour.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidCutoff`] when the cutoff cannot be
    /// mapped to an instant in the zone.
    pub fn anchor(self, cutoff: NaiveDateTime) -> Result<DateTime<FixedOffset>, ResolveError> {
        match self {
            Self::Local => anchor_in(&Local, cutoff),
            Self::Fixed(offset) => anchor_in(&offset, cutoff),
        }
    }
}

fn anchor_in<Tz: TimeZone>(
    zone: &Tz,
    cutoff: NaiveDateTime,
) -> Result<DateTime<FixedOffset>, ResolveError> {
    zone.from_local_datetime(&cutoff)
        .earliest()
        .or_else(|| {
            cutoff
                .checked_add_signed(TimeDelta::hours(1))
                .and_then(|shifted| zone.from_local_datetime(&shifted).earliest())
        })
        .map(|anchored| anchored.fixed_offset())
        .ok_or_else(|| ResolveError::InvalidCutoff {
            value: cutoff.to_string(),
        })
}

/// Returns the latest commit made at or before `cutoff`.
///
/// Timestamps are compared as instants, so commits reported with different
/// offsets are ordered correctly. When several commits share the latest
/// timestamp any one of them may be returned.
#[must_use]
pub fn select_last_commit_before<I>(
    commits: I,
    cutoff: &DateTime<FixedOffset>,
) -> Option<CommitRecord>
where
    I: IntoIterator<Item = CommitRecord>,
{
    commits
        .into_iter()
        .filter(|commit| commit.timestamp <= *cutoff)
        .max_by_key(|commit| commit.timestamp)
}
