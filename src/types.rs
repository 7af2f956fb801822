//! # Common Types
//!
//! This module contains the common types used throughout the crate for
//! representing the ingested commit-log snapshot: per-line change records
//! and the per-commit aggregates derived from them.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

/// One changed line of one file in one commit.
///
/// `(commit, file, line)` jointly identify at most one record. Records are
/// immutable after ingestion and owned by the snapshot that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    /// Commit identifier (full hash)
    pub commit: String,
    /// Path of the file the line belongs to
    pub file: String,
    /// Language tag, free-form (the `type` column of the source log)
    pub kind: String,
    /// Commit author name
    pub author: String,
    /// Calendar date of the commit in its own timezone
    pub date: NaiveDate,
    /// Wall-clock time string as recorded in the log, e.g. "14:31:02"
    pub time: String,
    /// UTC offset string as recorded in the log, e.g. "-08:00"
    pub timezone: String,
    /// Full commit instant
    pub datetime: DateTime<FixedOffset>,
    /// 1-based line position within the file
    pub line: u32,
    /// Nesting depth of the line
    pub depth: u32,
    /// Character count of the line
    pub length: u32,
}

/// Aggregate of all [`LineRecord`]s sharing one commit id.
///
/// Attribution fields (`author`, `date`, `time`, `timezone`, `datetime`) come
/// from the first record seen for the id; the aggregator assumes, without
/// checking, that every line of a commit carries the same timestamp. The
/// backing `lines` collection is bookkeeping for the statistics reducers and
/// is excluded from the serialized form; serialize the [`CommitSummary`]
/// produced by [`Commit::summary`] instead.
#[derive(Debug, Clone)]
pub struct Commit {
    pub id: String,
    /// Browse URL for the commit, built from the configured base and the id
    pub url: String,
    pub author: String,
    pub date: NaiveDate,
    pub time: String,
    pub timezone: String,
    pub datetime: DateTime<FixedOffset>,
    /// Fractional hour of day, `hour + minute / 60`, in the commit's own
    /// timezone; the y-axis value of the scatter plot
    pub hour_frac: f64,
    /// Number of member line records
    pub total_lines: usize,
    pub(crate) lines: Vec<LineRecord>,
}

impl Commit {
    /// The member line records backing this commit.
    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    /// Project the enumerable display fields, leaving the backing line
    /// records out. This is the only serializable view of a commit.
    pub fn summary(&self) -> CommitSummary {
        CommitSummary {
            id: self.id.clone(),
            url: self.url.clone(),
            author: self.author.clone(),
            date: self.date,
            time: self.time.clone(),
            timezone: self.timezone.clone(),
            datetime: self.datetime,
            hour_frac: self.hour_frac,
            total_lines: self.total_lines,
        }
    }
}

/// Serializable projection of a [`Commit`]: derived display fields only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitSummary {
    pub id: String,
    pub url: String,
    pub author: String,
    pub date: NaiveDate,
    pub time: String,
    pub timezone: String,
    pub datetime: DateTime<FixedOffset>,
    pub hour_frac: f64,
    pub total_lines: usize,
}
