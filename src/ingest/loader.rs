use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::task::spawn_blocking;

use super::IngestError;
use crate::types::LineRecord;

/// One row of the commit log as it appears on disk, before coercion.
///
/// Every field is kept as a string here; [`normalize`] does the numeric and
/// timestamp coercion so a bad cell is reported with its row number instead
/// of failing somewhere inside the CSV reader.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    pub commit: String,
    pub file: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub author: String,
    pub date: String,
    pub time: String,
    pub timezone: String,
    pub datetime: String,
    pub line: String,
    pub depth: String,
    pub length: String,
}

fn parse_count(value: &str, field: &'static str, row: usize) -> Result<u32, IngestError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| IngestError::BadCount {
            row,
            field,
            value: value.to_string(),
        })
}

/// Parse an instant with offset, accepting both RFC 3339 offsets ("-08:00")
/// and the compact form some log generators emit ("-0800").
fn parse_instant(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .or_else(|| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z").ok())
}

/// Coerce a raw row into a typed [`LineRecord`].
///
/// Pure; never fails on a well-formed row. Fails when `line`, `depth` or
/// `length` do not parse as non-negative integers, or when the `datetime`
/// column, or the composition of `date` and `timezone` at midnight, does not
/// resolve to a valid instant.
pub fn normalize(row: &RawRow, row_number: usize) -> Result<LineRecord, IngestError> {
    let line = parse_count(&row.line, "line", row_number)?;
    let depth = parse_count(&row.depth, "depth", row_number)?;
    let length = parse_count(&row.length, "length", row_number)?;

    let datetime = parse_instant(&row.datetime).ok_or_else(|| IngestError::BadTimestamp {
        row: row_number,
        value: row.datetime.clone(),
    })?;

    // The date column must compose with the timezone into a valid midnight
    // instant, the same construction the log's consumers use for day bucketing.
    let midnight = format!("{}T00:00:00{}", row.date, row.timezone);
    let date = parse_instant(&midnight)
        .ok_or_else(|| IngestError::BadTimestamp {
            row: row_number,
            value: midnight,
        })?
        .date_naive();

    Ok(LineRecord {
        commit: row.commit.clone(),
        file: row.file.clone(),
        kind: row.kind.clone(),
        author: row.author.clone(),
        date,
        time: row.time.clone(),
        timezone: row.timezone.clone(),
        datetime,
        line,
        depth,
        length,
    })
}

/// Load and normalize the whole commit log from a CSV file.
///
/// A single malformed row fails the load; callers never see a partial
/// snapshot.
pub fn load_records(path: &Path) -> Result<Vec<LineRecord>, IngestError> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        // Row numbers are 1-based and skip the header line.
        let row = row?;
        records.push(normalize(&row, idx + 1)?);
    }
    Ok(records)
}

/// Load the commit log off the async runtime's blocking pool.
///
/// Ingestion is the only latent step in the pipeline; everything downstream
/// of it is synchronous and must not start before this completes.
pub async fn load_records_async(path: PathBuf) -> Result<Vec<LineRecord>, IngestError> {
    spawn_blocking(move || load_records(&path))
        .await
        .map_err(|e| IngestError::TaskJoin(e.to_string()))?
}

/// Upstream free-text filter over the raw record sequence.
///
/// Case-insensitive substring match on file path, author and language tag.
/// An empty query keeps everything. Applied before aggregation, so the
/// commit universe itself narrows.
pub fn filter_records(records: Vec<LineRecord>, query: &str) -> Vec<LineRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| {
            r.file.to_lowercase().contains(&needle)
                || r.author.to_lowercase().contains(&needle)
                || r.kind.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw_row() -> RawRow {
        RawRow {
            commit: "a1b2c3".to_string(),
            file: "src/main.rs".to_string(),
            kind: "rs".to_string(),
            author: "Test User".to_string(),
            date: "2024-03-05".to_string(),
            time: "14:31:02".to_string(),
            timezone: "-08:00".to_string(),
            datetime: "2024-03-05T14:31:02-08:00".to_string(),
            line: "12".to_string(),
            depth: "2".to_string(),
            length: "48".to_string(),
        }
    }

    #[test]
    fn normalize_well_formed_row() {
        let record = normalize(&raw_row(), 1).unwrap();
        assert_eq!(record.line, 12);
        assert_eq!(record.depth, 2);
        assert_eq!(record.length, 48);
        assert_eq!(record.date.to_string(), "2024-03-05");
        assert_eq!(record.datetime.to_rfc3339(), "2024-03-05T14:31:02-08:00");
    }

    #[test]
    fn normalize_accepts_compact_offset() {
        let mut row = raw_row();
        row.timezone = "-0800".to_string();
        row.datetime = "2024-03-05T14:31:02-0800".to_string();
        let record = normalize(&row, 1).unwrap();
        assert_eq!(record.datetime.to_rfc3339(), "2024-03-05T14:31:02-08:00");
    }

    #[test]
    fn normalize_rejects_negative_depth() {
        let mut row = raw_row();
        row.depth = "-1".to_string();
        let err = normalize(&row, 7).unwrap_err();
        match err {
            IngestError::BadCount { row, field, .. } => {
                assert_eq!(row, 7);
                assert_eq!(field, "depth");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn normalize_rejects_unparseable_line() {
        let mut row = raw_row();
        row.line = "twelve".to_string();
        assert!(matches!(
            normalize(&row, 1),
            Err(IngestError::BadCount { field: "line", .. })
        ));
    }

    #[test]
    fn normalize_rejects_bad_timezone_composition() {
        let mut row = raw_row();
        row.timezone = "pacific".to_string();
        assert!(matches!(
            normalize(&row, 1),
            Err(IngestError::BadTimestamp { .. })
        ));
    }

    #[test]
    fn filter_matches_file_author_and_language() {
        let record = normalize(&raw_row(), 1).unwrap();
        let records = vec![record];

        assert_eq!(filter_records(records.clone(), "MAIN").len(), 1);
        assert_eq!(filter_records(records.clone(), "test user").len(), 1);
        assert_eq!(filter_records(records.clone(), "rs").len(), 1);
        assert_eq!(filter_records(records.clone(), "css").len(), 0);
        assert_eq!(filter_records(records, "").len(), 1);
    }
}
