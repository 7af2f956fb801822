mod aggregate;
mod loader;

pub use aggregate::aggregate;
pub use loader::{filter_records, load_records, load_records_async, normalize, RawRow};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the commit-log snapshot.
///
/// Any of these fails the whole load; there is no partial ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record source: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: field `{field}` is not a non-negative integer (got {value:?})")]
    BadCount {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("row {row}: cannot resolve timestamp from {value:?}")]
    BadTimestamp { row: usize, value: String },
    #[error("background load task failed: {0}")]
    TaskJoin(String),
}
