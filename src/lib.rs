//! # Commit-Log Visualization Library
//!
//! `locviz` analyzes a per-line commit log (one CSV row per changed line,
//! with author, timestamp, nesting depth, line length and language tag) and
//! drives the view-state engine behind a scroll-synchronized commit scatter
//! plot with brushable selection and live language-breakdown statistics.
//!
//! ## Features
//!
//! - Normalize and load a commit-log CSV snapshot
//! - Aggregate line records into chronologically ordered commits
//! - Scrub (scrollytelling) and brush filtering with full statistics
//!   recomputation on every transition
//! - Pure statistics reducers: totals, maxima, per-file and per-language
//!   rollups
//! - Scatter chart rendering via plotters
//!
//! ## Example
//!
//! ```no_run
//! use locviz::ingest::{aggregate, load_records};
//! use locviz::plotting::{fit_chart_scales, ChartLayout};
//! use locviz::view::ViewState;
//! use std::path::Path;
//!
//! let records = load_records(Path::new("loc.csv")).unwrap();
//! let commits = aggregate(records, "https://example.com/commit/");
//! let state = ViewState::new(commits);
//! let scales = fit_chart_scales(&state, &ChartLayout::default());
//! println!("{} commits, {} lines", state.stats().total_commits, state.stats().total_lines);
//! # let _ = scales;
//! ```

pub mod ingest;
pub mod plotting;
pub mod stats;
pub mod types;
pub mod view;

// Re-export main types for convenience
pub use ingest::{aggregate, load_records_async, IngestError};
pub use types::{Commit, CommitSummary, LineRecord};
pub use view::{BrushRegion, ChartScales, Redraw, ViewState};
