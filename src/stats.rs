//! Pure statistics reducers over commit and line-record subsets.
//!
//! Every reducer is re-run from scratch on each subset change; nothing here
//! maintains incremental state. At the expected data sizes (thousands of
//! lines, hundreds of commits) full recomputation is cheaper than chasing
//! stale derived state.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::types::{Commit, LineRecord};

/// Headline numbers for a commit subset, the "commit info" panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommitStats {
    pub total_commits: usize,
    /// Raw line-record count. Coincides with the sum of `total_lines` over
    /// the commits, but is counted from the records themselves so the two
    /// can be cross-checked.
    pub total_lines: usize,
    pub distinct_files: usize,
    pub max_depth: Option<u32>,
    pub max_line_length: Option<u32>,
    pub max_lines_per_commit: Option<usize>,
}

/// One language's share of a line subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    /// Grouping key, exactly as it appears in the records. Grouping is
    /// case-sensitive: "JS" and "js" form two shares. Observed behavior of
    /// the source log's consumers, kept as-is.
    pub language: String,
    pub lines: usize,
    /// Share of the subset, in 0..=1
    pub proportion: f64,
}

impl LanguageShare {
    /// Upper-cased label for display. Only the label folds case, never the
    /// grouping key.
    pub fn display_name(&self) -> String {
        self.language.to_uppercase()
    }
}

/// Per-language rollup of a line subset, entries in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageBreakdown {
    pub total_lines: usize,
    pub entries: Vec<LanguageShare>,
}

/// All lines of one file within a subset, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct FileGroup<'a> {
    pub file: &'a str,
    pub lines: Vec<&'a LineRecord>,
}

/// Compute the headline numbers for a commit subset.
///
/// An empty subset reports zero counts and `None` maxima; it is a legitimate
/// state, not an error.
pub fn commit_stats(commits: &[Commit]) -> CommitStats {
    let mut total_lines = 0;
    let mut files: HashSet<&str> = HashSet::new();
    let mut max_depth: Option<u32> = None;
    let mut max_line_length: Option<u32> = None;

    for commit in commits {
        for line in commit.lines() {
            total_lines += 1;
            files.insert(line.file.as_str());
            max_depth = Some(max_depth.map_or(line.depth, |d| d.max(line.depth)));
            max_line_length = Some(max_line_length.map_or(line.length, |l| l.max(line.length)));
        }
    }

    CommitStats {
        total_commits: commits.len(),
        total_lines,
        distinct_files: files.len(),
        max_depth,
        max_line_length,
        max_lines_per_commit: commits.iter().map(|c| c.total_lines).max(),
    }
}

/// Group a line subset by file, largest group first.
///
/// Ties in line count keep first-seen file order; within a group, lines keep
/// the order they were iterated in.
pub fn per_file_grouping<'a, I>(lines: I) -> Vec<FileGroup<'a>>
where
    I: IntoIterator<Item = &'a LineRecord>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&'a LineRecord>> = HashMap::new();

    for line in lines {
        let file = line.file.as_str();
        if !groups.contains_key(file) {
            order.push(file);
        }
        groups.entry(file).or_default().push(line);
    }

    let mut result: Vec<FileGroup<'a>> = order
        .into_iter()
        .filter_map(|file| {
            let lines = groups.remove(file)?;
            Some(FileGroup { file, lines })
        })
        .collect();

    // Stable, so equally sized groups keep first-seen order
    result.sort_by(|a, b| b.lines.len().cmp(&a.lines.len()));
    result
}

/// Roll a line subset up by language, with each count normalized to a
/// proportion of the subset.
pub fn language_breakdown<'a, I>(lines: I) -> LanguageBreakdown
where
    I: IntoIterator<Item = &'a LineRecord>,
{
    let mut entries: Vec<LanguageShare> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total_lines = 0;

    for line in lines {
        total_lines += 1;
        match index.get(&line.kind) {
            Some(&i) => entries[i].lines += 1,
            None => {
                index.insert(line.kind.clone(), entries.len());
                entries.push(LanguageShare {
                    language: line.kind.clone(),
                    lines: 1,
                    proportion: 0.0,
                });
            }
        }
    }

    if total_lines > 0 {
        for entry in &mut entries {
            entry.proportion = entry.lines as f64 / total_lines as f64;
        }
    }

    LanguageBreakdown {
        total_lines,
        entries,
    }
}
