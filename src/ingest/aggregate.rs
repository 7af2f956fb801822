use chrono::Timelike;
use std::collections::HashMap;

use crate::types::{Commit, LineRecord};

/// Group line records by commit id into [`Commit`] aggregates.
///
/// Grouping is stable: groups appear in first-seen order and members keep the
/// order they were emitted in. Attribution (author, date, time, timezone,
/// datetime) is taken from each group's first member; the log is produced one
/// commit at a time, so all lines of a commit share one timestamp. That is a
/// documented precondition of the input, not something this function checks.
///
/// The result is sorted ascending by `datetime`; ties keep group-encounter
/// order. An empty input yields an empty output.
pub fn aggregate(records: Vec<LineRecord>, url_base: &str) -> Vec<Commit> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<LineRecord>> = HashMap::new();

    for record in records {
        if !groups.contains_key(&record.commit) {
            order.push(record.commit.clone());
        }
        groups
            .entry(record.commit.clone())
            .or_default()
            .push(record);
    }

    let mut commits: Vec<Commit> = order
        .into_iter()
        .filter_map(|id| {
            let lines = groups.remove(&id)?;
            Some(build_commit(id, lines, url_base))
        })
        .collect();

    // sort_by is stable, so datetime ties keep encounter order
    commits.sort_by(|a, b| a.datetime.cmp(&b.datetime));
    commits
}

fn build_commit(id: String, lines: Vec<LineRecord>, url_base: &str) -> Commit {
    let first = &lines[0];
    let hour_frac = f64::from(first.datetime.hour()) + f64::from(first.datetime.minute()) / 60.0;

    Commit {
        url: format!("{url_base}{id}"),
        author: first.author.clone(),
        date: first.date,
        time: first.time.clone(),
        timezone: first.timezone.clone(),
        datetime: first.datetime,
        hour_frac,
        total_lines: lines.len(),
        id,
        lines,
    }
}
