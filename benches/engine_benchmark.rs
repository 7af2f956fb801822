//! Benchmarks for the aggregation pipeline and the view-state transitions.
//! Transitions recompute their statistics in full, so these track the cost
//! of that recomputation at realistic snapshot sizes.

use chrono::{DateTime, Duration, FixedOffset};
use criterion::{criterion_group, criterion_main, Criterion};
use locviz::ingest::aggregate;
use locviz::plotting::{fit_chart_scales, ChartLayout};
use locviz::stats::{commit_stats, language_breakdown, per_file_grouping};
use locviz::types::LineRecord;
use locviz::view::{BrushRegion, ViewState};

const LANGUAGES: [&str; 4] = ["js", "css", "html", "svelte"];

/// Build a synthetic snapshot: `commits` commits of `lines_per_commit` lines
/// each, spread over consecutive hours.
fn synthetic_records(commits: usize, lines_per_commit: usize) -> Vec<LineRecord> {
    let start: DateTime<FixedOffset> = "2024-01-01T09:00:00-08:00".parse().unwrap();
    let mut records = Vec::with_capacity(commits * lines_per_commit);

    for c in 0..commits {
        let datetime = start + Duration::hours(c as i64);
        for l in 0..lines_per_commit {
            records.push(LineRecord {
                commit: format!("commit{c:04}"),
                file: format!("src/file{:02}.js", l % 20),
                kind: LANGUAGES[l % LANGUAGES.len()].to_string(),
                author: "Bench User".to_string(),
                date: datetime.date_naive(),
                time: datetime.time().to_string(),
                timezone: "-08:00".to_string(),
                datetime,
                line: l as u32 + 1,
                depth: (l % 6) as u32,
                length: (l % 90) as u32,
            });
        }
    }
    records
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    group.bench_function("aggregate_300_commits", |b| {
        let records = synthetic_records(300, 12);
        b.iter(|| aggregate(records.clone(), "https://example.com/commit/"));
    });

    group.bench_function("commit_stats_300_commits", |b| {
        let commits = aggregate(synthetic_records(300, 12), "");
        b.iter(|| commit_stats(&commits));
    });

    group.finish();
}

fn bench_reducers(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducers");
    let records = synthetic_records(300, 12);

    group.bench_function("language_breakdown", |b| {
        b.iter(|| language_breakdown(&records));
    });

    group.bench_function("per_file_grouping", |b| {
        b.iter(|| per_file_grouping(&records));
    });

    group.finish();
}

fn bench_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("transitions");
    let layout = ChartLayout::default();

    group.bench_function("scrub_sweep", |b| {
        let state = ViewState::new(aggregate(synthetic_records(300, 12), ""));
        let cutoffs: Vec<DateTime<FixedOffset>> = state
            .active_commits()
            .iter()
            .map(|c| c.datetime)
            .collect();
        b.iter(|| {
            let mut state = state.clone();
            let scales = fit_chart_scales(&state, &layout);
            for &cutoff in &cutoffs {
                state.set_scrub_cutoff(cutoff, &scales);
            }
            state
        });
    });

    group.bench_function("brush_update", |b| {
        let mut state = ViewState::new(aggregate(synthetic_records(300, 12), ""));
        let scales = fit_chart_scales(&state, &layout);
        let region = BrushRegion::new((100.0, 50.0), (700.0, 500.0));
        b.iter(|| {
            state.set_brush_region(Some(region), &scales);
            state.selection().selected_count
        });
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_aggregation, bench_reducers, bench_transitions
);
criterion_main!(benches);
