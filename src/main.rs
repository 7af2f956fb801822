//! Commit-Log Visualization Tool
//!
//! Loads a per-line commit log, aggregates it into commits and either prints
//! the summary statistics or renders the commit scatter chart.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use locviz::ingest::{aggregate, filter_records, load_records_async};
use locviz::plotting::{render_scatter, ChartLayout, ChartTheme};
use locviz::view::ViewState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the commit log CSV (one row per changed line)
    #[arg(short, long)]
    input: PathBuf,

    /// Base URL commit ids are appended to when building commit links
    #[arg(long, default_value = "https://example.com/commit/")]
    commit_url_base: String,

    /// Free-text filter applied to the raw records (file, author, language)
    /// before aggregation
    #[arg(short, long)]
    query: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print summary statistics and the language breakdown
    Summary {
        /// Emit JSON instead of the text panel
        #[arg(long)]
        json: bool,
    },
    /// Render the commit scatter chart to a PNG and list the changed files
    Chart {
        /// Output image path
        #[arg(short, long, default_value = "commits.png")]
        output: PathBuf,

        #[arg(long, default_value_t = 1000)]
        width: u32,

        #[arg(long, default_value_t = 600)]
        height: u32,

        /// Only reveal commits up to this instant (RFC 3339), like the
        /// scroll narration does
        #[arg(long)]
        cutoff: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rt = Runtime::new().context("failed to start runtime")?;
    let records = rt
        .block_on(load_records_async(cli.input.clone()))
        .with_context(|| format!("loading {:?}", cli.input))?;

    let records = match cli.query.as_deref() {
        Some(query) => filter_records(records, query),
        None => records,
    };

    let commits = aggregate(records, &cli.commit_url_base);
    let mut state = ViewState::new(commits);

    match cli.command {
        Command::Summary { json } => print_summary(&state, json),
        Command::Chart {
            output,
            width,
            height,
            cutoff,
        } => {
            let layout = ChartLayout {
                width,
                height,
                ..ChartLayout::default()
            };

            if let Some(cutoff) = cutoff {
                let instant = cutoff
                    .parse()
                    .with_context(|| format!("invalid cutoff {cutoff:?}"))?;
                // The scales are refit right after, so the interim fit from
                // the full universe is fine here
                let scales = locviz::plotting::fit_chart_scales(&state, &layout);
                state.set_scrub_cutoff(instant, &scales);
            }

            let theme = ChartTheme::default();
            render_scatter(&state, &output, &layout, &theme)
                .map_err(|e| anyhow::anyhow!("failed to render chart: {e}"))?;
            println!("wrote {}", output.display());

            print_file_groups(&state);
            Ok(())
        }
    }
}

fn print_summary(state: &ViewState, json: bool) -> Result<()> {
    if json {
        let report = serde_json::json!({
            "stats": state.stats(),
            "languages": state.selection().breakdown,
            "commits": state.active_summaries(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let stats = state.stats();
    println!("Commits      {}", stats.total_commits);
    println!("Files        {}", stats.distinct_files);
    println!("Total LOC    {}", stats.total_lines);
    print_max("Max Depth", stats.max_depth);
    print_max("Longest Line", stats.max_line_length);
    print_max("Max Lines", stats.max_lines_per_commit);

    let breakdown = &state.selection().breakdown;
    if !breakdown.entries.is_empty() {
        println!();
        for entry in &breakdown.entries {
            println!(
                "{:<12} {} ({:.1}%)",
                entry.display_name(),
                entry.lines,
                entry.proportion * 100.0
            );
        }
    }
    Ok(())
}

fn print_max<T: std::fmt::Display>(label: &str, value: Option<T>) {
    match value {
        Some(v) => println!("{label:<12} {v}"),
        None => println!("{label:<12} -"),
    }
}

fn print_file_groups(state: &ViewState) {
    let groups = state.file_groups();
    if groups.is_empty() {
        println!("No files changed");
        return;
    }
    println!();
    for group in groups {
        println!("{:<40} {} lines", group.file, group.lines.len());
    }
}
