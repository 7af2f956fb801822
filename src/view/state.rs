//! The interactive view-state engine.
//!
//! Two independent filters compose by intersection: the scrub cutoff narrows
//! the commit *universe* (scrollytelling reveals commits up to an instant),
//! and the brush narrows a *view* of that universe (a rectangle in chart
//! space). Every transition recomputes the derived statistics in full;
//! nothing is maintained incrementally.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::scales::ChartScales;
use super::select::{is_selected, BrushRegion};
use crate::stats::{self, CommitStats, FileGroup, LanguageBreakdown};
use crate::types::{Commit, CommitSummary, LineRecord};

/// What a transition invalidated. Scrubbing moves the x domain and the whole
/// active subset, so everything redraws; brushing only changes which commits
/// are selected, so only the selection readouts redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Full,
    Selection,
}

/// Statistics over the selected subset, recomputed on every brush change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionStats {
    pub selected_count: usize,
    /// Language rollup of the selection; falls back to the whole active set
    /// when nothing is selected (see [`ViewState::set_brush_region`]).
    pub breakdown: LanguageBreakdown,
}

/// Read-only snapshot handed to the rendering layer after a transition.
#[derive(Debug)]
pub struct ViewModel<'a> {
    pub active_commits: &'a [Commit],
    pub selected_commits: Vec<&'a Commit>,
    pub stats: &'a CommitStats,
    pub selection: &'a SelectionStats,
}

/// Owns the filtered-commit state and its derived aggregates.
///
/// Constructed from a completed load; there is no valid controller state
/// before the snapshot exists. All transitions run synchronously on the
/// caller's thread: a superseded transition is simply overwritten by the
/// next one.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// The full universe, sorted ascending by datetime (aggregator invariant),
    /// so the active subset is always a prefix.
    commits: Vec<Commit>,
    scrub_cutoff: DateTime<FixedOffset>,
    active_len: usize,
    brush: Option<BrushRegion>,
    /// Indices into `commits`, all within the active prefix.
    selected: Vec<usize>,
    active_stats: CommitStats,
    selection: SelectionStats,
}

impl ViewState {
    /// Build the controller over an aggregated commit sequence. Starts fully
    /// revealed: the cutoff sits at the last commit's datetime, no brush.
    pub fn new(commits: Vec<Commit>) -> Self {
        let scrub_cutoff = commits
            .last()
            .map(|c| c.datetime)
            .unwrap_or_else(|| chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.fixed_offset());
        let active_len = commits.len();
        let active_stats = stats::commit_stats(&commits);
        let mut state = Self {
            commits,
            scrub_cutoff,
            active_len,
            brush: None,
            selected: Vec::new(),
            active_stats,
            selection: SelectionStats::default(),
        };
        state.recompute_selection_stats();
        state
    }

    /// Scrub transition: reveal exactly the commits with
    /// `datetime <= cutoff`.
    ///
    /// Correct for arbitrary cutoffs: before the first commit the active set
    /// is empty, after the last it is the full universe. The x domain should
    /// be re-fit to [`ViewState::x_domain`] afterwards, and since that moves
    /// every dot, the stored brush is re-evaluated against the scales handed
    /// in here. Returns [`Redraw::Full`].
    pub fn set_scrub_cutoff(
        &mut self,
        cutoff: DateTime<FixedOffset>,
        scales: &ChartScales,
    ) -> Redraw {
        self.scrub_cutoff = cutoff;
        self.active_len = self.commits.partition_point(|c| c.datetime <= cutoff);
        self.active_stats = stats::commit_stats(self.active_commits());
        self.recompute_selected(scales);
        self.recompute_selection_stats();
        Redraw::Full
    }

    /// Brush transition: replace the brush region (or clear it) and re-derive
    /// the selected subset under the scales handed in.
    ///
    /// Leaves the active subset and the x domain untouched, so only the
    /// selection readouts (count and language breakdown) need redrawing.
    /// Returns [`Redraw::Selection`].
    pub fn set_brush_region(
        &mut self,
        region: Option<BrushRegion>,
        scales: &ChartScales,
    ) -> Redraw {
        self.brush = region;
        self.recompute_selected(scales);
        self.recompute_selection_stats();
        Redraw::Selection
    }

    /// Handler for a scroll-step event carrying a commit: scrub to that
    /// commit's datetime. Unknown ids are ignored.
    pub fn enter_step(&mut self, commit_id: &str, scales: &ChartScales) -> Option<Redraw> {
        let cutoff = self
            .commits
            .iter()
            .find(|c| c.id == commit_id)
            .map(|c| c.datetime)?;
        Some(self.set_scrub_cutoff(cutoff, scales))
    }

    fn recompute_selected(&mut self, scales: &ChartScales) {
        let brush = self.brush;
        self.selected = match brush {
            None => Vec::new(),
            Some(region) => self
                .commits[..self.active_len]
                .iter()
                .enumerate()
                .filter(|&(_, c)| is_selected(Some(&region), c, scales))
                .map(|(i, _)| i)
                .collect(),
        };
    }

    fn recompute_selection_stats(&mut self) {
        let selected_count = self.selected.len();
        // Deliberate fallback: an empty selection (no brush, or a brush that
        // captured nothing) reports the whole active set, never zero.
        let breakdown = if self.selected.is_empty() {
            stats::language_breakdown(self.active_lines())
        } else {
            stats::language_breakdown(
                self.selected
                    .iter()
                    .flat_map(|&i| self.commits[i].lines().iter()),
            )
        };
        self.selection = SelectionStats {
            selected_count,
            breakdown,
        };
    }

    fn active_lines(&self) -> impl Iterator<Item = &LineRecord> {
        self.commits[..self.active_len]
            .iter()
            .flat_map(|c| c.lines().iter())
    }

    /// The revealed commit subset, in chronological order.
    pub fn active_commits(&self) -> &[Commit] {
        &self.commits[..self.active_len]
    }

    /// The brushed subset; always a subset of the active commits.
    pub fn selected_commits(&self) -> Vec<&Commit> {
        self.selected.iter().map(|&i| &self.commits[i]).collect()
    }

    pub fn scrub_cutoff(&self) -> DateTime<FixedOffset> {
        self.scrub_cutoff
    }

    pub fn brush_region(&self) -> Option<BrushRegion> {
        self.brush
    }

    /// Extent of the active subset's datetimes, for re-fitting the x scale.
    /// `None` when nothing is revealed.
    pub fn x_domain(&self) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let active = self.active_commits();
        match (active.first(), active.last()) {
            (Some(first), Some(last)) => Some((first.datetime, last.datetime)),
            _ => None,
        }
    }

    /// Headline statistics over the active subset.
    pub fn stats(&self) -> &CommitStats {
        &self.active_stats
    }

    /// Selection count and language breakdown.
    pub fn selection(&self) -> &SelectionStats {
        &self.selection
    }

    /// The "N commits selected" readout, with "No" standing in for zero.
    pub fn selection_label(&self) -> String {
        match self.selection.selected_count {
            0 => "No commits selected".to_string(),
            n => format!("{n} commits selected"),
        }
    }

    /// Per-file grouping of the active subset's lines, recomputed per call.
    pub fn file_groups(&self) -> Vec<FileGroup<'_>> {
        stats::per_file_grouping(self.active_lines())
    }

    /// Serializable summaries of the active commits, oldest first.
    pub fn active_summaries(&self) -> Vec<CommitSummary> {
        self.active_commits().iter().map(Commit::summary).collect()
    }

    /// Snapshot for the rendering layer.
    pub fn view_model(&self) -> ViewModel<'_> {
        ViewModel {
            active_commits: self.active_commits(),
            selected_commits: self.selected_commits(),
            stats: &self.active_stats,
            selection: &self.selection,
        }
    }
}
