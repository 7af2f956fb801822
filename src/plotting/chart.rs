use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::styles::{hour_color, ChartLayout, ChartTheme};
use crate::types::Commit;
use crate::view::{ChartScales, LinearScale, SqrtScale, TimeScale, ViewState};

pub type PlotError = Box<dyn Error + Send + Sync>;

/// Fit the chart scales to the current active subset: x spans the active
/// datetimes (degenerating gracefully when the subset is empty or a single
/// instant), y spans the 24-hour day top-down.
///
/// The rendering layer owns these scales; after every scrub they must be
/// re-fit and handed back into the engine so the brush predicate sees the
/// new x domain.
pub fn fit_chart_scales(state: &ViewState, layout: &ChartLayout) -> ChartScales {
    ChartScales {
        x: TimeScale::fit(state.x_domain(), (layout.left(), layout.right())),
        y: LinearScale::new((0.0, 24.0), (layout.bottom(), layout.top())),
    }
}

fn darker(color: RGBColor, factor: f64) -> RGBColor {
    RGBColor(
        (f64::from(color.0) * factor) as u8,
        (f64::from(color.1) * factor) as u8,
        (f64::from(color.2) * factor) as u8,
    )
}

/// Render the active commit subset as a time × time-of-day scatter plot.
///
/// Each dot is one commit: x is the commit instant, y the fractional hour of
/// day, the radius tracks line count on a square-root scale and the color
/// follows the hour-of-day ramp. An empty active subset produces an empty
/// chart with a placeholder note; no axes are fit to a domain that is not
/// there.
///
/// Returns the fitted scales so the caller can feed them back into brush
/// evaluation.
pub fn render_scatter(
    state: &ViewState,
    path: &Path,
    layout: &ChartLayout,
    theme: &ChartTheme,
) -> Result<ChartScales, PlotError> {
    let scales = fit_chart_scales(state, layout);
    let root = BitMapBackend::new(path, (layout.width, layout.height)).into_drawing_area();
    root.fill(&theme.background_color)?;

    let label_font = ("sans-serif", 14).into_font().color(&theme.text_color);

    // Hour gridlines and labels every four hours
    for hour in (0..=24).step_by(4) {
        let y = scales.y.map(f64::from(hour)).round() as i32;
        root.draw(&PathElement::new(
            vec![
                (layout.left() as i32, y),
                (layout.right() as i32, y),
            ],
            theme.grid_color.stroke_width(1),
        ))?;
        root.draw(&Text::new(
            format!("{:02}:00", hour % 24),
            (4, y - 7),
            label_font.clone(),
        ))?;
    }

    // Baseline
    root.draw(&PathElement::new(
        vec![
            (layout.left() as i32, layout.bottom() as i32),
            (layout.right() as i32, layout.bottom() as i32),
        ],
        theme.axis_color.stroke_width(1),
    ))?;

    let active = state.active_commits();
    if active.is_empty() {
        root.draw(&Text::new(
            "No commits revealed",
            (
                (layout.width / 2) as i32 - 60,
                (layout.height / 2) as i32,
            ),
            label_font,
        ))?;
        root.present()?;
        return Ok(scales);
    }

    // Date labels at the ends of the x domain
    if let Some((first, last)) = state.x_domain() {
        let y = layout.bottom() as i32 + 8;
        root.draw(&Text::new(
            first.date_naive().to_string(),
            (layout.left() as i32, y),
            label_font.clone(),
        ))?;
        root.draw(&Text::new(
            last.date_naive().to_string(),
            (layout.right() as i32 - 70, y),
            label_font,
        ))?;
    }

    let min_lines = active.iter().map(|c| c.total_lines).min().unwrap_or(0);
    let max_lines = active.iter().map(|c| c.total_lines).max().unwrap_or(0);
    let r_scale = SqrtScale::new((min_lines as f64, max_lines as f64), layout.dot_radius);

    // Biggest dots first so the small ones stay visible on top
    let mut by_size: Vec<&Commit> = active.iter().collect();
    by_size.sort_by(|a, b| b.total_lines.cmp(&a.total_lines));

    for commit in by_size {
        let x = scales.x.map(commit.datetime).round() as i32;
        let y = scales.y.map(commit.hour_frac).round() as i32;
        let r = r_scale.map(commit.total_lines as f64).round() as i32;
        let fill = hour_color(commit.hour_frac);
        root.draw(&Circle::new((x, y), r, fill.mix(0.7).filled()))?;
        root.draw(&Circle::new((x, y), r, darker(fill, 0.7).stroke_width(1)))?;
    }

    root.present()?;
    Ok(scales)
}
