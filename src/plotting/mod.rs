mod chart;
mod styles;

pub use chart::{fit_chart_scales, render_scatter, PlotError};
pub use styles::{hour_color, ChartLayout, ChartTheme};
