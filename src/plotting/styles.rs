use plotters::style::{RGBAColor, RGBColor};

/// Chart theme configuration
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(255, 255, 255, 1.0),
            text_color: RGBAColor(60, 60, 60, 0.9),
            grid_color: RGBAColor(0, 0, 0, 0.12),
            axis_color: RGBAColor(60, 60, 60, 0.8),
        }
    }
}

/// Chart geometry: canvas size, margins and the dot radius range.
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// Min and max dot radius in pixels; the radius scale is square-root so
    /// dot area tracks commit size
    pub dot_radius: (f64, f64),
}

impl ChartLayout {
    pub fn top(&self) -> f64 {
        self.margin_top
    }

    pub fn bottom(&self) -> f64 {
        f64::from(self.height) - self.margin_bottom
    }

    pub fn left(&self) -> f64 {
        self.margin_left
    }

    pub fn right(&self) -> f64 {
        f64::from(self.width) - self.margin_right
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            margin_top: 10.0,
            margin_right: 10.0,
            margin_bottom: 30.0,
            margin_left: 50.0,
            dot_radius: (3.0, 20.0),
        }
    }
}

const NIGHT_BLUE: (f64, f64, f64) = (6.0, 54.0, 186.0);
const MORNING_BLUE: (f64, f64, f64) = (59.0, 130.0, 246.0);
const NOON_ORANGE: (f64, f64, f64) = (251.0, 146.0, 60.0);
const EVENING_ORANGE: (f64, f64, f64) = (249.0, 115.0, 22.0);

fn lerp(a: (f64, f64, f64), b: (f64, f64, f64), t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    RGBColor(
        (a.0 + (b.0 - a.0) * t).round() as u8,
        (a.1 + (b.1 - a.1) * t).round() as u8,
        (a.2 + (b.2 - a.2) * t).round() as u8,
    )
}

/// Dot color for an hour of day: deep blue through the night, warming over
/// the morning, orange through the afternoon, back to blue after dark.
pub fn hour_color(hour_frac: f64) -> RGBColor {
    let hour = hour_frac.rem_euclid(24.0);
    if hour < 6.0 {
        lerp(NIGHT_BLUE, MORNING_BLUE, hour / 6.0)
    } else if hour < 12.0 {
        lerp(MORNING_BLUE, NOON_ORANGE, (hour - 6.0) / 6.0)
    } else if hour < 18.0 {
        lerp(NOON_ORANGE, EVENING_ORANGE, (hour - 12.0) / 6.0)
    } else {
        lerp(EVENING_ORANGE, NIGHT_BLUE, (hour - 18.0) / 6.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_color_hits_the_segment_anchors() {
        assert_eq!(hour_color(0.0), RGBColor(6, 54, 186));
        assert_eq!(hour_color(6.0), RGBColor(59, 130, 246));
        assert_eq!(hour_color(12.0), RGBColor(251, 146, 60));
        assert_eq!(hour_color(18.0), RGBColor(249, 115, 22));
    }

    #[test]
    fn hour_color_wraps_past_midnight() {
        assert_eq!(hour_color(24.0), hour_color(0.0));
    }
}
