//! Brush selection: a rectangle in chart pixel space and the predicate that
//! decides which commits fall inside it.

use super::scales::ChartScales;
use crate::types::Commit;

/// Axis-aligned rectangle in chart pixel space, as dragged out by a brush.
///
/// Stored normalized: `x0 <= x1` and `y0 <= y1` regardless of drag direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushRegion {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl BrushRegion {
    /// Build a region from two opposite corners, in any order.
    pub fn new(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x0: a.0.min(b.0),
            y0: a.1.min(b.1),
            x1: a.0.max(b.0),
            y1: a.1.max(b.1),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Decide whether a commit falls inside the brush region.
///
/// Pure and scale-agnostic: the commit's datetime goes through the x scale
/// and its hour fraction through the y scale, then the resulting pixel point
/// is tested for inclusive containment. An absent region selects nothing.
///
/// The scales belong to the rendering layer; whenever either scale's domain
/// or range changes (for example after a scrub re-fits the x domain) the
/// predicate must be re-evaluated with the new scales, never answered from a
/// cached result.
pub fn is_selected(region: Option<&BrushRegion>, commit: &Commit, scales: &ChartScales) -> bool {
    let Some(region) = region else {
        return false;
    };
    let x = scales.x.map(commit.datetime);
    let y = scales.y.map(commit.hour_frac);
    region.contains(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::aggregate;
    use crate::types::LineRecord;
    use crate::view::scales::{LinearScale, TimeScale};
    use chrono::{DateTime, FixedOffset};

    fn commit_at(datetime: &str) -> Commit {
        let datetime: DateTime<FixedOffset> = datetime.parse().unwrap();
        let record = LineRecord {
            commit: "a1".to_string(),
            file: "index.html".to_string(),
            kind: "html".to_string(),
            author: "Test User".to_string(),
            date: datetime.date_naive(),
            time: "12:00:00".to_string(),
            timezone: "+00:00".to_string(),
            datetime,
            line: 1,
            depth: 0,
            length: 10,
        };
        aggregate(vec![record], "").remove(0)
    }

    fn scales() -> ChartScales {
        ChartScales {
            x: TimeScale::fit(
                Some((
                    "2024-03-01T00:00:00+00:00".parse().unwrap(),
                    "2024-03-11T00:00:00+00:00".parse().unwrap(),
                )),
                (0.0, 1000.0),
            ),
            y: LinearScale::new((0.0, 24.0), (600.0, 0.0)),
        }
    }

    #[test]
    fn absent_region_selects_nothing() {
        let commit = commit_at("2024-03-05T12:00:00+00:00");
        assert!(!is_selected(None, &commit, &scales()));
    }

    #[test]
    fn containment_is_inclusive_at_the_boundary() {
        let scales = scales();
        let commit = commit_at("2024-03-06T12:00:00+00:00");
        let x = scales.x.map(commit.datetime);
        let y = scales.y.map(commit.hour_frac);

        let exact = BrushRegion::new((x, y), (x, y));
        assert!(is_selected(Some(&exact), &commit, &scales));

        let just_off = BrushRegion::new((x + 0.001, y), (x + 10.0, y + 10.0));
        assert!(!is_selected(Some(&just_off), &commit, &scales));
    }

    #[test]
    fn region_corners_normalize() {
        let region = BrushRegion::new((10.0, 20.0), (-5.0, 2.0));
        assert!(region.contains(0.0, 10.0));
        assert!(region.contains(-5.0, 2.0));
        assert!(region.contains(10.0, 20.0));
        assert!(!region.contains(11.0, 10.0));
    }

    #[test]
    fn reevaluating_under_new_scales_changes_the_answer() {
        let commit = commit_at("2024-03-06T12:00:00+00:00");
        let before = scales();
        let x = before.x.map(commit.datetime);
        let y = before.y.map(commit.hour_frac);
        let region = BrushRegion::new((x - 1.0, y - 1.0), (x + 1.0, y + 1.0));
        assert!(is_selected(Some(&region), &commit, &before));

        // Same region, re-fit x domain: the commit now lands elsewhere
        let after = ChartScales {
            x: TimeScale::fit(
                Some((
                    "2024-03-06T00:00:00+00:00".parse().unwrap(),
                    "2024-03-31T00:00:00+00:00".parse().unwrap(),
                )),
                (0.0, 1000.0),
            ),
            y: before.y,
        };
        assert!(!is_selected(Some(&region), &commit, &after));
    }
}
