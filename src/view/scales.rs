//! Coordinate scales handed to the selection predicate by the rendering
//! layer: monotonic continuous mappings from a data domain to pixel space.
//!
//! A degenerate domain (a single distinct value, or an empty subset) must not
//! break coordinate mapping, so every scale maps such a domain to the
//! midpoint of its range instead of dividing by zero.

use chrono::{DateTime, FixedOffset};

/// Linear mapping from a time domain to a pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    d0: i64,
    d1: i64,
    r0: f64,
    r1: f64,
}

impl TimeScale {
    /// Fit the scale to a domain extent. `None` (empty subset) behaves like a
    /// point domain: everything maps to the range midpoint.
    pub fn fit(domain: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)>, range: (f64, f64)) -> Self {
        let (d0, d1) = match domain {
            Some((lo, hi)) => (lo.timestamp_millis(), hi.timestamp_millis()),
            None => (0, 0),
        };
        Self {
            d0,
            d1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn map(&self, value: DateTime<FixedOffset>) -> f64 {
        if self.d0 == self.d1 {
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (value.timestamp_millis() - self.d0) as f64 / (self.d1 - self.d0) as f64;
        self.r0 + t * (self.r1 - self.r0)
    }
}

/// Linear mapping from a numeric domain to a pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        if self.d0 == self.d1 {
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (value - self.d0) / (self.d1 - self.d0);
        self.r0 + t * (self.r1 - self.r0)
    }
}

/// Square-root mapping, used for the scatter dot radius so dot area tracks
/// the commit's line count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0.max(0.0).sqrt(),
            d1: domain.1.max(0.0).sqrt(),
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        if self.d0 == self.d1 {
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (value.max(0.0).sqrt() - self.d0) / (self.d1 - self.d0);
        self.r0 + t * (self.r1 - self.r0)
    }
}

/// The pair of scales the scatter plot positions commits with. Owned by the
/// rendering layer and passed into the engine by reference; refit (and handed
/// back in) every time the active subset changes the x extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    /// datetime to pixel x
    pub x: TimeScale,
    /// hour-of-day fraction to pixel y
    pub y: LinearScale,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn at(s: &str) -> DateTime<FixedOffset> {
        s.parse().unwrap()
    }

    #[test]
    fn time_scale_interpolates_linearly() {
        let scale = TimeScale::fit(
            Some((at("2024-03-05T00:00:00Z"), at("2024-03-07T00:00:00Z"))),
            (0.0, 100.0),
        );
        assert_eq!(scale.map(at("2024-03-05T00:00:00Z")), 0.0);
        assert_eq!(scale.map(at("2024-03-06T00:00:00Z")), 50.0);
        assert_eq!(scale.map(at("2024-03-07T00:00:00Z")), 100.0);
    }

    #[test]
    fn degenerate_time_domain_maps_to_midpoint() {
        let point = at("2024-03-05T12:00:00Z");
        let scale = TimeScale::fit(Some((point, point)), (20.0, 980.0));
        assert_eq!(scale.map(point), 500.0);
        assert_eq!(scale.map(at("2030-01-01T00:00:00Z")), 500.0);
    }

    #[test]
    fn empty_domain_maps_to_midpoint() {
        let scale = TimeScale::fit(None, (0.0, 10.0));
        assert_eq!(scale.map(at("2024-03-05T00:00:00Z")), 5.0);
    }

    #[test]
    fn linear_scale_supports_inverted_range() {
        // y axes render top-down, so ranges run high to low
        let scale = LinearScale::new((0.0, 24.0), (570.0, 10.0));
        assert_eq!(scale.map(0.0), 570.0);
        assert_eq!(scale.map(24.0), 10.0);
        assert_eq!(scale.map(12.0), 290.0);
    }

    #[test]
    fn degenerate_linear_domain_maps_to_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.map(5.0), 50.0);
    }

    #[test]
    fn sqrt_scale_tracks_area() {
        let scale = SqrtScale::new((1.0, 100.0), (3.0, 20.0));
        assert!((scale.map(1.0) - 3.0).abs() < 1e-12);
        assert!((scale.map(100.0) - 20.0).abs() < 1e-12);
        let mid = scale.map(25.0);
        assert!(mid > 3.0 && mid < 20.0);
    }

    #[test]
    fn sqrt_scale_degenerate_domain() {
        let scale = SqrtScale::new((7.0, 7.0), (3.0, 20.0));
        assert_eq!(scale.map(7.0), 11.5);
    }
}
