//! Time series model
//! A scene's data: `(year, value)` pairs ordered by year.

/// A single observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub year: i32,
    pub value: f64,
}

impl DataPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Points of one scene, sorted by year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<DataPoint>,
}

impl TimeSeries {
    /// Build a series, sorting by year. Points sharing a year keep their input order.
    pub fn new(mut points: Vec<DataPoint>) -> Self {
        points.sort_by_key(|p| p.year);
        Self { points }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `[min(year), max(year)]`, or `None` for an empty series.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.year, last.year))
    }

    /// `[min(value), max(value)]`, or `None` for an empty series.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let (min, max) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.value), hi.max(p.value))
            });
        Some((min, max))
    }
}
