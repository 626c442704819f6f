//! Per-security change series.

use closesum_types::SecurityId;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// One point of a security's series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Date label of the folder the point came from.
    pub date: String,
    /// Change value; NaN marks a gap.
    pub change: f64,
}

impl SeriesPoint {
    /// Creates a new point.
    #[must_use]
    pub fn new(date: impl Into<String>, change: f64) -> Self {
        Self {
            date: date.into(),
            change,
        }
    }

    /// Returns true if the point has a usable change value.
    ///
    /// NaN marks a gap; infinities are treated the same way so they
    /// cannot blow up a chart scale.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.change.is_finite()
    }
}

/// The ordered change history of one security.
///
/// Points are kept in the order they were appended, which is the order
/// date folders were processed.
#[derive(Debug, Clone, PartialEq)]
pub struct SecuritySeries {
    /// Sanitized identifier of the security.
    pub id: SecurityId,
    /// Points in processing order.
    pub points: Vec<SeriesPoint>,
}

impl SecuritySeries {
    /// Creates an empty series.
    #[must_use]
    pub const fn new(id: SecurityId) -> Self {
        Self {
            id,
            points: Vec::new(),
        }
    }

    /// Appends a point.
    pub fn push(&mut self, point: SeriesPoint) {
        self.points.push(point);
    }

    /// Returns the number of points, gaps included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the minimum and maximum change, ignoring gaps.
    ///
    /// Returns `None` when no point has a usable value.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.is_valid())
            .fold(None, |range, p| match range {
                None => Some((p.change, p.change)),
                Some((lo, hi)) => Some((f64::min(lo, p.change), f64::max(hi, p.change))),
            })
    }
}

/// Ordered mapping from security identifier to its series.
///
/// Iteration is in ascending identifier order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesMap {
    series: BTreeMap<SecurityId, SecuritySeries>,
}

impl SeriesMap {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }

    /// Appends a point to the series of `id`, creating the series if needed.
    pub fn append(&mut self, id: &SecurityId, point: SeriesPoint) {
        self.series
            .entry(id.clone())
            .or_insert_with(|| SecuritySeries::new(id.clone()))
            .push(point);
    }

    /// Returns the series of a security.
    #[must_use]
    pub fn get(&self, id: &SecurityId) -> Option<&SecuritySeries> {
        self.series.get(id)
    }

    /// Returns the number of distinct securities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if no security has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Iterates over the series in identifier order.
    pub fn iter(&self) -> btree_map::Values<'_, SecurityId, SecuritySeries> {
        self.series.values()
    }
}

impl<'a> IntoIterator for &'a SeriesMap {
    type Item = &'a SecuritySeries;
    type IntoIter = btree_map::Values<'a, SecurityId, SecuritySeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn id(name: &str) -> SecurityId {
        SecurityId::from_name(name)
    }

    #[test]
    fn test_append_creates_and_extends() {
        let mut map = SeriesMap::new();
        map.append(&id("ABC"), SeriesPoint::new("2024-01-05", 1.0));
        map.append(&id("ABC"), SeriesPoint::new("2024-01-06", 2.0));
        map.append(&id("XYZ"), SeriesPoint::new("2024-01-05", 3.0));

        assert_eq!(map.len(), 2);
        let abc = map.get(&id("ABC")).unwrap();
        assert_eq!(abc.len(), 2);
        assert_eq!(abc.points[1].date, "2024-01-06");
    }

    #[test]
    fn test_iteration_order() {
        let mut map = SeriesMap::new();
        for name in ["zeta", "Alpha", "mid"] {
            map.append(&id(name), SeriesPoint::new("d", 0.0));
        }
        let names: Vec<_> = map.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_value_range_skips_gaps() {
        let mut series = SecuritySeries::new(id("ABC"));
        series.push(SeriesPoint::new("a", 2.5));
        series.push(SeriesPoint::new("b", f64::NAN));
        series.push(SeriesPoint::new("c", -1.0));

        let (lo, hi) = series.value_range().unwrap();
        assert_relative_eq!(lo, -1.0);
        assert_relative_eq!(hi, 2.5);
    }

    #[test]
    fn test_value_range_all_gaps() {
        let mut series = SecuritySeries::new(id("ABC"));
        series.push(SeriesPoint::new("a", f64::NAN));
        series.push(SeriesPoint::new("b", f64::INFINITY));
        assert!(series.value_range().is_none());
        assert!(SecuritySeries::new(id("E")).value_range().is_none());
    }
}
