//! Folder-by-folder observation aggregation.

use closesum_types::{DateLabel, Observation};

use crate::{DateSection, Report, SeriesMap, SeriesPoint};

/// The result of aggregating a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Flat report grouped by date folder.
    pub report: Report,
    /// Per-security series.
    pub series: SeriesMap,
}

/// Sequential aggregator over date folders.
///
/// Folders must be pushed in processing order. Each folder opens one
/// report section; each observation lands in that section and appends a
/// point, dated with the folder label, to the series of its security.
/// Nothing is deduplicated or re-sorted.
#[derive(Debug, Default)]
pub struct Aggregator {
    report: Report,
    series: SeriesMap,
}

impl Aggregator {
    /// Creates an aggregator with an empty series mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator that extends an existing series mapping.
    #[must_use]
    pub fn with_series(series: SeriesMap) -> Self {
        Self {
            report: Report::default(),
            series,
        }
    }

    /// Folds one date folder's observations.
    pub fn push_folder(
        &mut self,
        label: DateLabel,
        observations: impl IntoIterator<Item = Observation>,
    ) {
        let mut section = DateSection::new(label);
        for obs in observations {
            self.series.append(
                &obs.key,
                SeriesPoint::new(section.label.as_str(), obs.change),
            );
            section.observations.push(obs);
        }
        self.report.sections.push(section);
    }

    /// Returns the number of folders folded so far.
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.report.sections.len()
    }

    /// Finishes aggregation, returning the report and the series mapping.
    #[must_use]
    pub fn finish(self) -> Aggregation {
        Aggregation {
            report: self.report,
            series: self.series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use closesum_types::SecurityId;

    fn obs(date: &str, security: &str, change: f64) -> Observation {
        Observation::new(date, security, change)
    }

    #[test]
    fn test_two_folders_build_series() {
        let mut agg = Aggregator::new();
        agg.push_folder(
            DateLabel::from("2024-01-05"),
            vec![obs("2024-01-05", "ABC", 1.0)],
        );
        agg.push_folder(
            DateLabel::from("2024-01-06"),
            vec![obs("2024-01-06", "ABC", 2.0)],
        );
        let result = agg.finish();

        let abc = result.series.get(&SecurityId::from_name("ABC")).unwrap();
        let points: Vec<_> = abc
            .points
            .iter()
            .map(|p| (p.date.as_str(), p.change))
            .collect();
        assert_eq!(points, vec![("2024-01-05", 1.0), ("2024-01-06", 2.0)]);
        assert_eq!(result.report.sections.len(), 2);
    }

    #[test]
    fn test_sections_keep_line_order() {
        let mut agg = Aggregator::new();
        agg.push_folder(
            DateLabel::from("2024-01-05"),
            vec![obs("x", "C", 1.0), obs("x", "A", 2.0), obs("x", "B", 3.0)],
        );
        agg.push_folder(DateLabel::from("2024-01-06"), vec![obs("y", "A", 4.0)]);
        let report = agg.finish().report;

        let first: Vec<_> = report.sections[0]
            .observations
            .iter()
            .map(|o| o.security.as_str())
            .collect();
        assert_eq!(first, vec!["C", "A", "B"]);
        assert_eq!(report.sections[1].label.as_str(), "2024-01-06");
        assert_eq!(report.observation_count(), 4);
    }

    #[test]
    fn test_every_observation_has_a_series() {
        let mut agg = Aggregator::new();
        agg.push_folder(
            DateLabel::from("d1"),
            vec![obs("d1", "BRK.B", 1.0), obs("d1", "BRK B", 2.0), obs("d1", "X", f64::NAN)],
        );
        let result = agg.finish();

        for (_, o) in result.report.rows() {
            assert!(result.series.get(&o.key).is_some());
        }
        // Both names sanitize to the same key.
        let merged = result.series.get(&SecurityId::from_name("BRK_B")).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(result.series.len(), 2);
    }

    #[test]
    fn test_repeated_security_in_one_folder() {
        let mut agg = Aggregator::new();
        agg.push_folder(
            DateLabel::from("d1"),
            vec![obs("d1", "A", 1.0), obs("d1", "A", 2.0)],
        );
        let series = agg.finish().series;
        assert_eq!(series.get(&SecurityId::from_name("A")).unwrap().len(), 2);
    }

    #[test]
    fn test_gaps_are_kept() {
        let mut agg = Aggregator::new();
        agg.push_folder(DateLabel::from("d1"), vec![obs("d1", "A", f64::NAN)]);
        let result = agg.finish();
        assert_eq!(result.report.observation_count(), 1);
        let a = result.series.get(&SecurityId::from_name("A")).unwrap();
        assert!(!a.points[0].is_valid());
    }

    #[test]
    fn test_empty_folder_still_opens_section() {
        let mut agg = Aggregator::new();
        agg.push_folder(DateLabel::from("d1"), Vec::new());
        assert_eq!(agg.folder_count(), 1);
        let result = agg.finish();
        assert!(result.series.is_empty());
        assert_eq!(result.report.sections.len(), 1);
    }

    #[test]
    fn test_with_series_extends_existing_map() {
        let mut seed = SeriesMap::new();
        seed.append(&SecurityId::from_name("A"), SeriesPoint::new("d0", 0.5));

        let mut agg = Aggregator::with_series(seed);
        agg.push_folder(DateLabel::from("d1"), vec![obs("d1", "A", 1.5)]);
        let series = agg.finish().series;

        let a = series.get(&SecurityId::from_name("A")).unwrap();
        assert_eq!(a.len(), 2);
        assert_relative_eq!(a.points[1].change, 1.5);
    }
}
