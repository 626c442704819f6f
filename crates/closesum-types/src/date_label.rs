//! Date labels and date-folder ordering.

use chrono::NaiveDate;
use std::fmt;

/// Date formats tried when a label is interpreted as a calendar date.
const LABEL_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// The date label of a snapshot folder.
///
/// Folders are named `<date>_<suffix>`; the label is the text before the
/// first `_`, or the whole name when there is no separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateLabel(String);

impl DateLabel {
    /// Derives the label from a folder name.
    #[must_use]
    pub fn from_folder_name(name: &str) -> Self {
        let label = name.split_once('_').map_or(name, |(head, _)| head);
        Self(label.to_string())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the label as a calendar date, if it is one.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        LABEL_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&self.0, fmt).ok())
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for DateLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

/// Order in which date folders are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FolderOrder {
    /// Directory listing order (ascending folder name).
    #[default]
    Listing,
    /// Calendar order of the parsed labels; undated folders follow in
    /// listing order.
    Calendar,
}

impl FolderOrder {
    /// Reorders items already in listing order.
    ///
    /// The sort is stable, so folders sharing a date keep their listing
    /// order.
    pub fn apply<T>(self, items: &mut [T], label: impl Fn(&T) -> &DateLabel) {
        match self {
            Self::Listing => {}
            Self::Calendar => items.sort_by_cached_key(|item| {
                let date = label(item).calendar_date();
                (date.is_none(), date)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_label_from_folder_name() {
        assert_eq!(DateLabel::from_folder_name("2024-01-05_A").as_str(), "2024-01-05");
        assert_eq!(
            DateLabel::from_folder_name("2024-01-05_close_final").as_str(),
            "2024-01-05"
        );
        assert_eq!(DateLabel::from_folder_name("2024-01-05").as_str(), "2024-01-05");
        assert_eq!(DateLabel::from_folder_name("_x").as_str(), "");
    }

    #[test]
    fn test_calendar_date() {
        let date = DateLabel::from("2024-01-05").calendar_date().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 5));

        let compact = DateLabel::from("20240105").calendar_date().unwrap();
        assert_eq!(compact, date);

        assert!(DateLabel::from("Dec05").calendar_date().is_none());
    }

    #[test]
    fn test_listing_order_is_untouched() {
        let mut labels = vec![DateLabel::from("2024-01-10"), DateLabel::from("2024-01-02")];
        FolderOrder::Listing.apply(&mut labels, |l| l);
        assert_eq!(labels[0].as_str(), "2024-01-10");
    }

    #[test]
    fn test_calendar_order() {
        let mut labels = vec![
            DateLabel::from("misc"),
            DateLabel::from("2024-01-10"),
            DateLabel::from("20240102"),
            DateLabel::from("2023-12-31"),
        ];
        FolderOrder::Calendar.apply(&mut labels, |l| l);
        let names: Vec<_> = labels.iter().map(DateLabel::as_str).collect();
        assert_eq!(names, vec!["2023-12-31", "20240102", "2024-01-10", "misc"]);
    }
}
