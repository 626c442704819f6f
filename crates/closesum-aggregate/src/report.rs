//! Flat dated report.

use closesum_types::{DateLabel, Observation};

/// The observations of one date folder.
#[derive(Debug, Clone, PartialEq)]
pub struct DateSection {
    /// Date label heading the section.
    pub label: DateLabel,
    /// Observations in original line order.
    pub observations: Vec<Observation>,
}

impl DateSection {
    /// Creates an empty section.
    #[must_use]
    pub const fn new(label: DateLabel) -> Self {
        Self {
            label,
            observations: Vec::new(),
        }
    }
}

/// All observations of a batch, grouped by date folder in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Sections in processing order.
    pub sections: Vec<DateSection>,
}

impl Report {
    /// Returns the total number of observations.
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.sections.iter().map(|s| s.observations.len()).sum()
    }

    /// Iterates over every observation with its section label.
    pub fn rows(&self) -> impl Iterator<Item = (&DateLabel, &Observation)> {
        self.sections
            .iter()
            .flat_map(|s| s.observations.iter().map(move |o| (&s.label, o)))
    }
}
