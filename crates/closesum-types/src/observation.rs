//! Snapshot observation representation.

use crate::SecurityId;

/// A single closing-snapshot record with its derived change.
///
/// `change` keeps full `f64` precision; rounding only happens when the
/// report is formatted. A record whose price fields are not numeric
/// carries a NaN change, which charting treats as a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Date field of the record (field 0), verbatim.
    pub date: String,
    /// Security name (field 3), verbatim.
    pub security: String,
    /// Sanitized security identifier.
    pub key: SecurityId,
    /// Price change (field 7 minus field 9).
    pub change: f64,
}

impl Observation {
    /// Creates a new observation, deriving the key from the security name.
    #[must_use]
    pub fn new(date: impl Into<String>, security: impl Into<String>, change: f64) -> Self {
        let security = security.into();
        Self {
            date: date.into(),
            key: SecurityId::from_name(&security),
            security,
            change,
        }
    }

    /// Returns true if the change could not be computed.
    #[must_use]
    pub const fn is_gap(&self) -> bool {
        self.change.is_nan()
    }
}
