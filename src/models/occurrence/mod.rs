// Occurrence module
// One scheduled instance of the recurring workshop

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::date::parse_instant;

/// A single workshop occurrence as supplied by the catalog.
///
/// The `date` is kept as the raw configuration string. A missing or
/// unparseable value means the occurrence is not scheduled yet; see
/// [`Occurrence::parsed_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Display grouping such as a month name. Not unique.
    #[serde(alias = "month")]
    pub label: String,
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: String,
}

impl Occurrence {
    /// Create a scheduled occurrence
    ///
    /// # Examples
    /// ```
    /// use workshop_countdown::models::occurrence::Occurrence;
    ///
    /// let occ = Occurrence::new("November", "Foundations", "2025-11-09T10:00:00Z", "Ernakulam");
    /// assert!(occ.parsed_date().is_some());
    /// ```
    pub fn new(
        label: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            date: Some(date.into()),
            location: location.into(),
        }
    }

    /// Create a placeholder occurrence with no date yet
    pub fn placeholder(
        label: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            date: None,
            location: location.into(),
        }
    }

    /// Resolved start instant, or `None` when the date is absent or unparseable.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref().and_then(parse_instant)
    }

    /// True when a date string is present but cannot be resolved.
    pub fn has_invalid_date(&self) -> bool {
        self.date
            .as_deref()
            .is_some_and(|raw| !raw.trim().is_empty() && parse_instant(raw).is_none())
    }
}
