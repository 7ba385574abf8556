use serde::{Deserialize, Serialize};

use super::occurrence::Occurrence;

/// Derived status of an occurrence at a given instant.
///
/// `Next` refines `Upcoming`: at most one occurrence holds it per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OccurrenceStatus {
    Upcoming,
    Next,
    ComingSoon,
    Finished,
}

impl OccurrenceStatus {
    /// True for `Upcoming` and its `Next` refinement.
    pub fn is_upcoming(self) -> bool {
        matches!(self, Self::Upcoming | Self::Next)
    }

    /// Short label shown next to each occurrence.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Next => "Next Up",
            Self::ComingSoon => "Coming Soon",
            Self::Finished => "Finished",
        }
    }
}

/// An occurrence paired with its status for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedOccurrence {
    /// Position in the catalog, used to identify the occurrence since labels repeat.
    pub index: usize,
    pub occurrence: Occurrence,
    pub status: OccurrenceStatus,
}

impl AnnotatedOccurrence {
    pub fn is_next(&self) -> bool {
        self.status == OccurrenceStatus::Next
    }
}
