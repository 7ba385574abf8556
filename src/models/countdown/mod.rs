use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::occurrence::Occurrence;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Time remaining until the next occurrence, decomposed for display.
///
/// All fields are clamped at zero once the target instant is reached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub days: u64,
    /// 0..=23
    pub hours: u64,
    /// 0..=59
    pub minutes: u64,
    /// 0..=59
    pub seconds: u64,
    pub target: Option<Occurrence>,
    pub target_at: Option<DateTime<Utc>>,
}

impl CountdownSnapshot {
    /// Decomposes a whole number of remaining seconds.
    pub fn from_total_seconds(
        total: u64,
        target: Option<Occurrence>,
        target_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
            target,
            target_at,
        }
    }

    /// Remaining time read back as a single number of seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Two-digit padded strings, the shape the landing page renders.
    pub fn padded(&self) -> PaddedCountdown {
        PaddedCountdown {
            days: format!("{:02}", self.days),
            hours: format!("{:02}", self.hours),
            minutes: format!("{:02}", self.minutes),
            seconds: format!("{:02}", self.seconds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedCountdown {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}
