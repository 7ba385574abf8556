// Test fixtures - reusable test data
// Provides consistent occurrences and instants across all test files

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use workshop_countdown::Occurrence;

/// Sample instants for testing
pub mod instants {
    use super::*;

    pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    /// Nov 1, 2025 at midnight UTC
    pub fn nov_1_2025() -> DateTime<Utc> {
        utc(2025, 11, 1, 0, 0, 0)
    }

    /// Oct 1, 2025 at midnight UTC
    pub fn oct_1_2025() -> DateTime<Utc> {
        utc(2025, 10, 1, 0, 0, 0)
    }

    /// Jun 1, 2025 at midnight UTC
    pub fn jun_1_2025() -> DateTime<Utc> {
        utc(2025, 6, 1, 0, 0, 0)
    }
}

/// Sample occurrences for testing
pub mod occurrences {
    use super::*;

    pub fn dated(title: &str, date: &str) -> Occurrence {
        Occurrence::new("Month", title, date, "Ernakulam")
    }

    pub fn undated(title: &str) -> Occurrence {
        Occurrence::placeholder("Month", title, "Ernakulam")
    }

    /// A season like the one on the landing page: past, next, later, and TBA
    pub fn season() -> Vec<Occurrence> {
        vec![
            Occurrence::new("October", "Orientation", "2025-10-05T10:10:00+05:30", "Ernakulam"),
            Occurrence::new("November", "Foundations", "2025-11-09T10:10:00+05:30", "Ernakulam"),
            Occurrence::new("December", "Practice Lab", "2025-12-07T10:10:00+05:30", "Ernakulam"),
            Occurrence::placeholder("January", "Advanced Session", "Ernakulam"),
            Occurrence::new("February", "Community Day", "TBD", "Kochi"),
        ]
    }

    /// The same season as a JSON catalog file body
    pub fn season_json() -> String {
        serde_json::to_string_pretty(&season()).unwrap()
    }
}
