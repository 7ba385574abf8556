//! Occurrence scheduling: next-occurrence selection, status classification
//! and countdown arithmetic.
//!
//! Everything here is a pure function of the occurrence list and a reference
//! instant. Callers re-run the evaluation on every tick instead of updating
//! any state incrementally.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::countdown::CountdownSnapshot;
use crate::models::occurrence::Occurrence;
use crate::models::status::{AnnotatedOccurrence, OccurrenceStatus};
use crate::services::clock::Clock;

/// The occurrence chosen as "next", with its resolved start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextOccurrence<'a> {
    /// Position in the input list.
    pub index: usize,
    pub occurrence: &'a Occurrence,
    pub date: DateTime<Utc>,
}

/// Picks the earliest occurrence whose date is strictly after `now`.
///
/// Occurrences without a resolvable date are skipped. When several share the
/// earliest date the one appearing first in the list wins.
pub fn select_next_occurrence(
    occurrences: &[Occurrence],
    now: DateTime<Utc>,
) -> Option<NextOccurrence<'_>> {
    occurrences
        .iter()
        .enumerate()
        .filter_map(|(index, occurrence)| {
            occurrence
                .parsed_date()
                .filter(|date| *date > now)
                .map(|date| NextOccurrence {
                    index,
                    occurrence,
                    date,
                })
        })
        .min_by_key(|next| (next.date, next.index))
}

/// Classifies a single occurrence. Never returns [`OccurrenceStatus::Next`];
/// that overlay is applied by [`annotate`].
pub fn classify(occurrence: &Occurrence, now: DateTime<Utc>) -> OccurrenceStatus {
    match occurrence.parsed_date() {
        None => OccurrenceStatus::ComingSoon,
        Some(date) if date < now => OccurrenceStatus::Finished,
        Some(_) => OccurrenceStatus::Upcoming,
    }
}

/// Time remaining until `target`, truncated to whole seconds and clamped at zero.
pub fn compute_countdown(target: Option<&NextOccurrence<'_>>, now: DateTime<Utc>) -> CountdownSnapshot {
    let Some(target) = target else {
        return CountdownSnapshot::default();
    };

    let remaining_ms = (target.date - now).num_milliseconds().max(0);
    let total_seconds = u64::try_from(remaining_ms / 1000).unwrap_or(0);

    CountdownSnapshot::from_total_seconds(
        total_seconds,
        Some(target.occurrence.clone()),
        Some(target.date),
    )
}

/// Every occurrence in input order with its status, the selected one marked `Next`.
pub fn annotate(occurrences: &[Occurrence], now: DateTime<Utc>) -> Vec<AnnotatedOccurrence> {
    let next_index = select_next_occurrence(occurrences, now).map(|next| next.index);

    occurrences
        .iter()
        .enumerate()
        .map(|(index, occurrence)| {
            let mut status = classify(occurrence, now);
            if Some(index) == next_index && status == OccurrenceStatus::Upcoming {
                status = OccurrenceStatus::Next;
            }
            AnnotatedOccurrence {
                index,
                occurrence: occurrence.clone(),
                status,
            }
        })
        .collect()
}

/// Result of one full evaluation against a single clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleView {
    pub evaluated_at: DateTime<Utc>,
    pub occurrences: Vec<AnnotatedOccurrence>,
    pub countdown: CountdownSnapshot,
}

impl ScheduleView {
    pub fn next(&self) -> Option<&AnnotatedOccurrence> {
        self.occurrences.iter().find(|annotated| annotated.is_next())
    }
}

/// Annotated list and countdown computed from the same `now`.
pub fn evaluate(occurrences: &[Occurrence], now: DateTime<Utc>) -> ScheduleView {
    let next = select_next_occurrence(occurrences, now);
    let countdown = compute_countdown(next.as_ref(), now);
    let annotated = annotate(occurrences, now);

    log::debug!(
        "Evaluated {} occurrences at {}: next={:?}, remaining={}s",
        occurrences.len(),
        now,
        next.map(|n| n.index),
        countdown.total_seconds()
    );

    ScheduleView {
        evaluated_at: now,
        occurrences: annotated,
        countdown,
    }
}

/// Read-only occurrence list bound to a clock.
///
/// Cloning is cheap; the list is shared, never mutated.
#[derive(Clone)]
pub struct Scheduler {
    occurrences: Arc<[Occurrence]>,
    clock: Arc<dyn Clock>,
}

impl Scheduler {
    pub fn new(occurrences: impl Into<Arc<[Occurrence]>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            occurrences: occurrences.into(),
            clock,
        }
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Full evaluation against a fresh clock reading.
    pub fn view(&self) -> ScheduleView {
        evaluate(&self.occurrences, self.clock.now())
    }

    pub fn countdown(&self) -> CountdownSnapshot {
        let now = self.clock.now();
        let next = select_next_occurrence(&self.occurrences, now);
        compute_countdown(next.as_ref(), now)
    }

    pub fn statuses(&self) -> Vec<AnnotatedOccurrence> {
        annotate(&self.occurrences, self.clock.now())
    }
}
