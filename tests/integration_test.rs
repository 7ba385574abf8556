// Integration tests for the occurrence scheduler
// Covers the reference scenarios and catalog-to-view flow

mod fixtures;

use std::io::Write;
use std::sync::Arc;

use chrono::Duration;
use pretty_assertions::assert_eq;
use workshop_countdown::services::catalog::load_catalog;
use workshop_countdown::services::clock::{FixedClock, SimulatedClock};
use workshop_countdown::{
    classify, compute_countdown, evaluate, select_next_occurrence, CountdownSnapshot,
    OccurrenceStatus, Scheduler,
};

use fixtures::instants::{jun_1_2025, nov_1_2025, oct_1_2025, utc};
use fixtures::occurrences::{dated, season, season_json, undated};

#[test]
fn scenario_single_future_occurrence() {
    let list = vec![dated("Foundations", "2025-11-09T10:00:00Z")];
    let now = nov_1_2025();

    let next = select_next_occurrence(&list, now).expect("occurrence should be next");
    assert_eq!(next.index, 0);

    let snap = compute_countdown(Some(&next), now);
    assert_eq!((snap.days, snap.hours, snap.minutes, snap.seconds), (8, 10, 0, 0));
    assert_eq!(snap.target.as_ref(), Some(&list[0]));
}

#[test]
fn scenario_finished_and_placeholder() {
    let list = vec![dated("New Year", "2025-01-01T00:00:00Z"), undated("Later")];
    let now = jun_1_2025();

    assert_eq!(classify(&list[0], now), OccurrenceStatus::Finished);
    assert_eq!(classify(&list[1], now), OccurrenceStatus::ComingSoon);
    assert!(select_next_occurrence(&list, now).is_none());
    assert_eq!(evaluate(&list, now).countdown, CountdownSnapshot::default());
}

#[test]
fn scenario_earlier_future_date_wins_regardless_of_order() {
    let list = vec![
        dated("December", "2025-12-01T00:00:00Z"),
        dated("November", "2025-11-01T00:00:00Z"),
    ];
    let next = select_next_occurrence(&list, oct_1_2025()).unwrap();
    assert_eq!(next.occurrence.title, "November");
}

#[test]
fn scenario_target_equals_now() {
    let list = vec![dated("Right now", "2025-11-01T00:00:00Z")];
    let now = nov_1_2025();

    assert_eq!(classify(&list[0], now), OccurrenceStatus::Upcoming);

    // Not selected as next (strictly after now), so the snapshot is empty
    assert!(select_next_occurrence(&list, now).is_none());

    // Computing directly against the target still clamps to zero
    let earlier = select_next_occurrence(&list, now - Duration::seconds(1)).unwrap();
    let snap = compute_countdown(Some(&earlier), now);
    assert!(snap.is_zero());
}

#[test]
fn season_view_marks_exactly_one_next() {
    let view = evaluate(&season(), utc(2025, 10, 20, 0, 0, 0));
    let statuses: Vec<OccurrenceStatus> = view.occurrences.iter().map(|a| a.status).collect();

    assert_eq!(
        statuses,
        vec![
            OccurrenceStatus::Finished,
            OccurrenceStatus::Next,
            OccurrenceStatus::Upcoming,
            OccurrenceStatus::ComingSoon,
            OccurrenceStatus::ComingSoon,
        ]
    );
    assert_eq!(view.next().map(|a| a.occurrence.title.as_str()), Some("Foundations"));
}

#[test]
fn season_after_last_date_has_no_next() {
    let view = evaluate(&season(), utc(2026, 3, 1, 0, 0, 0));
    assert!(view.next().is_none());
    assert!(view.countdown.is_zero());
    assert!(view.countdown.target.is_none());
}

#[test]
fn catalog_file_drives_scheduler() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(season_json().as_bytes()).unwrap();

    let occurrences = load_catalog(file.path()).unwrap();
    // 2025-11-09T10:10+05:30 is 04:40 UTC
    let clock = Arc::new(FixedClock::new(utc(2025, 11, 8, 4, 40, 0)));
    let scheduler = Scheduler::new(occurrences, clock);

    let countdown = scheduler.countdown();
    assert_eq!((countdown.days, countdown.hours, countdown.minutes), (1, 0, 0));
    assert_eq!(countdown.padded().days, "01");
}

#[test]
fn next_moves_on_once_an_occurrence_starts() {
    let start = utc(2025, 11, 9, 4, 39, 59);
    let clock = Arc::new(SimulatedClock::new(start));
    let scheduler = Scheduler::new(season(), clock.clone());

    assert_eq!(scheduler.countdown().total_seconds(), 1);
    assert_eq!(scheduler.view().next().map(|a| a.index), Some(1));

    clock.advance(Duration::seconds(1));
    // At the start instant the occurrence is still upcoming but no longer next
    let view = scheduler.view();
    assert_eq!(view.occurrences[1].status, OccurrenceStatus::Upcoming);
    assert_eq!(view.next().map(|a| a.index), Some(2));

    clock.advance(Duration::seconds(1));
    assert_eq!(scheduler.view().occurrences[1].status, OccurrenceStatus::Finished);
}
