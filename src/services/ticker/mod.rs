//! Timer-driven re-evaluation of the schedule.
//!
//! A [`CountdownTicker`] owns one background task with two intervals: a fast
//! one for the countdown and a slow one for the status list. Every tick
//! re-reads the clock and recomputes from scratch. Results are published on
//! `watch` channels so any number of consumers can follow the latest value.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::models::countdown::CountdownSnapshot;
use crate::models::status::AnnotatedOccurrence;
use crate::services::schedule::Scheduler;

pub const DEFAULT_COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_STATUS_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerConfig {
    pub countdown_interval: Duration,
    pub status_interval: Duration,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            countdown_interval: DEFAULT_COUNTDOWN_INTERVAL,
            status_interval: DEFAULT_STATUS_INTERVAL,
        }
    }
}

/// Handle to a running re-evaluation task.
///
/// Call [`CountdownTicker::shutdown`] to stop it and wait for the task to
/// finish. Dropping the handle aborts the task instead.
pub struct CountdownTicker {
    countdown_rx: watch::Receiver<CountdownSnapshot>,
    status_rx: watch::Receiver<Vec<AnnotatedOccurrence>>,
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    /// Starts the task on the current tokio runtime.
    ///
    /// Both channels hold a value computed synchronously here, so consumers
    /// never observe an empty state.
    pub fn spawn(scheduler: Scheduler, config: TickerConfig) -> Self {
        let (countdown_tx, countdown_rx) = watch::channel(scheduler.countdown());
        let (status_tx, status_rx) = watch::channel(scheduler.statuses());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        log::info!(
            "Starting countdown ticker for {} occurrences (countdown every {:?}, status every {:?})",
            scheduler.occurrences().len(),
            config.countdown_interval,
            config.status_interval
        );

        let task = tokio::spawn(run(scheduler, config, countdown_tx, status_tx, shutdown_rx));

        Self {
            countdown_rx,
            status_rx,
            shutdown_tx,
            task: Some(task),
        }
    }

    pub fn countdown(&self) -> watch::Receiver<CountdownSnapshot> {
        self.countdown_rx.clone()
    }

    pub fn statuses(&self) -> watch::Receiver<Vec<AnnotatedOccurrence>> {
        self.status_rx.clone()
    }

    /// Stops the timers and waits for the task to exit.
    pub async fn shutdown(mut self) -> Result<()> {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            task.await.context("countdown ticker task failed")?;
        }
        log::info!("Countdown ticker stopped");
        Ok(())
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            log::debug!("Countdown ticker dropped without shutdown, aborting task");
            task.abort();
        }
    }
}

async fn run(
    scheduler: Scheduler,
    config: TickerConfig,
    countdown_tx: watch::Sender<CountdownSnapshot>,
    status_tx: watch::Sender<Vec<AnnotatedOccurrence>>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut countdown_tick = tokio::time::interval(config.countdown_interval);
    countdown_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut status_tick = tokio::time::interval(config.status_interval);
    status_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
            _ = countdown_tick.tick() => {
                let snapshot = scheduler.countdown();
                publish(&countdown_tx, snapshot);
            }
            _ = status_tick.tick() => {
                let statuses = scheduler.statuses();
                publish(&status_tx, statuses);
            }
        }
    }
}

/// Replaces the channel value, waking receivers only when it differs.
fn publish<T: PartialEq>(tx: &watch::Sender<T>, value: T) {
    tx.send_if_modified(|current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use crate::models::occurrence::Occurrence;
    use crate::models::status::OccurrenceStatus;
    use crate::services::clock::SimulatedClock;

    fn scheduler_with(clock: Arc<SimulatedClock>) -> Scheduler {
        let list = vec![Occurrence::new(
            "November",
            "Foundations",
            "2025-11-01T00:01:00Z",
            "Ernakulam",
        )];
        Scheduler::new(list, clock)
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_follows_the_clock() {
        let start = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        let clock = Arc::new(SimulatedClock::new(start));
        let ticker = CountdownTicker::spawn(scheduler_with(clock.clone()), TickerConfig::default());

        let mut rx = ticker.countdown();
        assert_eq!(rx.borrow_and_update().total_seconds(), 60);

        clock.advance(chrono::Duration::seconds(1));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().total_seconds(), 59);

        clock.advance(chrono::Duration::seconds(1));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().total_seconds(), 58);

        ticker.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn statuses_flip_to_finished_after_the_date() {
        let start = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        let clock = Arc::new(SimulatedClock::new(start));
        let ticker = CountdownTicker::spawn(scheduler_with(clock.clone()), TickerConfig::default());

        let mut rx = ticker.statuses();
        assert_eq!(rx.borrow_and_update()[0].status, OccurrenceStatus::Next);

        clock.advance(chrono::Duration::minutes(5));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update()[0].status, OccurrenceStatus::Finished);

        ticker.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_closes_the_channels() {
        let start = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        let clock = Arc::new(SimulatedClock::new(start));
        let ticker = CountdownTicker::spawn(scheduler_with(clock), TickerConfig::default());

        let mut countdown = ticker.countdown();
        let mut statuses = ticker.statuses();
        ticker.shutdown().await.unwrap();

        assert!(countdown.changed().await.is_err());
        assert!(statuses.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_aborts_the_task() {
        let start = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        let clock = Arc::new(SimulatedClock::new(start));
        let ticker = CountdownTicker::spawn(scheduler_with(clock), TickerConfig::default());

        let mut countdown = ticker.countdown();
        drop(ticker);

        assert!(countdown.changed().await.is_err());
    }
}
