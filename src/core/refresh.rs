//! Refresh scheduler.
//!
//! Once per tick the scheduler decides whether to download a new dataset:
//! immediately while the store is still empty, and otherwise when the clock
//! in the reference time zone reads the configured trigger minute. Fetches
//! run inline in the loop, so at most one is ever in flight. Failures leave
//! the current snapshot in place and are retried on the next eligible tick.
//!
//! The trigger is an exact minute. If the process is stalled through that
//! minute (a slow fetch, a suspended host) the scheduled refresh is skipped
//! until the next day.

use crate::{
    config::RefreshSchedule,
    core::{feed::DatasetSource, store::DatasetStore},
};
use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use std::sync::Arc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the next tick
    Idle,
    /// A download is in flight
    Fetching,
}

/// Why a fetch was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The store has never been loaded
    Bootstrap,
    /// The daily trigger minute
    Scheduled,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do this tick
    Skipped,
    /// A new generation was installed
    Refreshed {
        /// What started the fetch
        trigger: Trigger,
        /// Generation number now active
        generation: u64,
    },
    /// The fetch failed; the old snapshot stays
    Failed {
        /// What started the fetch
        trigger: Trigger,
    },
}

/// Drives periodic refreshes of a [`DatasetStore`].
#[derive(Debug)]
pub struct RefreshScheduler<S> {
    source: S,
    store: Arc<DatasetStore>,
    schedule: RefreshSchedule,
    state: SchedulerState,
    last_scheduled: Option<NaiveDate>,
}

impl<S: DatasetSource> RefreshScheduler<S> {
    /// Creates an idle scheduler.
    pub const fn new(source: S, store: Arc<DatasetStore>, schedule: RefreshSchedule) -> Self {
        Self {
            source,
            store,
            schedule,
            state: SchedulerState::Idle,
            last_scheduled: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    /// Reference-zone date of the last successful refresh inside the trigger minute.
    #[must_use]
    pub const fn last_scheduled(&self) -> Option<NaiveDate> {
        self.last_scheduled
    }

    fn is_trigger_minute(&self, now: &DateTime<FixedOffset>) -> bool {
        now.hour() == self.schedule.trigger.hour() && now.minute() == self.schedule.trigger.minute()
    }

    /// Decides whether a tick at `now` should fetch.
    #[must_use]
    pub fn due(&self, now: &DateTime<FixedOffset>, store_empty: bool) -> Option<Trigger> {
        if store_empty {
            return Some(Trigger::Bootstrap);
        }
        let already_done_today = self.last_scheduled == Some(now.date_naive());
        (self.is_trigger_minute(now) && !already_done_today).then_some(Trigger::Scheduled)
    }

    /// Runs one tick at `now` (a time in the reference zone).
    pub async fn tick(&mut self, now: DateTime<FixedOffset>) -> TickOutcome {
        let Some(trigger) = self.due(&now, self.store.is_empty().await) else {
            return TickOutcome::Skipped;
        };

        info!("Fetching dataset ({:?})", trigger);
        self.state = SchedulerState::Fetching;
        let result = self.source.fetch().await;
        self.state = SchedulerState::Idle;

        match result {
            Ok(snapshot) => {
                let generation = self.store.replace(snapshot).await;
                if self.is_trigger_minute(&now) {
                    self.last_scheduled = Some(now.date_naive());
                }
                TickOutcome::Refreshed {
                    trigger,
                    generation,
                }
            }
            Err(e) => {
                error!("Dataset refresh failed, keeping current data: {}", e);
                TickOutcome::Failed { trigger }
            }
        }
    }

    /// Ticks forever at the configured interval. The first tick is immediate.
    pub async fn run(mut self) {
        let mut interval = time::interval(self.schedule.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(
            "Refresh scheduler started: daily at {} (UTC{}), polling every {:?}",
            self.schedule.trigger.format("%H:%M"),
            self.schedule.offset,
            self.schedule.poll_interval
        );
        loop {
            interval.tick().await;
            let now = Utc::now().with_timezone(&self.schedule.offset);
            self.tick(now).await;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::Settings, test_utils::ScriptedSource};
    use chrono::TimeZone;

    fn jst(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, s)
            .unwrap()
    }

    fn scheduler(source: ScriptedSource) -> (RefreshScheduler<ScriptedSource>, Arc<DatasetStore>) {
        let store = Arc::new(DatasetStore::new());
        let schedule = Settings::default().schedule().unwrap();
        (
            RefreshScheduler::new(source, Arc::clone(&store), schedule),
            store,
        )
    }

    #[tokio::test]
    async fn test_empty_store_fetches_on_first_tick_at_any_time() {
        let source = ScriptedSource::succeeding();
        let (mut scheduler, store) = scheduler(source.clone());

        let outcome = scheduler.tick(jst(2024, 5, 1, 3, 17, 0)).await;
        assert_eq!(
            outcome,
            TickOutcome::Refreshed {
                trigger: Trigger::Bootstrap,
                generation: 1
            }
        );
        assert_eq!(source.calls(), 1);
        assert!(!store.is_empty().await);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[tokio::test]
    async fn test_populated_store_skips_outside_trigger_minute() {
        let source = ScriptedSource::succeeding();
        let (mut scheduler, _store) = scheduler(source.clone());
        scheduler.tick(jst(2024, 5, 1, 9, 0, 0)).await;

        for minute in [0, 30, 44, 46, 59] {
            let outcome = scheduler.tick(jst(2024, 5, 1, 11, minute, 10)).await;
            assert_eq!(outcome, TickOutcome::Skipped, "minute {minute}");
        }
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_trigger_minute_fetches_once_per_day() {
        let source = ScriptedSource::succeeding();
        let (mut scheduler, store) = scheduler(source.clone());
        scheduler.tick(jst(2024, 5, 1, 9, 0, 0)).await;

        let first = scheduler.tick(jst(2024, 5, 1, 11, 45, 0)).await;
        assert_eq!(
            first,
            TickOutcome::Refreshed {
                trigger: Trigger::Scheduled,
                generation: 2
            }
        );
        // drifted second tick inside the same minute
        let second = scheduler.tick(jst(2024, 5, 1, 11, 45, 59)).await;
        assert_eq!(second, TickOutcome::Skipped);
        assert_eq!(scheduler.last_scheduled(), NaiveDate::from_ymd_opt(2024, 5, 1));

        let next_day = scheduler.tick(jst(2024, 5, 2, 11, 45, 3)).await;
        assert!(matches!(next_day, TickOutcome::Refreshed { .. }));
        assert_eq!(source.calls(), 3);
        assert_eq!(store.generation().await, 3);
    }

    #[tokio::test]
    async fn test_trigger_uses_reference_zone_not_utc() {
        let source = ScriptedSource::succeeding();
        let (mut scheduler, _store) = scheduler(source.clone());
        scheduler.tick(jst(2024, 5, 1, 9, 0, 0)).await;

        // 11:45 UTC is 20:45 in the reference zone
        let utc_1145 = Utc
            .with_ymd_and_hms(2024, 5, 1, 11, 45, 0)
            .unwrap()
            .with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(scheduler.tick(utc_1145).await, TickOutcome::Skipped);

        // 02:45 UTC is 11:45 in the reference zone
        let utc_0245 = Utc
            .with_ymd_and_hms(2024, 5, 2, 2, 45, 0)
            .unwrap()
            .with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());
        assert!(matches!(
            scheduler.tick(utc_0245).await,
            TickOutcome::Refreshed {
                trigger: Trigger::Scheduled,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_old_snapshot_and_retries() {
        let source = ScriptedSource::succeeding();
        let (mut scheduler, store) = scheduler(source.clone());
        scheduler.tick(jst(2024, 5, 1, 9, 0, 0)).await;
        let before = store.snapshot().await;

        source.fail_next(1);
        let failed = scheduler.tick(jst(2024, 5, 1, 11, 45, 0)).await;
        assert_eq!(
            failed,
            TickOutcome::Failed {
                trigger: Trigger::Scheduled
            }
        );
        assert_eq!(store.generation().await, 1);
        assert!(Arc::ptr_eq(&before, &store.snapshot().await));
        assert!(scheduler.last_scheduled().is_none());
        assert_eq!(scheduler.state(), SchedulerState::Idle);

        // still inside the trigger minute: try again
        let retried = scheduler.tick(jst(2024, 5, 1, 11, 45, 40)).await;
        assert!(matches!(retried, TickOutcome::Refreshed { .. }));
        assert_eq!(store.generation().await, 2);
    }

    #[tokio::test]
    async fn test_bootstrap_failure_retries_every_tick() {
        let source = ScriptedSource::succeeding();
        source.fail_next(2);
        let (mut scheduler, store) = scheduler(source.clone());

        for minute in 0..2 {
            let outcome = scheduler.tick(jst(2024, 5, 1, 8, minute, 0)).await;
            assert_eq!(
                outcome,
                TickOutcome::Failed {
                    trigger: Trigger::Bootstrap
                }
            );
            assert!(store.is_empty().await);
        }
        let outcome = scheduler.tick(jst(2024, 5, 1, 8, 2, 0)).await;
        assert!(matches!(outcome, TickOutcome::Refreshed { .. }));
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_bootstrap_inside_trigger_minute_counts_for_the_day() {
        let source = ScriptedSource::succeeding();
        let (mut scheduler, _store) = scheduler(source.clone());

        let first = scheduler.tick(jst(2024, 5, 1, 11, 45, 0)).await;
        assert!(matches!(
            first,
            TickOutcome::Refreshed {
                trigger: Trigger::Bootstrap,
                ..
            }
        ));
        assert_eq!(
            scheduler.tick(jst(2024, 5, 1, 11, 45, 30)).await,
            TickOutcome::Skipped
        );
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_due_is_pure() {
        let (scheduler, _store) = scheduler(ScriptedSource::succeeding());
        assert_eq!(
            scheduler.due(&jst(2024, 5, 1, 0, 0, 0), true),
            Some(Trigger::Bootstrap)
        );
        assert_eq!(scheduler.due(&jst(2024, 5, 1, 0, 0, 0), false), None);
        assert_eq!(
            scheduler.due(&jst(2024, 5, 1, 11, 45, 0), false),
            Some(Trigger::Scheduled)
        );
    }
}
