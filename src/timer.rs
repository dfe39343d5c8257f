//! Scoped one-shot and periodic timers.
//!
//! A timer is a tokio task that posts [`AppEvent::TimerFired`] into the app's
//! event channel. The returned [`TimerGuard`] owns the task: cancelling or
//! dropping it aborts the task, so no firing is produced afterwards. A firing
//! that was already queued still carries the old [`TimerId`], which its owner
//! no longer holds and therefore ignores.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::ui::events::{AppEvent, EventSender};

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique timer identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    fn next() -> Self {
        Self(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a running timer task. Aborts the task on drop.
#[derive(Debug)]
pub struct TimerGuard {
    id: TimerId,
    task: JoinHandle<()>,
}

impl TimerGuard {
    /// True if `id` was produced by this timer.
    pub fn owns(&self, id: TimerId) -> bool {
        self.id == id
    }

    /// Stop the timer. Equivalent to dropping the guard.
    pub fn cancel(self) {}
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.task.abort();
        tracing::trace!(id = self.id.0, "timer released");
    }
}

/// Fire once after `delay`.
pub fn one_shot(delay: Duration, events: &EventSender) -> TimerGuard {
    let id = TimerId::next();
    let deadline = Instant::now() + delay;
    let tx = events.clone();
    let task = tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        let _ = tx.send(AppEvent::TimerFired { id });
    });
    tracing::trace!(id = id.0, ?delay, "one-shot timer acquired");
    TimerGuard { id, task }
}

/// Fire every `period`, first firing one period from now.
///
/// Stops on its own once the event channel is closed.
pub fn periodic(period: Duration, events: &EventSender) -> TimerGuard {
    let id = TimerId::next();
    let start = Instant::now() + period;
    let tx = events.clone();
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(start, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if tx.send(AppEvent::TimerFired { id }).is_err() {
                break;
            }
        }
    });
    tracing::trace!(id = id.0, ?period, "periodic timer acquired");
    TimerGuard { id, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn fired_id(event: AppEvent) -> TimerId {
        match event {
            AppEvent::TimerFired { id } => id,
            other => panic!("expected TimerFired, got {other:?}"),
        }
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(TimerId::next(), TimerId::next());
    }

    #[tokio::test(start_paused = true)]
    async fn one_shot_fires_once_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = Instant::now();
        let guard = one_shot(Duration::from_secs(3), &tx);

        let id = fired_id(rx.recv().await.expect("channel open"));
        assert!(guard.owns(id));
        assert!(started.elapsed() >= Duration::from_secs(3));

        let again = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(again.is_err(), "one-shot must not fire twice");
    }

    #[tokio::test(start_paused = true)]
    async fn periodic_fires_every_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = Instant::now();
        let guard = periodic(Duration::from_secs(1), &tx);

        for n in 1..=4u64 {
            let id = fired_id(rx.recv().await.expect("channel open"));
            assert!(guard.owns(id));
            assert!(started.elapsed() >= Duration::from_secs(n));
            assert!(started.elapsed() < Duration::from_secs(n + 1));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_further_firings() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let guard = periodic(Duration::from_secs(1), &tx);
        rx.recv().await.expect("first tick");

        guard.cancel();
        let next = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(next.is_err(), "cancelled timer kept firing");
    }

    #[tokio::test(start_paused = true)]
    async fn drop_releases_one_shot_before_it_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(one_shot(Duration::from_secs(3), &tx));
        let next = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(next.is_err());
    }
}
