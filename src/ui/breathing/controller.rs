use std::time::Duration;
use tokio::time::Instant;

use crate::timer::{self, TimerGuard, TimerId};
use crate::ui::animation::Tween;
use crate::ui::events::EventSender;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::Signal;

use super::intent::BreathingIntent;
use super::reducer::BreathingReducer;
use super::state::{BreathingState, Cadence};

/// Owns the breathing state, its periodic tick and the on-screen diameter.
pub struct BreathingController {
    state: BreathingState,
    cadence: Cadence,
    period: Duration,
    timer: Option<TimerGuard>,
    display: Tween,
}

impl BreathingController {
    pub fn new(cadence: Cadence, period: Duration) -> Self {
        Self {
            state: BreathingState::default(),
            cadence,
            period,
            timer: None,
            display: Tween::settled(0.0, Instant::now()),
        }
    }

    pub fn state(&self) -> BreathingState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Screen appeared: reset and start ticking.
    pub fn start(&mut self, events: &EventSender) {
        self.state = BreathingReducer::reduce(
            self.state,
            BreathingIntent::Begin {
                cadence: self.cadence,
            },
        );
        self.display = Tween::settled(f64::from(self.state.size), Instant::now());
        self.timer = Some(timer::periodic(self.period, events));
        tracing::info!(cadence = ?self.cadence, "breathing started");
    }

    /// Screen torn down without a user cancel (e.g. quitting).
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.state = BreathingReducer::reduce(self.state, BreathingIntent::Stop);
    }

    /// "stop exercise" pressed. Only the first call while active signals.
    pub fn stop_breathing(&mut self) -> Option<Signal> {
        if !self.state.active {
            return None;
        }
        self.stop();
        tracing::info!(size = self.state.size, phase = ?self.state.phase, "breathing cancelled");
        Some(Signal::BreathingCancelled)
    }

    pub fn on_timer(&mut self, id: TimerId) {
        if !self.timer.as_ref().is_some_and(|t| t.owns(id)) {
            return;
        }
        let previous = self.state;
        self.state = BreathingReducer::reduce(previous, BreathingIntent::Tick);
        if self.state.size != previous.size {
            self.display
                .retarget(f64::from(self.state.size), Instant::now(), self.period);
        }
        if self.state.phase != previous.phase {
            tracing::debug!(phase = ?self.state.phase, "breathing phase flipped");
        }
    }

    /// Diameter to draw at `now`, eased between ticks.
    pub fn diameter_at(&self, now: Instant) -> f64 {
        self.display.value_at(now)
    }

    /// Displayed diameter as a fraction of the configured maximum.
    pub fn fill_at(&self, now: Instant) -> f64 {
        self.cadence.fill_ratio(self.diameter_at(now))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.display.is_settled(now)
    }
}
