use std::time::Duration;

use crate::timer::{self, TimerGuard, TimerId};
use crate::ui::events::EventSender;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::Signal;

use super::intent::LaunchIntent;
use super::reducer::LaunchReducer;
use super::state::LaunchState;

/// Owns the launch state and its one-shot delay.
pub struct LaunchController {
    state: LaunchState,
    delay: Duration,
    timer: Option<TimerGuard>,
}

impl LaunchController {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: LaunchState::default(),
            delay,
            timer: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Screen became visible: (re)arm the delay.
    pub fn start(&mut self, events: &EventSender) {
        self.state = LaunchReducer::reduce(self.state, LaunchIntent::Begin);
        self.timer = Some(timer::one_shot(self.delay, events));
        tracing::debug!(delay = ?self.delay, "launch delay armed");
    }

    /// Screen torn down. A pending delay is dropped without signalling.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    /// Handle a timer firing; returns `LaunchComplete` the one time the
    /// held delay fires.
    pub fn on_timer(&mut self, id: TimerId) -> Option<Signal> {
        if !self.timer.as_ref().is_some_and(|t| t.owns(id)) {
            return None;
        }
        self.timer = None;
        let previous = self.state;
        self.state = LaunchReducer::reduce(previous, LaunchIntent::DelayElapsed);
        (previous == LaunchState::Waiting && self.state.is_complete())
            .then_some(Signal::LaunchComplete)
    }
}
