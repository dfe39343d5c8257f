use std::time::Duration;

use crate::timer::{self, TimerGuard, TimerId};
use crate::ui::events::EventSender;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::Signal;

use super::intent::CountdownIntent;
use super::reducer::CountdownReducer;
use super::state::CountdownState;

/// Owns the countdown state and its periodic tick.
pub struct CountdownController {
    state: CountdownState,
    from: u32,
    period: Duration,
    timer: Option<TimerGuard>,
}

impl CountdownController {
    pub fn new(from: u32, period: Duration) -> Self {
        Self {
            state: CountdownState::default(),
            from,
            period,
            timer: None,
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Start screen became visible: show the button.
    pub fn start(&mut self) {
        self.timer = None;
        self.state = CountdownReducer::reduce(self.state, CountdownIntent::Reset);
    }

    /// "start exercise" pressed. Acquires the tick timer only on the
    /// `Idle → Counting` edge.
    pub fn start_countdown(&mut self, events: &EventSender) {
        let previous = self.state;
        self.state = CountdownReducer::reduce(previous, CountdownIntent::Start { from: self.from });
        if previous == CountdownState::Idle && self.state.is_counting() {
            self.timer = Some(timer::periodic(self.period, events));
            tracing::info!(from = self.from, "countdown started");
        }
    }

    /// Screen torn down: release the timer, whatever the state.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    /// Apply one tick. Returns `CountdownComplete` on the tick that reaches
    /// `Done`, after releasing the timer.
    pub fn on_timer(&mut self, id: TimerId) -> Option<Signal> {
        if !self.timer.as_ref().is_some_and(|t| t.owns(id)) {
            return None;
        }
        self.state = CountdownReducer::reduce(self.state, CountdownIntent::Tick);
        tracing::debug!(state = ?self.state, "countdown tick");
        if self.state.is_done() {
            self.stop();
            return Some(Signal::CountdownComplete);
        }
        None
    }
}
