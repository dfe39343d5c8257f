use tokio::time::Instant;

use crate::config::Config;
use crate::ui::breathing::{BreathingController, BreathingState, Cadence, Phase};
use crate::ui::countdown::{CountdownController, CountdownState};
use crate::ui::events::{AppEvent, EventSender};
use crate::ui::input::handle_key;
use crate::ui::launch::LaunchController;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavigationReducer, Screen, Signal};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Host-side glue: routes events to the visible screen's controller and
/// starts/stops controllers as the screen changes.
pub struct App {
    should_quit: bool,
    started: bool,
    screen: Screen,
    events: EventSender,
    launch: LaunchController,
    countdown: CountdownController,
    breathing: BreathingController,
    inhale_label: String,
    exhale_label: String,
}

impl App {
    pub fn new(config: &Config, events: EventSender, initial: Screen) -> Self {
        let period = config.timing.time_unit();
        Self {
            should_quit: false,
            started: false,
            screen: initial,
            events,
            launch: LaunchController::new(config.timing.launch_delay()),
            countdown: CountdownController::new(config.timing.countdown_from, period),
            breathing: BreathingController::new(Cadence::from(&config.breathing), period),
            inhale_label: config.breathing.inhale_label.clone(),
            exhale_label: config.breathing.exhale_label.clone(),
        }
    }

    /// Activate the initial screen. Later calls are no-ops.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.enter(self.screen);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Tear down the visible screen, releasing its timer, and quit.
    pub fn request_quit(&mut self) {
        if self.should_quit {
            return;
        }
        self.leave(self.screen);
        self.should_quit = true;
        tracing::info!(screen = ?self.screen, "quit requested");
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn countdown_state(&self) -> CountdownState {
        self.countdown.state()
    }

    pub fn breathing_state(&self) -> BreathingState {
        self.breathing.state()
    }

    pub fn breath_label(&self) -> &str {
        match self.breathing.state().phase {
            Phase::In => &self.inhale_label,
            Phase::Out => &self.exhale_label,
        }
    }

    /// Circle size to draw at `now`, as a fraction of the largest diameter.
    pub fn circle_fill(&self, now: Instant) -> f64 {
        self.breathing.fill_at(now)
    }

    /// True while the breathing circle is mid-transition and needs redraws.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.screen == Screen::Breathing && self.breathing.is_animating(now)
    }

    /// True if any controller currently holds a timer.
    pub fn has_active_timer(&self) -> bool {
        self.launch.is_running() || self.countdown.is_running() || self.breathing.is_running()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::TimerFired { id } => {
                let signal = match self.screen {
                    Screen::Launch => self.launch.on_timer(id),
                    Screen::StartExercise => self.countdown.on_timer(id),
                    Screen::Breathing => {
                        self.breathing.on_timer(id);
                        None
                    }
                };
                if let Some(signal) = signal {
                    self.apply_signal(signal);
                }
            }
            AppEvent::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            AppEvent::Shutdown => self.request_quit(),
        }
    }

    /// `startCountdown()` trigger. Ignored outside the start screen.
    pub fn start_countdown(&mut self) {
        if self.screen == Screen::StartExercise {
            self.countdown.start_countdown(&self.events);
        }
    }

    /// `stopBreathing()` trigger. Ignored outside the breathing screen, so a
    /// repeated call has no effect.
    pub fn stop_breathing(&mut self) {
        if self.screen != Screen::Breathing {
            return;
        }
        if let Some(signal) = self.breathing.stop_breathing() {
            self.apply_signal(signal);
        }
    }

    fn apply_signal(&mut self, signal: Signal) {
        let previous = self.screen;
        dispatch_mvi!(self, screen, NavigationReducer, signal);
        if previous == self.screen {
            tracing::debug!(?signal, screen = ?previous, "signal ignored");
            return;
        }
        tracing::info!(?signal, from = ?previous, to = ?self.screen, "navigated");
        self.leave(previous);
        self.enter(self.screen);
    }

    fn enter(&mut self, screen: Screen) {
        match screen {
            Screen::Launch => self.launch.start(&self.events),
            Screen::StartExercise => self.countdown.start(),
            Screen::Breathing => self.breathing.start(&self.events),
        }
    }

    fn leave(&mut self, screen: Screen) {
        match screen {
            Screen::Launch => self.launch.stop(),
            Screen::StartExercise => self.countdown.stop(),
            Screen::Breathing => self.breathing.stop(),
        }
    }
}
