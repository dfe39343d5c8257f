//! Shared test harness: an `App` wired to a real event channel.

#![allow(dead_code)]

use breathe::config::Config;
use breathe::ui::app::App;
use breathe::ui::events::{self, AppEvent, EventReceiver};
use breathe::ui::navigation::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

pub struct Harness {
    pub app: App,
    pub rx: EventReceiver,
}

impl Harness {
    /// Build and start an app on `initial`. Must run inside a tokio runtime.
    pub fn start(config: Config, initial: Screen) -> Self {
        let (tx, rx) = events::channel();
        let mut app = App::new(&config, tx, initial);
        app.start();
        Self { app, rx }
    }

    pub fn default_at(initial: Screen) -> Self {
        Self::start(Config::default(), initial)
    }

    /// Wait for the next event (with paused time this jumps the clock to
    /// the next timer deadline) without applying it.
    pub async fn next_event(&mut self) -> AppEvent {
        self.rx.recv().await.expect("event channel closed")
    }

    /// Receive and apply one event.
    pub async fn step(&mut self) {
        let event = self.next_event().await;
        self.app.handle_event(event);
    }

    pub async fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step().await;
        }
    }

    /// True if no event arrives within `window`.
    pub async fn is_quiet_for(&mut self, window: Duration) -> bool {
        tokio::time::timeout(window, self.rx.recv()).await.is_err()
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app
            .handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }
}
