use crate::config::Config;
use crate::shutdown::Shutdown;
use crate::ui::app::App;
use crate::ui::events::{self, spawn_input_reader, spawn_signal_listener};
use crate::ui::navigation::Screen;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

/// Redraw rate while the breathing circle is easing between sizes.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// How often the input thread re-checks the shutdown flag.
const INPUT_POLL: Duration = Duration::from_millis(50);

pub async fn run(config: Config, initial: Screen) -> io::Result<()> {
    let shutdown = Shutdown::new();
    let (mut terminal, guard) = setup_terminal()?;
    let (tx, mut rx) = events::channel();

    let input = spawn_input_reader(tx.clone(), shutdown.clone(), INPUT_POLL);
    spawn_signal_listener(tx.clone(), shutdown.clone());

    let mut app = App::new(&config, tx, initial);
    app.start();

    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        tokio::select! {
            event = rx.recv() => match event {
                Some(event) => app.handle_event(event),
                None => break Ok(()),
            },
            _ = frames.tick(), if app.is_animating(Instant::now()) => {}
        }
    };

    // Timers first, so nothing posts into the channel while input winds down.
    if shutdown.trigger() {
        tracing::info!("shutting down");
    }
    app.request_quit();
    if app.has_active_timer() {
        tracing::warn!("timer still held after quit");
    }
    if input.join().is_err() {
        tracing::warn!("input thread panicked");
    }
    drop(guard);
    result
}
