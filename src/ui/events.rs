use crossterm::event::{self, Event, KeyEvent};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::shutdown::Shutdown;
use crate::timer::TimerId;

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// A scoped timer fired. Ignored unless its owner still holds `id`.
    TimerFired { id: TimerId },
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Read terminal input on a dedicated thread and forward it to the loop.
///
/// Polls with a short timeout so the shutdown flag is observed promptly.
pub fn spawn_input_reader(
    tx: EventSender,
    shutdown: Shutdown,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        if shutdown.is_triggered() || tx.is_closed() {
            break;
        }

        match event::poll(poll_interval) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                tracing::error!(error = %err, "terminal poll failed");
                break;
            }
        }

        let forwarded = match event::read() {
            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "terminal read failed");
                break;
            }
        };
        if forwarded.is_err() {
            break;
        }
    })
}

/// Post [`AppEvent::Shutdown`] when the process receives SIGINT or SIGTERM.
pub fn spawn_signal_listener(tx: EventSender, shutdown: Shutdown) {
    tokio::spawn(async move {
        tokio::select! {
            _ = wait_for_signal() => {
                tracing::info!("termination signal received");
                shutdown.trigger();
                let _ = tx.send(AppEvent::Shutdown);
            }
            _ = shutdown.wait() => {}
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let Ok(mut terminate) = signal(SignalKind::terminate()) else {
        let _ = tokio::signal::ctrl_c().await;
        return;
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
