//! End-to-end screen flow with paused tokio time.

mod common;

use breathe::ui::breathing::Phase;
use breathe::ui::countdown::CountdownState;
use breathe::ui::navigation::Screen;
use common::Harness;
use crossterm::event::KeyCode;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn launch_advances_after_three_units() {
    let mut h = Harness::default_at(Screen::Launch);
    let started = Instant::now();
    assert_eq!(h.app.screen(), Screen::Launch);

    h.step().await;
    assert_eq!(h.app.screen(), Screen::StartExercise);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(3));
    assert!(elapsed < Duration::from_secs(4));

    assert_eq!(h.app.countdown_state(), CountdownState::Idle);
    assert!(!h.app.has_active_timer());
    assert!(h.is_quiet_for(Duration::from_secs(30)).await);
}

#[tokio::test(start_paused = true)]
async fn full_scenario_trace() {
    let mut h = Harness::default_at(Screen::Launch);
    h.step().await;
    assert_eq!(h.app.screen(), Screen::StartExercise);

    h.app.start_countdown();
    assert_eq!(h.app.countdown_state(), CountdownState::Counting { remaining: 3 });
    h.step().await;
    assert_eq!(h.app.countdown_state(), CountdownState::Counting { remaining: 2 });
    h.step().await;
    assert_eq!(h.app.countdown_state(), CountdownState::Counting { remaining: 1 });
    assert_eq!(h.app.screen(), Screen::StartExercise);
    h.step().await;
    assert_eq!(h.app.screen(), Screen::Breathing);

    let state = h.app.breathing_state();
    assert_eq!((state.size, state.phase), (0, Phase::In));
    assert_eq!(h.app.breath_label(), "breathe in slowly...");

    for expected in [48, 96, 144, 192, 240] {
        h.step().await;
        let state = h.app.breathing_state();
        assert_eq!(state.size, expected);
        assert_eq!(state.phase, Phase::In);
    }

    h.step().await;
    let state = h.app.breathing_state();
    assert_eq!(state.size, 240);
    assert_eq!(state.phase, Phase::Out);
    assert_eq!(h.app.breath_label(), "breathe out slowly...");
}

#[tokio::test(start_paused = true)]
async fn countdown_never_completes_before_third_tick() {
    let mut h = Harness::default_at(Screen::StartExercise);
    h.app.start_countdown();
    for _ in 0..2 {
        h.step().await;
        assert_eq!(h.app.screen(), Screen::StartExercise);
    }
    h.step().await;
    assert_eq!(h.app.screen(), Screen::Breathing);
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_ticks_and_returns_to_start() {
    let mut h = Harness::default_at(Screen::Breathing);
    h.steps(3).await;
    assert_eq!(h.app.breathing_state().size, 144);

    h.app.stop_breathing();
    assert_eq!(h.app.screen(), Screen::StartExercise);
    assert_eq!(h.app.countdown_state(), CountdownState::Idle);
    let frozen = h.app.breathing_state();
    assert!(!frozen.active);

    assert!(h.is_quiet_for(Duration::from_secs(30)).await);
    assert_eq!(h.app.breathing_state(), frozen);
}

#[tokio::test(start_paused = true)]
async fn stop_breathing_twice_is_idempotent() {
    let mut h = Harness::default_at(Screen::Breathing);
    h.step().await;

    h.app.stop_breathing();
    let after_first = (h.app.screen(), h.app.breathing_state(), h.app.countdown_state());
    h.app.stop_breathing();
    let after_second = (h.app.screen(), h.app.breathing_state(), h.app.countdown_state());
    assert_eq!(after_first, after_second);
}

#[tokio::test(start_paused = true)]
async fn tick_queued_before_cancel_is_discarded() {
    let mut h = Harness::default_at(Screen::Breathing);
    let queued = h.next_event().await;

    h.app.stop_breathing();
    h.app.handle_event(queued);
    assert_eq!(h.app.breathing_state().size, 0);
    assert_eq!(h.app.countdown_state(), CountdownState::Idle);
}

#[tokio::test(start_paused = true)]
async fn restart_after_cancel_begins_fresh() {
    let mut h = Harness::default_at(Screen::Breathing);
    h.steps(4).await;
    h.app.stop_breathing();

    h.app.start_countdown();
    h.steps(3).await;
    assert_eq!(h.app.screen(), Screen::Breathing);
    let state = h.app.breathing_state();
    assert_eq!((state.size, state.phase, state.active), (0, Phase::In, true));
}

#[tokio::test(start_paused = true)]
async fn keys_drive_the_buttons() {
    let mut h = Harness::default_at(Screen::StartExercise);
    h.press(KeyCode::Enter);
    assert!(h.app.countdown_state().is_counting());

    h.steps(3).await;
    assert_eq!(h.app.screen(), Screen::Breathing);

    h.press(KeyCode::Esc);
    assert_eq!(h.app.screen(), Screen::StartExercise);

    h.press(KeyCode::Char('q'));
    assert!(h.app.should_quit());
    assert!(!h.app.has_active_timer());
}

#[tokio::test(start_paused = true)]
async fn keys_on_launch_do_not_skip_the_delay() {
    let mut h = Harness::default_at(Screen::Launch);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Esc);
    assert_eq!(h.app.screen(), Screen::Launch);
    h.step().await;
    assert_eq!(h.app.screen(), Screen::StartExercise);
}

#[tokio::test(start_paused = true)]
async fn quitting_mid_countdown_releases_the_timer() {
    let mut h = Harness::default_at(Screen::StartExercise);
    h.app.start_countdown();
    h.step().await;

    h.app.request_quit();
    assert!(!h.app.has_active_timer());
    assert!(h.is_quiet_for(Duration::from_secs(30)).await);
}

#[tokio::test(start_paused = true)]
async fn shutdown_event_quits() {
    let mut h = Harness::default_at(Screen::Breathing);
    h.app.handle_event(breathe::ui::events::AppEvent::Shutdown);
    assert!(h.app.should_quit());
    assert!(h.is_quiet_for(Duration::from_secs(5)).await);
}
