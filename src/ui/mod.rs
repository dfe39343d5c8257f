//! Terminal UI: screens, event loop and rendering.
//!
//! # Architecture
//!
//! - `navigation` - which screen is visible (Launch / StartExercise / Breathing)
//! - `launch`, `countdown`, `breathing` - one MVI feature module per screen,
//!   each with a controller that owns that screen's single timer
//! - `app` - routes events to the visible screen and applies navigation
//! - `runtime` - the single-threaded event loop

pub mod animation;
pub mod app;
pub mod backdrop;
pub mod breathing;
pub mod circle;
pub mod countdown;
pub mod events;
pub mod footer;
pub mod input;
pub mod launch;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
