//! Guided breathing exercise for the terminal.
//!
//! The app walks through three screens: a launch splash, a start screen with
//! a short countdown, and an animated breathing circle. Each screen is a small
//! timer-driven state machine (see [`ui`]), fed by scoped timers from
//! [`timer`] through a single event channel.

pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod timer;
pub mod ui;
