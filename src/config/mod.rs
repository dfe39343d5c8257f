//! Read-only startup configuration.
//!
//! Loaded once from `~/.config/breathe/config.toml` (or `--config`), then
//! overridden by CLI flags. Nothing is ever written back.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    BreathingConfig, Config, TimingConfig, MAX_COUNTDOWN_FROM, MAX_LAUNCH_UNITS, MAX_TIME_UNIT_MS,
};
