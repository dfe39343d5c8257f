use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound for `time_unit_ms` (one minute).
pub const MAX_TIME_UNIT_MS: u64 = 60_000;

/// Upper bound for `launch_units`.
pub const MAX_LAUNCH_UNITS: u32 = 600;

/// Upper bound for `countdown_from`.
pub const MAX_COUNTDOWN_FROM: u32 = 3_600;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub breathing: BreathingConfig,
}

/// Timer settings shared by every screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Length of one time-unit in milliseconds (default: 1000).
    #[serde(default = "default_time_unit_ms")]
    pub time_unit_ms: u64,
    /// Launch splash duration in time-units (default: 3).
    #[serde(default = "default_launch_units")]
    pub launch_units: u32,
    /// Countdown start value (default: 3).
    #[serde(default = "default_countdown_from")]
    pub countdown_from: u32,
}

/// Breathing circle cadence and labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreathingConfig {
    /// Diameter change per tick (default: 48).
    #[serde(default = "default_step")]
    pub step: u32,
    /// Largest diameter; must be a multiple of `step` (default: 240).
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    #[serde(default = "default_inhale_label")]
    pub inhale_label: String,
    #[serde(default = "default_exhale_label")]
    pub exhale_label: String,
}

fn default_time_unit_ms() -> u64 {
    1000
}

fn default_launch_units() -> u32 {
    3
}

fn default_countdown_from() -> u32 {
    3
}

fn default_step() -> u32 {
    48
}

fn default_max_size() -> u32 {
    240
}

fn default_inhale_label() -> String {
    "breathe in slowly...".to_string()
}

fn default_exhale_label() -> String {
    "breathe out slowly...".to_string()
}

impl TimingConfig {
    /// Period of every tick.
    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    /// One-shot delay before the launch splash advances.
    ///
    /// Saturates instead of overflowing; `Config::validate` keeps real
    /// configs far below that.
    pub fn launch_delay(&self) -> Duration {
        self.time_unit().saturating_mul(self.launch_units)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: default_time_unit_ms(),
            launch_units: default_launch_units(),
            countdown_from: default_countdown_from(),
        }
    }
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            max_size: default_max_size(),
            inhale_label: default_inhale_label(),
            exhale_label: default_exhale_label(),
        }
    }
}
