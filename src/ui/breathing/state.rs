use crate::config::BreathingConfig;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Expanding.
    #[default]
    In,
    /// Contracting.
    Out,
}

/// Step size and upper bound of the circle diameter.
///
/// `max` is a multiple of `step` (enforced by config validation), so both
/// bounds are reached exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub step: u32,
    pub max: u32,
}

impl Default for Cadence {
    fn default() -> Self {
        Self { step: 48, max: 240 }
    }
}

impl Cadence {
    /// Fraction of `max` covered by `diameter`, clamped to `[0, 1]`.
    pub fn fill_ratio(&self, diameter: f64) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        (diameter / f64::from(self.max)).clamp(0.0, 1.0)
    }
}

impl From<&BreathingConfig> for Cadence {
    fn from(config: &BreathingConfig) -> Self {
        Self {
            step: config.step,
            max: config.max_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreathingState {
    pub phase: Phase,
    /// Circle diameter, always within `0..=cadence.max`.
    pub size: u32,
    pub cadence: Cadence,
    /// False once stopped; ticks no longer apply.
    pub active: bool,
}

impl UiState for BreathingState {}

impl BreathingState {
    pub fn new(cadence: Cadence) -> Self {
        Self {
            phase: Phase::In,
            size: 0,
            cadence,
            active: true,
        }
    }
}
