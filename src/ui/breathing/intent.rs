use crate::ui::mvi::Intent;

use super::state::Cadence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingIntent {
    /// Screen appeared: reset to `size = 0`, breathing in.
    Begin { cadence: Cadence },
    /// One time-unit elapsed.
    Tick,
    /// User pressed "stop exercise". Freezes the state.
    Stop,
}

impl Intent for BreathingIntent {}
