use crate::ui::mvi::Intent;

/// Signals emitted by screen controllers. Each one drives a single edge of
/// the navigation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The launch splash delay elapsed.
    LaunchComplete,
    /// The countdown reached zero.
    CountdownComplete,
    /// The user stopped the breathing exercise.
    BreathingCancelled,
}

impl Intent for Signal {}
