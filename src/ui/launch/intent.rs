use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchIntent {
    /// Screen became visible; the delay starts now.
    Begin,
    /// The one-shot delay fired.
    DelayElapsed,
}

impl Intent for LaunchIntent {}
