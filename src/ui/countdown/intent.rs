use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownIntent {
    /// User pressed "start exercise".
    Start { from: u32 },
    /// One time-unit elapsed.
    Tick,
    /// Start screen (re)entered.
    Reset,
}

impl Intent for CountdownIntent {}
