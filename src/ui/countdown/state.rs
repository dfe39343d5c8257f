use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownState {
    /// Showing the start button.
    #[default]
    Idle,
    /// Showing "ready in {remaining}".
    Counting { remaining: u32 },
    Done,
}

impl UiState for CountdownState {}

impl CountdownState {
    pub fn is_counting(&self) -> bool {
        matches!(self, Self::Counting { .. })
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn remaining(&self) -> Option<u32> {
        match self {
            Self::Counting { remaining } => Some(*remaining),
            _ => None,
        }
    }
}
