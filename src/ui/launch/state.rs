use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchState {
    /// Screen not yet shown.
    #[default]
    Idle,
    /// Delay armed.
    Waiting,
    Complete,
}

impl UiState for LaunchState {}

impl LaunchState {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}
