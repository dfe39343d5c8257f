use crate::ui::mvi::UiState;

/// The three mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Launch,
    StartExercise,
    Breathing,
}

impl UiState for Screen {}
