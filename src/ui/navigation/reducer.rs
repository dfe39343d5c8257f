use crate::ui::mvi::Reducer;

use super::intent::Signal;
use super::state::Screen;

/// Applies a signal only on the screen that can emit it; anything else is a
/// late or stray signal and leaves the screen unchanged.
pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = Screen;
    type Intent = Signal;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (Screen::Launch, Signal::LaunchComplete) => Screen::StartExercise,
            (Screen::StartExercise, Signal::CountdownComplete) => Screen::Breathing,
            (Screen::Breathing, Signal::BreathingCancelled) => Screen::StartExercise,
            (other, _) => other,
        }
    }
}
