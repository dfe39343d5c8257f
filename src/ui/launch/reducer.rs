use crate::ui::mvi::Reducer;

use super::intent::LaunchIntent;
use super::state::LaunchState;

pub struct LaunchReducer;

impl Reducer for LaunchReducer {
    type State = LaunchState;
    type Intent = LaunchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (intent, state) {
            (LaunchIntent::Begin, _) => LaunchState::Waiting,
            (LaunchIntent::DelayElapsed, LaunchState::Waiting) => LaunchState::Complete,
            // A delay that was never armed, or already consumed.
            (LaunchIntent::DelayElapsed, other) => other,
        }
    }
}
