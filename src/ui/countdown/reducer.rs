use crate::ui::mvi::Reducer;

use super::intent::CountdownIntent;
use super::state::CountdownState;

pub struct CountdownReducer;

impl Reducer for CountdownReducer {
    type State = CountdownState;
    type Intent = CountdownIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CountdownIntent::Start { from } => match state {
                CountdownState::Idle => CountdownState::Counting {
                    remaining: from.max(1),
                },
                // Already counting or finished: a second press is ignored.
                other => other,
            },
            CountdownIntent::Tick => match state {
                CountdownState::Counting { remaining } if remaining > 1 => {
                    CountdownState::Counting {
                        remaining: remaining - 1,
                    }
                }
                CountdownState::Counting { .. } => CountdownState::Done,
                other => other,
            },
            CountdownIntent::Reset => CountdownState::Idle,
        }
    }
}
