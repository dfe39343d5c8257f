use crate::ui::mvi::Reducer;

use super::intent::BreathingIntent;
use super::state::{BreathingState, Phase};

pub struct BreathingReducer;

impl Reducer for BreathingReducer {
    type State = BreathingState;
    type Intent = BreathingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BreathingIntent::Begin { cadence } => BreathingState::new(cadence),
            BreathingIntent::Stop => BreathingState {
                active: false,
                ..state
            },
            BreathingIntent::Tick if !state.active => state,
            BreathingIntent::Tick => {
                let BreathingState {
                    phase,
                    size,
                    cadence,
                    ..
                } = state;
                match phase {
                    Phase::In if size < cadence.max => BreathingState {
                        size: (size + cadence.step).min(cadence.max),
                        ..state
                    },
                    Phase::In => BreathingState {
                        phase: Phase::Out,
                        ..state
                    },
                    Phase::Out if size > 0 => BreathingState {
                        size: size.saturating_sub(cadence.step),
                        ..state
                    },
                    Phase::Out => BreathingState {
                        phase: Phase::In,
                        ..state
                    },
                }
            }
        }
    }
}
