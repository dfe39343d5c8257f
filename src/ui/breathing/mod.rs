//! Breathing circle.
//!
//! Each tick grows the circle by one step while breathing in and shrinks it
//! while breathing out. Reaching a bound does not move the circle: that tick
//! is spent flipping the phase, so the wave pauses for one tick at 0 and at
//! the maximum.
//!
//! Uses MVI:
//! - `state.rs` - phase, size and cadence
//! - `intent.rs` - Begin, Tick, Stop
//! - `reducer.rs` - the per-tick rule
//! - `controller.rs` - periodic timer, display tween, cancel signal

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::BreathingController;
pub use intent::BreathingIntent;
pub use reducer::BreathingReducer;
pub use state::{BreathingState, Cadence, Phase};
