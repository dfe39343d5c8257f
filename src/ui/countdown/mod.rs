//! Start screen countdown.
//!
//! Uses MVI:
//! - `state.rs` - `Idle → Counting(n) → Done`
//! - `intent.rs` - Start, Tick, Reset
//! - `reducer.rs` - transitions (pure, no timers)
//! - `controller.rs` - owns the periodic tick timer

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::CountdownController;
pub use intent::CountdownIntent;
pub use reducer::CountdownReducer;
pub use state::CountdownState;
