//! Launch splash.
//!
//! Shows the title for a fixed delay, then signals `LaunchComplete` once.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::LaunchController;
pub use intent::LaunchIntent;
pub use reducer::LaunchReducer;
pub use state::LaunchState;
