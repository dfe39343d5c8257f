//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └──── timers / key presses ─────┘
//! ```
//!
//! Reducers never touch timers or the terminal; controllers wrap them and
//! own the side effects.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
