//! Top-level screen routing.
//!
//! Launch ──LaunchComplete──→ StartExercise ──CountdownComplete──→ Breathing
//!                                  ↑                                 │
//!                                  └──────BreathingCancelled─────────┘

mod intent;
mod reducer;
mod state;

pub use intent::Signal;
pub use reducer::NavigationReducer;
pub use state::Screen;
