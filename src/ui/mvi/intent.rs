//! Marker trait for intents.

/// Something that happened: a timer tick, a key press, a navigation signal.
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
