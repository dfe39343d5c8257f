//! Marker trait for screen state.

/// Screen state: cheap to clone, comparable, with a well-defined initial
/// value so reducers can take it by value via `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
