//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to derive the next state)
/// - Self-contained (everything needed to render the view)
/// - Comparable (PartialEq to detect changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
