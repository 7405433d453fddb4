//! Base trait for intents (user and system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (moving focus, confirming, closing)
/// - System events (a locale change reported by the store)
/// - Loading a fresh snapshot into a view
///
/// Reducers consume intents to produce new states.
pub trait Intent: Send + 'static {}
