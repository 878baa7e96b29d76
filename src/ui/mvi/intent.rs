//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button activations, key presses)
/// - System events (settled network calls, timers)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
