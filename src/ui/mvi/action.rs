//! Base trait for actions in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User interactions (button taps, key presses)
/// - System events (dialog dismissed by the host, timers)
///
/// Actions are sent to a store and processed by reducers to produce new
/// states. They are `Clone` because an alert keeps a copy of the action
/// each button sends.
pub trait Action: Clone + Debug + 'static {}
