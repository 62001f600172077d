//! Gesture classification: the single-pointer click / double-click / hold /
//! drag state machine and the gesture record it maintains.

/// Per-frame classifier and its notifications.
pub mod classifier;
/// Gesture record and phase.
pub mod state;

pub use classifier::{GestureClassifier, GestureEvent, GestureEventKind};
pub use state::{Gesture, GestureKind, GesturePhase};

/// Default double-click window, in seconds.
pub const DEFAULT_DOUBLE_CLICK_WINDOW: f64 = 0.2;
/// Default hold threshold, in seconds.
pub const DEFAULT_HOLD_THRESHOLD: f64 = 0.2;
/// Default drag threshold, in pointer units.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 2.0;
