//! Input handling: per-frame host input, the key-watch extension point,
//! and the component that turns frames into pointer notifications.

/// The per-frame pointer component.
pub mod behaviour;
/// Platform-agnostic input types.
pub mod event;
/// Key-edge extension hook.
pub mod keys;

pub use behaviour::{MouseBehaviour, PointerEvent};
pub use event::{Modifiers, MouseButton, PointerFrame};
pub use keys::KeyWatcher;
