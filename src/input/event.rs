use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Platform-agnostic mouse button identifier.
///
/// Gestures remember the button that opened them; a release only closes
/// the gesture when it carries the same button.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any further button, by host index.
    Other(u16),
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(index) => Self::Other(index),
        }
    }
}

/// Modifier keys held when a gesture begins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Modifiers {
    /// Either shift key.
    pub shift: bool,
    /// Either alt key.
    pub alt: bool,
    /// Either control key.
    pub control: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        control: false,
    };
}

#[cfg(feature = "winit")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            alt: state.alt_key(),
            control: state.control_key(),
        }
    }
}

/// Everything the host observed during one frame.
///
/// Button and key lists hold *edges*: a button appears in `pressed` only on
/// the frame it went down, and in `released` only on the frame it came up.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use pointer_gestures::input::{MouseButton, PointerFrame};
///
/// let frame = PointerFrame::new(0.5, Vec2::new(10.0, 20.0))
///     .with_pressed(MouseButton::Left);
/// assert_eq!(frame.pressed, vec![MouseButton::Left]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerFrame {
    /// Host time in seconds.
    pub time: f64,
    /// Pointer position in screen units.
    pub position: Vec2,
    /// Buttons that went down this frame, in arrival order.
    pub pressed: Vec<MouseButton>,
    /// Buttons that came up this frame, in arrival order.
    pub released: Vec<MouseButton>,
    /// Modifier state for this frame.
    pub modifiers: Modifiers,
    /// Key-down edges this frame, as `winit::keyboard::KeyCode` debug
    /// strings (`"KeyQ"`, `"Escape"`).
    pub keys: Vec<String>,
}

impl PointerFrame {
    /// A frame with no button, key, or modifier activity.
    #[must_use]
    pub fn new(time: f64, position: Vec2) -> Self {
        Self {
            time,
            position,
            ..Self::default()
        }
    }

    /// Add a button-down edge.
    #[must_use]
    pub fn with_pressed(mut self, button: MouseButton) -> Self {
        self.pressed.push(button);
        self
    }

    /// Add a button-up edge.
    #[must_use]
    pub fn with_released(mut self, button: MouseButton) -> Self {
        self.released.push(button);
        self
    }

    /// Replace the modifier state.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Add a key-down edge.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }
}
