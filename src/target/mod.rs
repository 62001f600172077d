//! Tracking which object is under the pointer.
//!
//! The tracker only decides *whether* the target changed. Dispatching the
//! resulting leave/enter notifications is done by
//! [`MouseBehaviour`](crate::input::MouseBehaviour), always leave first.

mod callbacks;

pub use callbacks::{CallbackId, TargetCallbacks};

/// Messages a target receives when the pointer moves onto or off it.
///
/// Propagating a message to parents or children is the target's own
/// business; the tracker only ever calls the hit object.
pub trait PointerTarget {
    /// The pointer moved onto this target.
    fn pointer_entered(&self) {}
    /// The pointer moved off this target.
    fn pointer_left(&self) {}
}

/// A change of hovered target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTransition<T> {
    /// Target the pointer moved off, if there was one.
    pub left: Option<T>,
    /// Target the pointer moved onto, if there is one.
    pub entered: Option<T>,
}

/// Current and previous hovered targets.
#[derive(Debug, Clone)]
pub struct TargetTracker<T> {
    current: Option<T>,
    last: Option<T>,
}

impl<T> Default for TargetTracker<T> {
    fn default() -> Self {
        Self {
            current: None,
            last: None,
        }
    }
}

impl<T: Clone + PartialEq> TargetTracker<T> {
    /// Tracker with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target currently under the pointer.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Target hovered before the current one.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Feed this frame's hit. Returns the transition if the target changed.
    pub fn update(&mut self, hit: Option<T>) -> Option<TargetTransition<T>> {
        if hit == self.current {
            return None;
        }
        let left = std::mem::replace(&mut self.current, hit.clone());
        self.last.clone_from(&left);
        Some(TargetTransition { left, entered: hit })
    }
}
