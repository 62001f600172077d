//! Hit testing: the raycast seam a host implements, layer masks, and a
//! small collider set for hosts without a physics engine.

mod colliders;
mod layer_mask;

pub use colliders::{Collider, ColliderHandle, ColliderSet};
use glam::Vec2;
pub use layer_mask::LayerMask;

/// Finds the nearest eligible object under a screen position.
///
/// Implementations cast from the camera through `position` and return the
/// first hit no farther than `max_distance` whose layer is in `mask`.
///
/// Closures work as raycasters:
///
/// ```
/// use glam::Vec2;
/// use pointer_gestures::picking::{LayerMask, Raycaster};
///
/// let always = |_: Vec2, _: f32, _: LayerMask| Some(7_u32);
/// assert_eq!(always.raycast(Vec2::ZERO, 1.0, LayerMask::ALL), Some(7));
/// ```
pub trait Raycaster<T> {
    /// Nearest eligible hit, or `None`.
    fn raycast(&self, position: Vec2, max_distance: f32, mask: LayerMask)
        -> Option<T>;
}

impl<T, F> Raycaster<T> for F
where
    F: Fn(Vec2, f32, LayerMask) -> Option<T>,
{
    fn raycast(
        &self,
        position: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<T> {
        self(position, max_distance, mask)
    }
}
