use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{LayerMask, Raycaster};
use crate::target::PointerTarget;

/// A screen-aligned pickable rectangle at some distance from the camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Name reported in hits.
    pub name: String,
    /// Lower-left corner in screen units.
    pub min: Vec2,
    /// Upper-right corner in screen units.
    pub max: Vec2,
    /// Distance from the camera.
    pub depth: f32,
    /// Layer index (0-31).
    #[serde(default)]
    pub layer: u8,
}

impl Collider {
    /// Whether `point` lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Handle to a collider in a [`ColliderSet`], returned by hits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColliderHandle {
    /// Position in the set.
    pub index: usize,
    /// Collider name.
    pub name: String,
}

impl PointerTarget for ColliderHandle {
    fn pointer_entered(&self) {
        log::debug!("pointer entered '{}'", self.name);
    }

    fn pointer_left(&self) {
        log::debug!("pointer left '{}'", self.name);
    }
}

/// Flat list of colliders, ray-tested front to back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColliderSet {
    colliders: Vec<Collider>,
}

impl ColliderSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collider and return its handle.
    pub fn insert(&mut self, collider: Collider) -> ColliderHandle {
        let handle = ColliderHandle {
            index: self.colliders.len(),
            name: collider.name.clone(),
        };
        self.colliders.push(collider);
        handle
    }

    /// Number of colliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Iterate colliders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }
}

impl From<Vec<Collider>> for ColliderSet {
    fn from(colliders: Vec<Collider>) -> Self {
        Self { colliders }
    }
}

impl Raycaster<ColliderHandle> for ColliderSet {
    /// Nearest collider under `position`; on equal depth the earlier one
    /// wins.
    fn raycast(
        &self,
        position: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<ColliderHandle> {
        let mut best: Option<(usize, &Collider)> = None;
        for (index, collider) in self.colliders.iter().enumerate() {
            if collider.depth > max_distance
                || !mask.contains(collider.layer)
                || !collider.contains(position)
            {
                continue;
            }
            if best.is_none_or(|(_, b)| collider.depth < b.depth) {
                best = Some((index, collider));
            }
        }
        best.map(|(index, collider)| ColliderHandle {
            index,
            name: collider.name.clone(),
        })
    }
}
