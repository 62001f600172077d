use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GestureError;
use crate::picking::LayerMask;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pointer", inline)]
#[serde(default)]
/// Hit-test reach and category filter.
pub struct PointerOptions {
    /// Farthest hit the raycast may return, in scene units.
    #[schemars(title = "Max Distance", range(min = 0.0))]
    pub max_distance: f32,
    /// Collider layers eligible as targets.
    #[schemars(title = "Target Mask")]
    pub target_mask: LayerMask,
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self {
            max_distance: 100.0,
            target_mask: LayerMask::ALL,
        }
    }
}

impl PointerOptions {
    /// Reject a negative or NaN reach. Infinite reach is allowed.
    pub fn validate(&self) -> Result<(), GestureError> {
        if self.max_distance.is_nan() || self.max_distance < 0.0 {
            return Err(GestureError::OptionsParse(format!(
                "pointer.max_distance must be non-negative (got {})",
                self.max_distance
            )));
        }
        Ok(())
    }
}
