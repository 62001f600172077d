use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GestureError;
use crate::gesture::{
    DEFAULT_DOUBLE_CLICK_WINDOW, DEFAULT_DRAG_THRESHOLD,
    DEFAULT_HOLD_THRESHOLD,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Thresholds gating double-click, hold and drag classification.
pub struct GestureOptions {
    /// Max seconds between a gesture closing and the next press for the
    /// press to count as a double-click.
    #[schemars(title = "Double-Click Window", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub double_click_window: f64,
    /// Seconds a press must last before it becomes a hold.
    #[schemars(title = "Hold Threshold", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub hold_threshold: f64,
    /// Pointer travel from the press position before it becomes a drag.
    #[schemars(title = "Drag Threshold", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub drag_threshold: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            double_click_window: DEFAULT_DOUBLE_CLICK_WINDOW,
            hold_threshold: DEFAULT_HOLD_THRESHOLD,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl GestureOptions {
    /// Reject thresholds that would misclassify every press: negative or
    /// non-finite values.
    pub fn validate(&self) -> Result<(), GestureError> {
        let checks = [
            ("double_click_window", self.double_click_window),
            ("hold_threshold", self.hold_threshold),
            ("drag_threshold", f64::from(self.drag_threshold)),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(GestureError::OptionsParse(format!(
                    "gestures.{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}
