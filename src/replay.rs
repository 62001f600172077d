//! Scripted pointer traces.
//!
//! A trace is a TOML document with the options, a collider scene, and the
//! frames a host would have produced:
//!
//! ```toml
//! [options.gestures]
//! hold_threshold = 0.2
//!
//! [[colliders]]
//! name = "crate"
//! min = [0.0, 0.0]
//! max = [10.0, 10.0]
//! depth = 5.0
//!
//! [[frames]]
//! time = 0.0
//! position = [1.0, 1.0]
//! pressed = ["left"]
//! ```
//!
//! Replaying it drives a [`MouseBehaviour`] frame by frame and records
//! everything it emits.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GestureError;
use crate::input::{MouseBehaviour, PointerEvent, PointerFrame};
use crate::options::Options;
use crate::picking::{ColliderHandle, ColliderSet};

/// Options, scene, and frames for one replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trace {
    /// Component options.
    pub options: Options,
    /// Pickable scene.
    pub colliders: ColliderSet,
    /// Frames in time order.
    pub frames: Vec<PointerFrame>,
}

/// One emitted notification and the frame time it fired on.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayRecord {
    /// Frame time.
    pub time: f64,
    /// What fired.
    pub event: PointerEvent<ColliderHandle>,
}

impl Trace {
    /// Parse a trace from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, GestureError> {
        let trace: Self = toml::from_str(content)
            .map_err(|e| GestureError::TraceParse(e.to_string()))?;
        trace.validate()?;
        Ok(trace)
    }

    /// Load a trace from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GestureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Run every frame through a fresh component.
    #[must_use]
    pub fn run(&self) -> Vec<ReplayRecord> {
        let mut behaviour = MouseBehaviour::new(&self.options);
        let mut records = Vec::new();
        for frame in &self.frames {
            for event in behaviour.update(frame, &self.colliders) {
                log::debug!("{:.3}s: {event:?}", frame.time);
                records.push(ReplayRecord {
                    time: frame.time,
                    event,
                });
            }
        }
        records
    }

    fn validate(&self) -> Result<(), GestureError> {
        self.options.validate()?;
        for pair in self.frames.windows(2) {
            if pair[1].time < pair[0].time {
                return Err(GestureError::TraceParse(format!(
                    "frame at {}s follows frame at {}s",
                    pair[1].time, pair[0].time
                )));
            }
        }
        Ok(())
    }
}
