//! Pointer and gesture options with TOML preset support.
//!
//! These are the values a host's tooling sets rather than code: hit-test
//! reach and layer mask, and the gesture thresholds. Options serialize
//! to/from TOML so a scene can ship its own preset.

mod gestures;
mod pointer;

use std::path::Path;

pub use gestures::GestureOptions;
pub use pointer::PointerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GestureError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gestures]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Hit-test reach and target filter.
    pub pointer: PointerOptions,
    /// Gesture thresholds.
    pub gestures: GestureOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, GestureError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| GestureError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check reach and thresholds are usable.
    pub fn validate(&self) -> Result<(), GestureError> {
        self.pointer.validate()?;
        self.gestures.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GestureError> {
        let content = std::fs::read_to_string(path).map_err(GestureError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GestureError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GestureError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GestureError::Io)?;
        }
        std::fs::write(path, content).map_err(GestureError::Io)
    }
}
