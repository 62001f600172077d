//! Crate-level error types.

use std::fmt;

/// Errors produced by the pointer-gestures crate.
#[derive(Debug)]
pub enum GestureError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Replay trace parsing failure.
    TraceParse(String),
    /// A second component was installed into an occupied scene slot.
    DuplicateInstance {
        /// Type name of the rejected component.
        component: &'static str,
    },
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::TraceParse(msg) => write!(f, "trace parse error: {msg}"),
            Self::DuplicateInstance { component } => write!(
                f,
                "only 1 instance of {component} can exist per scene"
            ),
        }
    }
}

impl std::error::Error for GestureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GestureError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
