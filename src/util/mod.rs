//! Shared utilities.

/// Wall-clock frame stamping for hosts without their own frame time.
pub mod frame_timing;
