use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bitmask over 32 collider layers.
///
/// Serializes as a plain integer so presets read `target_mask = 5`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct LayerMask(u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: Self = Self(0);
    /// Matches every layer.
    pub const ALL: Self = Self(u32::MAX);
    /// Number of addressable layers.
    pub const LAYERS: u8 = 32;

    /// Mask from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Mask matching a single layer. Layers past 31 match nothing.
    #[must_use]
    pub const fn layer(layer: u8) -> Self {
        if layer < Self::LAYERS {
            Self(1 << layer)
        } else {
            Self::NONE
        }
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether `layer` is in the mask.
    #[must_use]
    pub const fn contains(self, layer: u8) -> bool {
        layer < Self::LAYERS && self.0 & (1 << layer) != 0
    }

    /// This mask with `layer` added.
    #[must_use]
    pub const fn with(self, layer: u8) -> Self {
        Self(self.0 | Self::layer(layer).0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_layers() {
        let mask = LayerMask::layer(0).with(3);
        assert_eq!(mask.bits(), 0b1001);
        assert!(mask.contains(0));
        assert!(mask.contains(3));
        assert!(!mask.contains(1));
    }

    #[test]
    fn out_of_range_layers_never_match() {
        assert_eq!(LayerMask::layer(32), LayerMask::NONE);
        assert!(!LayerMask::ALL.contains(40));
        assert!(LayerMask::ALL.contains(31));
    }
}
