//! Projection mode flags

use bitflags::bitflags;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Projection modes contributing to the composite view-projection.
    ///
    /// Any subset may be enabled at once. Enabled modes are folded together
    /// in [`Projections::COMPOSITION_ORDER`]; with no modes enabled the
    /// composite is the identity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Projections: u32 {
        /// Host-supplied custom matrix
        const CUSTOM = 1 << 0;

        /// Pixel space with the origin at the top-left corner, Y down
        const SPRITE_BATCH = 1 << 1;

        /// Origin at the screen center, X right, Y up
        const ORIGIN_CENTER_X_RIGHT_Y_UP = 1 << 2;

        /// Origin at the bottom-left corner, X right, Y up
        const ORIGIN_BOTTOM_LEFT_X_RIGHT_Y_UP = 1 << 3;
    }
}

impl Projections {
    /// Order in which enabled modes are folded into the composite.
    ///
    /// Each enabled mode's matrix left-multiplies the running product, so
    /// earlier entries apply to world points first.
    pub const COMPOSITION_ORDER: [Projections; 4] = [
        Projections::CUSTOM,
        Projections::SPRITE_BATCH,
        Projections::ORIGIN_CENTER_X_RIGHT_Y_UP,
        Projections::ORIGIN_BOTTOM_LEFT_X_RIGHT_Y_UP,
    ];
}

impl Default for Projections {
    fn default() -> Self {
        Projections::ORIGIN_CENTER_X_RIGHT_Y_UP | Projections::CUSTOM
    }
}

// Flags travel through config files as their raw bit pattern.
impl Serialize for Projections {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Projections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Projections::from_bits(bits)
            .ok_or_else(|| D::Error::custom(format!("unknown projection bits {bits:#x}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_centered_origin_and_custom() {
        let projections = Projections::default();
        assert!(projections.contains(Projections::ORIGIN_CENTER_X_RIGHT_Y_UP));
        assert!(projections.contains(Projections::CUSTOM));
        assert!(!projections.contains(Projections::SPRITE_BATCH));
        assert!(!projections.contains(Projections::ORIGIN_BOTTOM_LEFT_X_RIGHT_Y_UP));
    }

    #[test]
    fn composition_order_lists_every_mode_once() {
        let mut seen = Projections::empty();
        for mode in Projections::COMPOSITION_ORDER {
            assert!(!seen.intersects(mode));
            seen |= mode;
        }
        assert_eq!(seen, Projections::all());
    }

    #[test]
    fn custom_composes_before_the_orthographic_modes() {
        assert_eq!(Projections::COMPOSITION_ORDER[0], Projections::CUSTOM);
    }

    #[test]
    fn serializes_as_raw_bits() {
        let flags = Projections::CUSTOM | Projections::SPRITE_BATCH;
        assert_eq!(ron::to_string(&flags).unwrap(), "3");
        assert_eq!(ron::from_str::<Projections>("3").unwrap(), flags);
    }

    #[test]
    fn deserialize_rejects_unknown_bits() {
        assert!(ron::from_str::<Projections>("32").is_err());
    }
}
