//! Hand configuration types.
//!
//! The hand is configured at startup with a `HandConfig`:
//! - timing of the opening deal and of replacements
//! - hand capacity and slot layout on the dashboard
//! - staging layout for freshly drawn cards
//! - the field layers that accept placements
//!
//! Defaults match the shipped game tuning.

use serde::{Deserialize, Serialize};

use bevy_math::{Vec2, Vec3};

/// Hand position identifier. Stable for the lifetime of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u8);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the slot position as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all slot IDs of a hand with `capacity` slots.
    pub fn all(capacity: usize) -> impl Iterator<Item = SlotId> {
        (0..capacity.min(u8::MAX as usize) as u8).map(SlotId)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// A single collision layer (0-31).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layer(pub u8);

impl Layer {
    /// Layer the playing field geometry lives on.
    pub const PLAYING_FIELD: Layer = Layer(8);

    /// Create a new layer.
    #[must_use]
    pub const fn new(layer: u8) -> Self {
        Self(layer)
    }
}

/// Bit set of layers a ray may hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Mask that hits nothing.
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask containing a single layer.
    #[must_use]
    pub const fn of(layer: Layer) -> Self {
        Self(1 << (layer.0 as u32 & 31))
    }

    /// Add a layer to the mask.
    #[must_use]
    pub const fn with(self, layer: Layer) -> Self {
        Self(self.0 | Self::of(layer).0)
    }

    /// Check whether the mask contains a layer.
    #[must_use]
    pub const fn contains(self, layer: Layer) -> bool {
        self.0 & Self::of(layer).0 != 0
    }
}

/// Complete hand configuration.
///
/// All delays are in seconds of timeline time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandConfig {
    /// Number of hand slots.
    pub capacity: usize,

    /// Delay before each draw of the opening deal.
    pub initial_draw_delay: f32,

    /// Delay between a draw and its promotion during the opening deal.
    pub initial_promote_delay: f32,

    /// Delay before a used card's replacement is drawn.
    ///
    /// Deliberately slower than the opening deal.
    pub replace_delay: f32,

    /// Delay between a replacement draw and its promotion.
    pub replace_promote_delay: f32,

    /// Horizontal distance between slot anchors.
    pub slot_spacing: f32,

    /// Horizontal margin added to every slot anchor.
    pub slot_margin: f32,

    /// Offset added to every placement and preview point.
    pub creation_offset: Vec3,

    /// Duration handed to the move-to effect.
    pub move_duration: f32,

    /// Scale of a drawn card waiting in staging.
    pub staged_scale: f32,

    /// Where a drawn card first appears.
    pub staging_origin: Vec2,

    /// Where a drawn card waits to be promoted.
    pub staging_position: Vec2,

    /// Layers that accept placements.
    pub field_mask: LayerMask,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            capacity: 3,
            initial_draw_delay: 0.8,
            initial_promote_delay: 0.4,
            replace_delay: 3.0,
            replace_promote_delay: 0.2,
            slot_spacing: 210.0,
            slot_margin: 20.0,
            creation_offset: Vec3::new(0.0, 0.0, 1.0),
            move_duration: 0.25,
            staged_scale: 0.7,
            staging_origin: Vec2::new(180.0, -300.0),
            staging_position: Vec2::new(180.0, 0.0),
            field_mask: LayerMask::of(Layer::PLAYING_FIELD),
        }
    }
}

impl HandConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the opening deal timing (draw delay, promote delay).
    #[must_use]
    pub fn with_initial_delays(mut self, draw: f32, promote: f32) -> Self {
        self.initial_draw_delay = draw;
        self.initial_promote_delay = promote;
        self
    }

    /// Set the replacement timing (draw delay, promote delay).
    #[must_use]
    pub fn with_replace_delays(mut self, draw: f32, promote: f32) -> Self {
        self.replace_delay = draw;
        self.replace_promote_delay = promote;
        self
    }

    /// Set the slot layout.
    #[must_use]
    pub fn with_slot_layout(mut self, spacing: f32, margin: f32) -> Self {
        self.slot_spacing = spacing;
        self.slot_margin = margin;
        self
    }

    /// Set the placement creation offset.
    #[must_use]
    pub fn with_creation_offset(mut self, offset: Vec3) -> Self {
        self.creation_offset = offset;
        self
    }

    /// Set the layers that accept placements.
    #[must_use]
    pub fn with_field_mask(mut self, mask: LayerMask) -> Self {
        self.field_mask = mask;
        self
    }

    /// Resting screen position of a slot: `spacing * (position + 1) + margin`.
    #[must_use]
    pub fn slot_position(&self, slot: SlotId) -> Vec2 {
        Vec2::new(
            self.slot_spacing * (slot.index() as f32 + 1.0) + self.slot_margin,
            0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id() {
        let id = SlotId::new(2);
        assert_eq!(id.index(), 2);
        assert_eq!(format!("{}", id), "Slot(2)");

        let all: Vec<_> = SlotId::all(3).collect();
        assert_eq!(all, vec![SlotId(0), SlotId(1), SlotId(2)]);
    }

    #[test]
    fn test_layer_mask() {
        let mask = LayerMask::of(Layer::PLAYING_FIELD).with(Layer::new(2));
        assert!(mask.contains(Layer::PLAYING_FIELD));
        assert!(mask.contains(Layer::new(2)));
        assert!(!mask.contains(Layer::new(0)));
        assert!(!LayerMask::NONE.contains(Layer::PLAYING_FIELD));
    }

    #[test]
    fn test_defaults() {
        let config = HandConfig::default();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.initial_draw_delay, 0.8);
        assert_eq!(config.initial_promote_delay, 0.4);
        assert_eq!(config.replace_delay, 3.0);
        assert_eq!(config.replace_promote_delay, 0.2);
        assert_eq!(config.creation_offset, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_slot_position() {
        let config = HandConfig::default();
        assert_eq!(config.slot_position(SlotId(0)), Vec2::new(230.0, 0.0));
        assert_eq!(config.slot_position(SlotId(2)), Vec2::new(650.0, 0.0));

        let config = config.with_slot_layout(100.0, 0.0);
        assert_eq!(config.slot_position(SlotId(1)), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_builder() {
        let config = HandConfig::new()
            .with_capacity(4)
            .with_initial_delays(0.5, 0.1)
            .with_replace_delays(2.0, 0.3)
            .with_creation_offset(Vec3::ZERO);

        assert_eq!(config.capacity, 4);
        assert_eq!(config.initial_draw_delay, 0.5);
        assert_eq!(config.replace_promote_delay, 0.3);
        assert_eq!(config.creation_offset, Vec3::ZERO);
    }

    #[test]
    fn test_config_serde_partial() {
        let json = r#"{ "capacity": 4, "replace_delay": 1.5 }"#;
        let config: HandConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.capacity, 4);
        assert_eq!(config.replace_delay, 1.5);
        assert_eq!(config.initial_draw_delay, 0.8);
    }

    #[test]
    fn test_config_serde_vectors() {
        let json = r#"{ "creation_offset": [0.0, 0.5, 2.0], "staging_origin": [10.0, -20.0] }"#;
        let config: HandConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.creation_offset, Vec3::new(0.0, 0.5, 2.0));
        assert_eq!(config.staging_origin, Vec2::new(10.0, -20.0));

        let round_trip: HandConfig =
            serde_json::from_str(&serde_json::to_string(&HandConfig::default()).unwrap()).unwrap();
        assert_eq!(round_trip, HandConfig::default());
    }
}
