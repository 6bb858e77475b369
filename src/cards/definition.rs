//! Card definitions - static card data.
//!
//! A `CardDefinition` is the immutable template a hand card is drawn from:
//! which objects it places on the field and where each sits relative to the
//! drop point. Definitions are shared behind `Arc`; the hand only ever
//! references them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{HandError, Result, Vec3};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier of a visual prefab provided by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefabId(pub u32);

impl PrefabId {
    /// Create a new prefab ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// One object a card places on the field (a unit, a building, a spell area).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceableData {
    /// Name for debugging/display.
    pub name: String,

    /// Prefab shown while the card is dragged over the field.
    ///
    /// `None` means the asset was never wired up; loading a deck that
    /// contains such a placeable fails.
    pub preview_prefab: Option<PrefabId>,
}

impl PlaceableData {
    /// Create a placeable with a preview prefab.
    pub fn new(name: impl Into<String>, preview_prefab: PrefabId) -> Self {
        Self {
            name: name.into(),
            preview_prefab: Some(preview_prefab),
        }
    }

    /// Create a placeable that has no preview prefab assigned.
    pub fn without_prefab(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preview_prefab: None,
        }
    }
}

/// Static card definition.
///
/// `placeables[i]` is created at `drop_point + offsets[i]`, so both lists
/// must have the same length. The builder keeps them in lockstep;
/// deserialized definitions are checked with [`CardDefinition::validate`].
///
/// ## Example
///
/// ```
/// use royale_hand::cards::{CardDefinition, CardId, PlaceableData, PrefabId};
/// use royale_hand::core::Vec3;
///
/// let archers = CardDefinition::new(CardId::new(1), "Archers")
///     .with_placeable(PlaceableData::new("Archer", PrefabId::new(10)), Vec3::ZERO)
///     .with_placeable(PlaceableData::new("Archer", PrefabId::new(10)), Vec3::new(1.0, 0.0, 0.0));
///
/// assert_eq!(archers.placeable_count(), 2);
/// assert!(archers.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Objects placed when the card is played.
    pub placeables: SmallVec<[PlaceableData; 4]>,

    /// Position of each placeable relative to the drop point.
    pub offsets: SmallVec<[Vec3; 4]>,
}

impl CardDefinition {
    /// Create a card definition with no placeables.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            placeables: SmallVec::new(),
            offsets: SmallVec::new(),
        }
    }

    /// Add a placeable and its offset (builder pattern).
    #[must_use]
    pub fn with_placeable(mut self, placeable: PlaceableData, offset: Vec3) -> Self {
        self.placeables.push(placeable);
        self.offsets.push(offset);
        self
    }

    /// Number of placeables on this card.
    #[must_use]
    pub fn placeable_count(&self) -> usize {
        self.placeables.len()
    }

    /// Iterate over `(placeable, offset)` pairs.
    pub fn placements(&self) -> impl Iterator<Item = (&PlaceableData, Vec3)> {
        self.placeables.iter().zip(self.offsets.iter().copied())
    }

    /// Check that the definition is usable by the hand.
    ///
    /// Fails if the placeable and offset lists differ in length or if any
    /// placeable lacks its preview prefab.
    pub fn validate(&self) -> Result<()> {
        if self.placeables.len() != self.offsets.len() {
            return Err(HandError::OffsetMismatch {
                card: self.id,
                placeables: self.placeables.len(),
                offsets: self.offsets.len(),
            });
        }

        if let Some(missing) = self.placeables.iter().find(|p| p.preview_prefab.is_none()) {
            return Err(HandError::MissingAsset(format!(
                "preview prefab for '{}' on {}",
                missing.name, self.id
            )));
        }

        Ok(())
    }
}
