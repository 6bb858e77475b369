//! Card instances - one drawn copy of a definition.
//!
//! A `CardInstance` is the on-screen card: it references its definition and
//! records where the dashboard shows it. The rendering layer animates
//! between positions; the instance stores the logical destination.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{SlotId, Vec2};

use super::definition::CardDefinition;

/// Unique identifier for a drawn card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Runtime card on the dashboard.
#[derive(Clone, Debug)]
pub struct CardInstance {
    /// Unique identifier for this copy.
    pub id: InstanceId,

    /// The definition this card was drawn from.
    pub definition: Arc<CardDefinition>,

    /// Hand position once promoted. `None` while staged.
    pub card_id: Option<SlotId>,

    /// Anchored screen position.
    pub position: Vec2,

    /// Uniform visual scale.
    pub scale: f32,

    /// Whether the card shows its "being placed" look.
    pub active: bool,
}

impl CardInstance {
    /// Create a freshly drawn card.
    #[must_use]
    pub fn new(id: InstanceId, definition: Arc<CardDefinition>, position: Vec2, scale: f32) -> Self {
        Self {
            id,
            definition,
            card_id: None,
            position,
            scale,
            active: false,
        }
    }

    /// Move the card on screen by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Check if this card has been promoted into a hand slot.
    #[must_use]
    pub fn is_in_hand(&self) -> bool {
        self.card_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_new_instance_is_staged() {
        let def = Arc::new(CardDefinition::new(CardId::new(1), "Arrows"));
        let card = CardInstance::new(InstanceId(1), def, Vec2::new(180.0, -300.0), 0.7);

        assert!(!card.is_in_hand());
        assert!(!card.active);
        assert_eq!(card.scale, 0.7);
        assert_eq!(format!("{}", card.id), "Instance(1)");
    }

    #[test]
    fn test_translate() {
        let def = Arc::new(CardDefinition::new(CardId::new(1), "Arrows"));
        let mut card = CardInstance::new(InstanceId(2), def, Vec2::new(10.0, 10.0), 1.0);

        card.translate(Vec2::new(5.0, -2.0));
        card.translate(Vec2::new(1.0, 1.0));

        assert_eq!(card.position, Vec2::new(16.0, 9.0));
    }
}
