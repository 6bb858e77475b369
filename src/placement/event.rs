//! Outbound placement event.

use std::sync::Arc;

use crate::cards::CardDefinition;
use crate::core::{Faction, Vec3};

/// A card was dropped on the field.
///
/// Emitted exactly once per successful placement; the combat layer spawns
/// `card.placeables` around `point`.
#[derive(Clone, Debug, PartialEq)]
pub struct CardPlaced {
    pub card: Arc<CardDefinition>,
    pub point: Vec3,
    pub faction: Faction,
}

impl CardPlaced {
    /// World position of each placeable.
    pub fn spawn_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.card.offsets.iter().map(move |&offset| self.point + offset)
    }
}
