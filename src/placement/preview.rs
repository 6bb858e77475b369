//! Placement preview: ghost copies of a card's placeables under the pointer.
//!
//! The projector keeps one anchor. Children store their offset relative to
//! the anchor, so moving the anchor moves the whole group without touching
//! the children.

use smallvec::SmallVec;

use crate::cards::{CardDefinition, CardId, PrefabId};
use crate::core::Vec3;

/// One ghost object in the preview group.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewObject {
    /// Placeable name (for debugging/display).
    pub name: String,
    /// Prefab the rendering layer instantiates.
    pub prefab: PrefabId,
    /// Position relative to the anchor.
    pub local_offset: Vec3,
}

/// Holds the current preview group.
#[derive(Clone, Debug)]
pub struct PreviewProjector {
    anchor: Vec3,
    creation_offset: Vec3,
    card: Option<CardId>,
    children: SmallVec<[PreviewObject; 4]>,
}

impl PreviewProjector {
    /// Create an empty projector. `creation_offset` is added to every child.
    #[must_use]
    pub fn new(creation_offset: Vec3) -> Self {
        Self {
            anchor: Vec3::ZERO,
            creation_offset,
            card: None,
            children: SmallVec::new(),
        }
    }

    /// Rebuild the group for `card` at `point`.
    ///
    /// Any existing children are destroyed first. Child `i` sits at
    /// `point + offsets[i] + creation_offset`.
    ///
    /// `card` must have passed `CardDefinition::validate`. A placeable with
    /// no preview prefab is logged as an error and panics in debug builds.
    pub fn show(&mut self, point: Vec3, card: &CardDefinition) {
        self.clear();
        self.anchor = point;
        self.card = Some(card.id);

        for (placeable, offset) in card.placements() {
            let Some(prefab) = placeable.preview_prefab else {
                tracing::error!("[preview] {} has no preview prefab for '{}'", card.id, placeable.name);
                debug_assert!(false, "{} reached the preview without validation", card.id);
                continue;
            };
            self.children.push(PreviewObject {
                name: placeable.name.clone(),
                prefab,
                local_offset: offset + self.creation_offset,
            });
        }
    }

    /// Move the group so its anchor sits at `point`.
    pub fn move_to(&mut self, point: Vec3) {
        self.anchor = point;
    }

    /// Destroy every child. The projector stays usable.
    pub fn clear(&mut self) {
        self.children.clear();
        self.card = None;
    }

    /// Current anchor position.
    #[must_use]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Card the current group was built for.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        self.card
    }

    /// Number of live preview objects.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if nothing is being previewed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over children with their world positions.
    pub fn children(&self) -> impl Iterator<Item = (&PreviewObject, Vec3)> {
        self.children
            .iter()
            .map(move |child| (child, self.anchor + child.local_offset))
    }
}
