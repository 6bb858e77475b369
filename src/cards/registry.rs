//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition the game knows about.
//! Decks are written as lists of `CardId`s and resolved against it.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{HandError, Result};

use super::definition::{CardDefinition, CardId};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use royale_hand::cards::{CardRegistry, CardDefinition, CardId};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Fireball")).unwrap();
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Fireball");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Fails with `DuplicateCard` if the id is taken, otherwise with the
    /// definition's first validation error.
    pub fn register(&mut self, card: CardDefinition) -> Result<Arc<CardDefinition>> {
        if self.cards.contains_key(&card.id) {
            return Err(HandError::DuplicateCard(card.id));
        }
        card.validate()?;

        let card = Arc::new(card);
        self.cards.insert(card.id, Arc::clone(&card));
        Ok(card)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, or `UnknownCard`.
    pub fn resolve(&self, id: CardId) -> Result<Arc<CardDefinition>> {
        self.cards.get(&id).cloned().ok_or(HandError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }
}
