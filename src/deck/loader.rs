//! Deck loading: from a list of card ids to a ready deck.
//!
//! A successful load is the "deck ready" signal that starts the opening
//! deal. Loading validates every card up front so a broken definition never
//! reaches the hand.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRegistry};
use crate::core::{GameRng, HandError, Result};

use super::source::CyclicDeck;

/// Serializable deck description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckData {
    /// Deck name (for logging).
    pub name: String,

    /// Cards in draw order.
    pub cards: Vec<CardId>,

    /// Shuffle once at load with this seed. `None` keeps the listed order.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl DeckData {
    /// Create a deck description.
    pub fn new(name: impl Into<String>, cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            name: name.into(),
            cards: cards.into_iter().collect(),
            shuffle_seed: None,
        }
    }

    /// Shuffle at load time with the given seed.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }
}

/// Resolves `DeckData` against a registry.
#[derive(Clone, Copy, Debug)]
pub struct DeckLoader<'a> {
    registry: &'a CardRegistry,
}

impl<'a> DeckLoader<'a> {
    /// Create a loader that resolves ids in `registry`.
    #[must_use]
    pub fn new(registry: &'a CardRegistry) -> Self {
        Self { registry }
    }

    /// Load a deck.
    ///
    /// Fails with `EmptyDeck`, `UnknownCard` or the first validation error
    /// of any listed definition.
    pub fn load(&self, data: &DeckData) -> Result<CyclicDeck> {
        if data.cards.is_empty() {
            tracing::error!("[deck] Deck '{}' has no cards", data.name);
            return Err(HandError::EmptyDeck);
        }

        let mut cards = data
            .cards
            .iter()
            .map(|&id| self.registry.resolve(id))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| tracing::error!("[deck] Failed to load '{}': {}", data.name, err))?;

        if let Some(seed) = data.shuffle_seed {
            GameRng::new(seed).shuffle(&mut cards);
        }

        let deck = CyclicDeck::new(cards)
            .inspect_err(|err| tracing::error!("[deck] Failed to load '{}': {}", data.name, err))?;
        tracing::info!("[deck] Deck '{}' loaded ({} cards)", data.name, deck.len());
        Ok(deck)
    }
}
