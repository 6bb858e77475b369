//! Deck sources: where the hand draws its next card from.

use std::sync::Arc;

use im::Vector;

use crate::cards::CardDefinition;
use crate::core::{HandError, Result};

/// Supply of card definitions for the hand.
///
/// Implementations are infinite: `next_card` never fails and wraps around
/// when the underlying list is exhausted.
pub trait DeckSource {
    /// Get the next card to draw.
    fn next_card(&mut self) -> Arc<CardDefinition>;
}

/// Ordered deck that cycles forever.
///
/// ```
/// use std::sync::Arc;
/// use royale_hand::cards::{CardDefinition, CardId};
/// use royale_hand::deck::{CyclicDeck, DeckSource};
///
/// let mut deck = CyclicDeck::new(vec![
///     Arc::new(CardDefinition::new(CardId::new(1), "A")),
///     Arc::new(CardDefinition::new(CardId::new(2), "B")),
/// ]).unwrap();
///
/// assert_eq!(deck.next_card().id, CardId::new(1));
/// assert_eq!(deck.next_card().id, CardId::new(2));
/// assert_eq!(deck.next_card().id, CardId::new(1));
/// ```
#[derive(Clone, Debug)]
pub struct CyclicDeck {
    /// Persistent vector so snapshots of the deck are O(1).
    cards: Vector<Arc<CardDefinition>>,
    cursor: usize,
}

impl CyclicDeck {
    /// Create a deck from an ordered list of cards.
    ///
    /// Fails with `EmptyDeck`, or with the first invalid card's error,
    /// so an unusable card is caught before the hand ever draws it.
    pub fn new(cards: impl IntoIterator<Item = Arc<CardDefinition>>) -> Result<Self> {
        let cards: Vector<_> = cards.into_iter().collect();
        if cards.is_empty() {
            return Err(HandError::EmptyDeck);
        }
        for card in &cards {
            card.validate()?;
        }
        Ok(Self { cards, cursor: 0 })
    }

    /// Number of distinct entries in one cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; empty decks cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl DeckSource for CyclicDeck {
    fn next_card(&mut self) -> Arc<CardDefinition> {
        let card = Arc::clone(&self.cards[self.cursor]);
        self.cursor = (self.cursor + 1) % self.cards.len();
        card
    }
}
