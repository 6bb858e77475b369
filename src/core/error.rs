//! Error type shared by the deck, card and hand modules.

use crate::cards::CardId;

use super::config::SlotId;

/// Errors raised while loading a deck or setting up the hand.
///
/// Gestures that reference an empty slot and rays that miss the field are
/// not errors; they are handled as ordinary branches by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
    /// A required template or visual reference was not provided.
    #[error("missing asset: {0}")]
    MissingAsset(String),

    /// A card's placeable list and offset list differ in length.
    #[error("{card} has {placeables} placeables but {offsets} offsets")]
    OffsetMismatch {
        card: CardId,
        placeables: usize,
        offsets: usize,
    },

    /// A deck refers to a card id the registry does not know.
    #[error("unknown card: {0}")]
    UnknownCard(CardId),

    /// A card id was registered twice.
    #[error("duplicate card: {0}")]
    DuplicateCard(CardId),

    /// A deck was loaded with no cards in it.
    #[error("deck contains no cards")]
    EmptyDeck,

    /// The hand was configured with zero slots.
    #[error("hand capacity must be at least 1")]
    InvalidCapacity,

    /// A slot was asked to make a state transition its current state forbids.
    #[error("{slot}: cannot {event} while {from}")]
    IllegalTransition {
        slot: SlotId,
        from: &'static str,
        event: &'static str,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, HandError>;
