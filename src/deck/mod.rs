//! Deck: the cyclic card supply the hand draws from.
//!
//! - `DeckSource`: trait the hand scheduler draws through
//! - `CyclicDeck`: ordered deck that wraps around
//! - `DeckLoader` / `DeckData`: load a deck from card ids

pub mod loader;
pub mod source;

pub use loader::{DeckData, DeckLoader};
pub use source::{CyclicDeck, DeckSource};
