//! # royale-hand
//!
//! The card-deployment core of a real-time strategy game: a small hand of
//! cards refilled on a timer, and drag-to-place deployment of each card's
//! units onto the field.
//!
//! ## Design Principles
//!
//! 1. **One clock**: every delay (draw, promote, replace) is an entry on a
//!    single virtual `Timeline`. Nothing runs in parallel; the host calls
//!    `HandScheduler::advance` once per frame.
//!
//! 2. **Explicit states**: each slot is a `CardSlotState` enum whose
//!    card-bearing variants own the card, so illegal combinations
//!    (active with no card) cannot be built.
//!
//! 3. **Injected edges**: the deck, the pointer and the move-to animation
//!    are traits. Placements leave as `CardPlaced` events.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use royale_hand::cards::{CardDefinition, CardId, PlaceableData, PrefabId};
//! use royale_hand::core::{HandConfig, Layer, SlotId, Vec2, Vec3};
//! use royale_hand::deck::CyclicDeck;
//! use royale_hand::hand::{HandAssets, HandScheduler, SlotSignal};
//! use royale_hand::placement::{Camera, FieldCollider, PlacementTargetResolver, SharedPointer};
//!
//! let knight = Arc::new(
//!     CardDefinition::new(CardId::new(1), "Knight")
//!         .with_placeable(PlaceableData::new("Knight", PrefabId::new(1)), Vec3::ZERO),
//! );
//! let deck = CyclicDeck::new(vec![knight]).unwrap();
//!
//! let camera = Camera::look_at(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, 90.0, Vec2::new(100.0, 100.0)).unwrap();
//! let resolver = PlacementTargetResolver::new(camera)
//!     .with_collider(FieldCollider::quad(Vec3::ZERO, Vec2::new(5.0, 5.0), Layer::PLAYING_FIELD));
//! let pointer = SharedPointer::new(Vec2::new(50.0, 50.0));
//!
//! let mut hand = HandScheduler::new(
//!     HandConfig::default(),
//!     HandAssets::new(PrefabId::new(100), PrefabId::new(101)),
//!     Box::new(deck),
//!     resolver,
//!     Box::new(pointer.clone()),
//! ).unwrap();
//!
//! hand.on_deck_ready();
//! hand.advance(5.0);
//! assert_eq!(hand.cards_in_hand(), 3);
//!
//! hand.dispatch(SlotSignal::TapDown(SlotId::new(0)));
//! hand.dispatch(SlotSignal::Drag(SlotId::new(0), Vec2::new(0.0, 40.0)));
//! hand.dispatch(SlotSignal::TapRelease(SlotId::new(0)));
//!
//! let placed = hand.drain_events();
//! assert_eq!(placed.len(), 1);
//! assert_eq!(placed[0].card.id, CardId::new(1));
//! ```
//!
//! ## Modules
//!
//! - `core`: configuration, errors, factions, seeded RNG, math re-exports
//! - `cards`: card definitions, drawn instances, registry
//! - `deck`: cyclic deck source and loader
//! - `timeline`: cancellable delayed-action queue
//! - `placement`: camera, target resolution, preview, placement event
//! - `hand`: slots, signals and the hand scheduler

pub mod core;
pub mod cards;
pub mod deck;
pub mod timeline;
pub mod placement;
pub mod hand;

// Re-export commonly used types
pub use crate::core::{
    Faction, GameRng, HandConfig, HandError, Layer, LayerMask, Ray3d, Result, SlotId, Vec2, Vec3,
};

pub use crate::cards::{
    CardDefinition, CardId, CardInstance, CardRegistry, InstanceId, PlaceableData, PrefabId,
};

pub use crate::deck::{CyclicDeck, DeckData, DeckLoader, DeckSource};

pub use crate::timeline::{TaskId, Timeline};

pub use crate::placement::{
    Camera, CardPlaced, FieldCollider, PlacementTargetResolver, PointerService, PreviewProjector,
    SharedPointer,
};

pub use crate::hand::{
    CardSlot, CardSlotState, HandAssets, HandScheduler, MoveEffect, SlotSignal, TaskOwner,
};
