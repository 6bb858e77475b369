//! Property tests for the hand's invariants.
//!
//! Random sequences of taps, drags, releases and clock advances must never:
//! - give the drag token to more than one slot
//! - show preview objects without a token holder
//! - bind a card whose placeables and offsets differ in length
//! - fill a slot from two replacements at once

use std::sync::Arc;

use proptest::prelude::*;

use royale_hand::cards::{CardDefinition, CardId, PlaceableData, PrefabId};
use royale_hand::core::{HandConfig, Layer, SlotId, Vec2, Vec3};
use royale_hand::deck::CyclicDeck;
use royale_hand::hand::{HandAssets, HandScheduler, SlotSignal, TaskOwner};
use royale_hand::placement::{Camera, FieldCollider, PlacementTargetResolver, SharedPointer};

#[derive(Clone, Debug)]
enum Op {
    Tap(u8),
    Drag(u8, Vec2),
    Release(u8),
    Advance(f32),
}

fn op() -> impl Strategy<Value = Op> {
    let pointer = (0.0f32..100.0, 0.0f32..100.0).prop_map(|(x, y)| Vec2::new(x, y));
    prop_oneof![
        1 => (0u8..4).prop_map(Op::Tap),
        3 => (0u8..4, pointer).prop_map(|(s, p)| Op::Drag(s, p)),
        1 => (0u8..4).prop_map(Op::Release),
        1 => (0.0f32..2.0).prop_map(Op::Advance),
    ]
}

fn hand(pointer: &SharedPointer) -> HandScheduler {
    let cards = (1..=5).map(|i| {
        let mut card = CardDefinition::new(CardId::new(i), format!("Card {i}"));
        for j in 0..i {
            card = card.with_placeable(
                PlaceableData::new("Unit", PrefabId::new(i)),
                Vec3::new(j as f32, 0.0, 0.0),
            );
        }
        Arc::new(card)
    });

    let camera = Camera::look_at(
        Vec3::new(0.0, 10.0, 0.0),
        Vec3::ZERO,
        90.0,
        Vec2::new(100.0, 100.0),
    )
    .unwrap();
    let resolver = PlacementTargetResolver::new(camera).with_collider(FieldCollider::quad(
        Vec3::ZERO,
        Vec2::new(5.0, 5.0),
        Layer::PLAYING_FIELD,
    ));

    let mut hand = HandScheduler::new(
        HandConfig::default(),
        HandAssets::new(PrefabId::new(100), PrefabId::new(101)),
        Box::new(CyclicDeck::new(cards).unwrap()),
        resolver,
        Box::new(pointer.clone()),
    )
    .unwrap();
    hand.on_deck_ready();
    hand
}

fn check_invariants(hand: &HandScheduler) -> Result<(), TestCaseError> {
    let active: Vec<_> = hand.slots().iter().filter(|s| s.is_active()).map(|s| s.id()).collect();
    prop_assert!(active.len() <= 1, "two active slots: {:?}", active);
    prop_assert_eq!(active.first().copied(), hand.active_slot());

    if !hand.preview().is_empty() {
        prop_assert!(hand.active_slot().is_some());
    }
    if let Some(holder) = hand.active_slot() {
        let card = hand.slot(holder).unwrap().card().unwrap();
        prop_assert_eq!(hand.preview().child_count(), card.definition.placeable_count());
    }

    for slot in hand.slots() {
        if let Some(card) = slot.card() {
            prop_assert_eq!(card.definition.placeables.len(), card.definition.offsets.len());
            prop_assert_eq!(card.card_id, Some(slot.id()));
            prop_assert!(slot.is_subscribed());
        }
        prop_assert!(hand.pending_for(TaskOwner::Slot(slot.id())) <= 1);
    }

    Ok(())
}

proptest! {
    #[test]
    fn prop_hand_invariants(ops in prop::collection::vec(op(), 1..80)) {
        let pointer = SharedPointer::default();
        let mut hand = hand(&pointer);

        for op in ops {
            match op {
                Op::Tap(s) => hand.dispatch(SlotSignal::TapDown(SlotId::new(s))),
                Op::Drag(s, p) => {
                    pointer.set(p);
                    hand.dispatch(SlotSignal::Drag(SlotId::new(s), Vec2::new(1.0, 1.0)));
                }
                Op::Release(s) => hand.dispatch(SlotSignal::TapRelease(SlotId::new(s))),
                Op::Advance(dt) => hand.advance(dt),
            }
            for event in hand.drain_events() {
                prop_assert_eq!(event.spawn_points().count(), event.card.placeable_count());
            }
            check_invariants(&hand)?;
        }

        // Every placement is eventually replaced exactly once.
        hand.advance(60.0);
        prop_assert_eq!(hand.cards_in_hand(), 3);
        prop_assert_eq!(hand.pending_tasks(), 0);
    }

    #[test]
    fn prop_move_keeps_child_count(points in prop::collection::vec((-5.0f32..5.0, -5.0f32..5.0), 1..30)) {
        let card = CardDefinition::new(CardId::new(1), "Trio")
            .with_placeable(PlaceableData::new("A", PrefabId::new(1)), Vec3::ZERO)
            .with_placeable(PlaceableData::new("B", PrefabId::new(1)), Vec3::new(1.0, 0.0, 0.0))
            .with_placeable(PlaceableData::new("C", PrefabId::new(1)), Vec3::new(2.0, 0.0, 0.0));
        let mut preview = royale_hand::placement::PreviewProjector::new(Vec3::new(0.0, 0.0, 1.0));
        preview.show(Vec3::ZERO, &card);

        for (x, z) in points {
            preview.move_to(Vec3::new(x, 0.0, z));
            prop_assert_eq!(preview.child_count(), 3);
            let first = preview.children().next().unwrap().1;
            prop_assert_eq!(first, Vec3::new(x, 0.0, z + 1.0));
        }
    }
}
