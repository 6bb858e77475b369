//! Hand scheduler: the bounded hand, its timed refills and drag arbitration.
//!
//! The scheduler owns every slot, the staging queue of drawn-but-not-yet
//! promoted cards, the timeline of pending draws and promotions, the single
//! active-drag token and the preview projector.
//!
//! ## Timing
//!
//! The opening deal alternates draws and promotions on one timeline:
//!
//! ```text
//! t = d          draw            (staging: [c0])
//! t = d + p      promote c0 -> 0
//! t = 2d + p     draw            (staging: [c1])
//! t = 2(d + p)   promote c1 -> 1
//! ...
//! t = N(d + p)   promote -> N-1
//! t = N(d+p) + d draw            (staging keeps the "next" card)
//! ```
//!
//! A placed card is replaced after `replace_delay` (draw) plus
//! `replace_promote_delay` (promote into the same slot). Promotions always
//! take the oldest staged card, so the card shown as "next" is the one that
//! enters the hand.
//!
//! ## Drag token
//!
//! At most one slot is `Active` at a time. The token is claimed by the first
//! drag that lands on the field and released when that drag leaves the
//! field or the card is released.

use std::collections::VecDeque;

use crate::cards::{CardInstance, InstanceId, PrefabId};
use crate::core::{Faction, HandConfig, HandError, Result, SlotId, Vec2, Vec3};
use crate::deck::DeckSource;
use crate::placement::{CardPlaced, PlacementTargetResolver, PointerService, PreviewProjector};
use crate::timeline::{ticks, Timeline};

use super::motion::{InstantMove, MoveEffect};
use super::signal::SlotSignal;
use super::slot::CardSlot;

/// Unusable cards a single draw may skip before giving up.
pub const MAX_SKIPPED_DRAWS: usize = 32;

/// Who a timeline entry belongs to. Cancelling an owner drops its entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskOwner {
    /// The opening deal sequence.
    Deal,
    /// The replacement sequence of one slot.
    Slot(SlotId),
}

/// One step of a timed sequence. Each step schedules its own continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandStep {
    /// Opening deal: draw, then promote into `next` if it is a hand slot.
    DealDraw { next: SlotId },
    /// Opening deal: promote into `slot`, then draw for the slot after it.
    DealPromote { slot: SlotId },
    /// Replacement: draw, then promote into `slot`.
    ReplaceDraw { slot: SlotId },
    /// Replacement: promote into `slot`.
    ReplacePromote { slot: SlotId },
}

/// Visual assets the hand cannot run without.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandAssets {
    /// Template every drawn card is instantiated from.
    pub card_prefab: Option<PrefabId>,
    /// Overlay shown over the no-placement zone while a card is held.
    pub forbidden_area: Option<PrefabId>,
}

impl HandAssets {
    #[must_use]
    pub fn new(card_prefab: PrefabId, forbidden_area: PrefabId) -> Self {
        Self {
            card_prefab: Some(card_prefab),
            forbidden_area: Some(forbidden_area),
        }
    }

    /// Fail with `MissingAsset` naming the first missing reference.
    pub fn validate(&self) -> Result<()> {
        if self.card_prefab.is_none() {
            return Err(HandError::MissingAsset("card prefab".into()));
        }
        if self.forbidden_area.is_none() {
            return Err(HandError::MissingAsset("forbidden area overlay".into()));
        }
        Ok(())
    }
}

/// Owns the hand and sequences everything that happens to it.
pub struct HandScheduler {
    config: HandConfig,
    assets: HandAssets,
    deck: Box<dyn DeckSource>,
    resolver: PlacementTargetResolver,
    pointer: Box<dyn PointerService>,
    motion: Box<dyn MoveEffect>,

    slots: Vec<CardSlot>,
    /// Drawn cards waiting for promotion, oldest first.
    staged: VecDeque<CardInstance>,
    /// Dashboard draw order; the last slot is drawn on top.
    draw_order: Vec<SlotId>,
    timeline: Timeline<TaskOwner, HandStep>,

    /// The active-drag token.
    active: Option<SlotId>,
    preview: PreviewProjector,
    overlay_visible: bool,

    events: Vec<CardPlaced>,
    next_instance: u64,
    deal_started: bool,
    torn_down: bool,
}

impl std::fmt::Debug for HandScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandScheduler")
            .field("slots", &self.slots)
            .field("staged", &self.staged.len())
            .field("active", &self.active)
            .field("now", &self.timeline.now())
            .field("pending", &self.timeline.len())
            .finish_non_exhaustive()
    }
}

impl HandScheduler {
    /// Create a scheduler with an empty hand.
    ///
    /// Fails with `InvalidCapacity` if the hand would have no slots (or more
    /// than 255), and with `MissingAsset` if a required asset is absent.
    pub fn new(
        config: HandConfig,
        assets: HandAssets,
        deck: Box<dyn DeckSource>,
        resolver: PlacementTargetResolver,
        pointer: Box<dyn PointerService>,
    ) -> Result<Self> {
        if config.capacity == 0 || config.capacity > usize::from(u8::MAX) {
            tracing::error!("[hand] Invalid hand capacity {}", config.capacity);
            return Err(HandError::InvalidCapacity);
        }
        assets
            .validate()
            .inspect_err(|err| tracing::error!("[hand] Cannot initialise hand: {}", err))?;

        let slots = SlotId::all(config.capacity).map(CardSlot::new).collect();
        let preview = PreviewProjector::new(config.creation_offset);

        Ok(Self {
            config,
            assets,
            deck,
            resolver,
            pointer,
            motion: Box::new(InstantMove),
            slots,
            staged: VecDeque::new(),
            draw_order: Vec::new(),
            timeline: Timeline::new(),
            active: None,
            preview,
            overlay_visible: false,
            events: Vec::new(),
            next_instance: 0,
            deal_started: false,
            torn_down: false,
        })
    }

    /// Use `motion` to animate card movement (builder pattern).
    #[must_use]
    pub fn with_move_effect(mut self, motion: Box<dyn MoveEffect>) -> Self {
        self.motion = motion;
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn config(&self) -> &HandConfig {
        &self.config
    }

    #[must_use]
    pub fn assets(&self) -> &HandAssets {
        &self.assets
    }

    /// Current timeline time in seconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.timeline.now()
    }

    /// All slots in position order.
    #[must_use]
    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&CardSlot> {
        self.slots.get(id.index())
    }

    /// Number of slots currently holding a card.
    #[must_use]
    pub fn cards_in_hand(&self) -> usize {
        self.slots.iter().filter(|s| s.has_card()).count()
    }

    /// Slot holding the active-drag token.
    #[must_use]
    pub fn active_slot(&self) -> Option<SlotId> {
        self.active
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewProjector {
        &self.preview
    }

    /// Whether the no-placement overlay is shown.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Drawn cards waiting for promotion, oldest first.
    pub fn staged(&self) -> impl Iterator<Item = &CardInstance> {
        self.staged.iter()
    }

    /// The card that will enter the hand next.
    #[must_use]
    pub fn next_card(&self) -> Option<&CardInstance> {
        self.staged.front()
    }

    /// Dashboard draw order; the last slot is on top.
    #[must_use]
    pub fn draw_order(&self) -> &[SlotId] {
        &self.draw_order
    }

    /// Number of pending timeline entries for `owner`.
    #[must_use]
    pub fn pending_for(&self, owner: TaskOwner) -> usize {
        self.timeline.pending_for(owner)
    }

    /// Total pending timeline entries.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.timeline.len()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Take every placement event emitted so far.
    pub fn drain_events(&mut self) -> Vec<CardPlaced> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// The deck is ready: start the opening deal.
    ///
    /// Calling this more than once has no effect.
    pub fn on_deck_ready(&mut self) {
        if self.torn_down {
            return;
        }
        if self.deal_started {
            tracing::warn!("[hand] Deck ready signalled twice; ignoring");
            return;
        }

        tracing::info!("[hand] Player's deck loaded, dealing {} cards", self.slots.len());
        self.deal_started = true;
        self.timeline.schedule(
            TaskOwner::Deal,
            self.config.initial_draw_delay,
            HandStep::DealDraw { next: SlotId::new(0) },
        );
    }

    /// Advance the timeline by `dt` seconds, running every step that comes due.
    pub fn advance(&mut self, dt: f32) {
        if self.torn_down {
            return;
        }

        let target = self.timeline.now_ticks().saturating_add(ticks(dt));
        while let Some(task) = self.timeline.pop_due(target) {
            tracing::trace!("[timeline] {:?} at {:.3}s", task.action, self.timeline.now());
            self.run_step(task.action);
        }
        self.timeline.advance_to(target);
    }

    fn run_step(&mut self, step: HandStep) {
        match step {
            HandStep::DealDraw { next } => {
                self.draw();
                if next.index() < self.slots.len() {
                    self.schedule_promotion(
                        TaskOwner::Deal,
                        self.config.initial_promote_delay,
                        HandStep::DealPromote { slot: next },
                    );
                }
            }
            HandStep::DealPromote { slot } => {
                self.promote(slot);
                self.timeline.schedule(
                    TaskOwner::Deal,
                    self.config.initial_draw_delay,
                    HandStep::DealDraw {
                        next: SlotId::new(slot.0 + 1),
                    },
                );
            }
            HandStep::ReplaceDraw { slot } => {
                self.draw();
                self.schedule_promotion(
                    TaskOwner::Slot(slot),
                    self.config.replace_promote_delay,
                    HandStep::ReplacePromote { slot },
                );
            }
            HandStep::ReplacePromote { slot } => self.promote(slot),
        }
    }

    /// Mark the promotion's slot as dealing and schedule it.
    fn schedule_promotion(&mut self, owner: TaskOwner, delay: f32, step: HandStep) {
        let (HandStep::DealPromote { slot } | HandStep::ReplacePromote { slot }) = step else {
            return;
        };
        let Some(target) = self.slots.get_mut(slot.index()) else {
            tracing::warn!("[hand] Promotion into missing {}", slot);
            return;
        };
        if let Err(err) = target.begin_dealing() {
            tracing::error!("[hand] {}", err);
            return;
        }
        self.timeline.schedule(owner, delay, step);
    }

    /// Draw the next usable card from the deck into staging.
    ///
    /// Unusable cards are skipped, up to `MAX_SKIPPED_DRAWS` in a row.
    fn draw(&mut self) {
        let mut skipped = 0;
        let definition = loop {
            let candidate = self.deck.next_card();
            match candidate.validate() {
                Ok(()) => break candidate,
                Err(err) if skipped < MAX_SKIPPED_DRAWS => {
                    tracing::error!("[hand] Skipping unusable card {}: {}", candidate.id, err);
                    skipped += 1;
                }
                Err(err) => {
                    tracing::error!("[hand] Deck yields no usable cards (last: {}); draw abandoned", err);
                    return;
                }
            }
        };

        let id = InstanceId(self.next_instance);
        self.next_instance += 1;

        let origin = self.config.staging_origin;
        let staging = self.config.staging_position;
        let mut card = CardInstance::new(id, definition, origin, self.config.staged_scale);
        self.motion
            .move_to(id, origin, staging, self.config.move_duration);
        card.position = staging;

        tracing::debug!("[hand] Drew {} as {}", card.definition.id, id);
        self.staged.push_back(card);
    }

    /// Bind the oldest staged card to `slot`.
    fn promote(&mut self, slot: SlotId) {
        let Some(target) = self.slots.get_mut(slot.index()) else {
            tracing::warn!("[hand] Promotion into missing {}", slot);
            return;
        };
        let Some(mut card) = self.staged.pop_front() else {
            tracing::error!("[hand] Nothing staged to promote into {}", slot);
            target.teardown();
            return;
        };

        let home = self.config.slot_position(slot);
        self.motion
            .move_to(card.id, card.position, home, self.config.move_duration);
        card.position = home;
        card.scale = 1.0;
        card.card_id = Some(slot);

        let (instance, definition) = (card.id, card.definition.id);
        if let Err(err) = target.bind(card) {
            tracing::error!("[hand] {}", err);
            return;
        }

        self.draw_order.retain(|&s| s != slot);
        self.draw_order.push(slot);
        tracing::info!("[hand] {} ({}) promoted into {}", definition, instance, slot);
    }

    /// Schedule the replacement of a consumed card.
    ///
    /// A slot never has two replacements in flight.
    pub fn replace_used_card(&mut self, slot: SlotId) {
        if self.torn_down || slot.index() >= self.slots.len() {
            return;
        }
        if self.timeline.pending_for(TaskOwner::Slot(slot)) > 0 {
            tracing::warn!("[hand] {} already has a replacement pending", slot);
            return;
        }
        self.timeline.schedule(
            TaskOwner::Slot(slot),
            self.config.replace_delay,
            HandStep::ReplaceDraw { slot },
        );
    }

    /// Stop everything: cancel pending steps and empty the hand.
    ///
    /// After teardown all signals and `advance` calls are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }

        let cancelled = self.timeline.cancel_all();
        for slot in &mut self.slots {
            slot.teardown();
        }

        self.staged.clear();
        self.draw_order.clear();
        self.preview.clear();
        self.active = None;
        self.overlay_visible = false;
        self.torn_down = true;

        tracing::info!("[hand] Torn down, {} pending steps cancelled", cancelled);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Deliver an input signal to its slot.
    pub fn dispatch(&mut self, signal: SlotSignal) {
        match signal {
            SlotSignal::TapDown(slot) => self.on_card_tapped(slot),
            SlotSignal::Drag(slot, delta) => self.on_card_dragged(slot, delta),
            SlotSignal::TapRelease(slot) => self.on_card_released(slot),
        }
    }

    fn accepts_input(&self, slot: SlotId) -> bool {
        if self.torn_down {
            return false;
        }
        match self.slots.get(slot.index()) {
            Some(s) if s.is_subscribed() && s.has_card() => true,
            _ => {
                tracing::debug!("[hand] Ignoring gesture on {} (no card bound)", slot);
                false
            }
        }
    }

    fn resolve_pointer(&self) -> Option<Vec3> {
        self.resolver
            .resolve(self.pointer.pointer_position(), self.config.field_mask)
    }

    /// A card was pressed: bring it to front and show the forbidden zone.
    pub fn on_card_tapped(&mut self, slot: SlotId) {
        if !self.accepts_input(slot) {
            return;
        }

        self.draw_order.retain(|&s| s != slot);
        self.draw_order.push(slot);
        self.overlay_visible = true;
        tracing::debug!("[hand] {} tapped", slot);
    }

    /// A card was dragged by `delta` pixels.
    pub fn on_card_dragged(&mut self, slot: SlotId, delta: Vec2) {
        if !self.accepts_input(slot) {
            return;
        }

        let hit = self.resolve_pointer();
        let target = &mut self.slots[slot.index()];
        let Some(card) = target.card_mut() else {
            return;
        };
        card.translate(delta);
        let definition = std::sync::Arc::clone(&card.definition);

        match (hit, self.active) {
            (Some(point), None) => {
                if let Err(err) = target.activate() {
                    tracing::error!("[hand] {}", err);
                    return;
                }
                self.active = Some(slot);
                self.preview.show(point, &definition);
                tracing::debug!("[hand] {} active, previewing at {}", slot, point);
            }
            (Some(point), Some(holder)) if holder == slot => {
                self.preview.move_to(point);
            }
            (Some(_), Some(holder)) => {
                tracing::debug!("[hand] {} dragged over field while {} holds the token", slot, holder);
            }
            (None, Some(holder)) if holder == slot => {
                if let Err(err) = target.deactivate() {
                    tracing::error!("[hand] {}", err);
                }
                self.active = None;
                self.preview.clear();
                tracing::debug!("[hand] {} left the field", slot);
            }
            (None, _) => {}
        }
    }

    /// A card was released.
    pub fn on_card_released(&mut self, slot: SlotId) {
        if !self.accepts_input(slot) {
            return;
        }

        let hit = self.resolve_pointer();
        let held_token = self.active == Some(slot);
        let target = &mut self.slots[slot.index()];
        if let Err(err) = target.begin_release() {
            tracing::error!("[hand] {}", err);
            return;
        }

        match hit {
            Some(point) => match target.finish_placed() {
                Ok(card) => {
                    if held_token || self.active.is_none() {
                        self.preview.clear();
                    }
                    if held_token {
                        self.active = None;
                    }
                    self.draw_order.retain(|&s| s != slot);

                    let event = CardPlaced {
                        card: card.definition,
                        point: point + self.config.creation_offset,
                        faction: Faction::Player,
                    };
                    tracing::info!("[hand] {} placed from {} at {}", event.card.id, slot, event.point);
                    self.events.push(event);
                    self.replace_used_card(slot);
                }
                Err(err) => tracing::error!("[hand] {}", err),
            },
            None => {
                if let Err(err) = target.finish_returned() {
                    tracing::error!("[hand] {}", err);
                }
                if held_token {
                    self.active = None;
                    self.preview.clear();
                }

                let home = self.config.slot_position(slot);
                if let Some(card) = target.card_mut() {
                    self.motion
                        .move_to(card.id, card.position, home, self.config.move_duration);
                    card.position = home;
                }
                tracing::debug!("[hand] {} released off-field, returning home", slot);
            }
        }

        self.overlay_visible = false;
    }
}
