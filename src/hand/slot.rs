//! Card slots: one hand position and its state machine.
//!
//! ```text
//!   Empty ──begin_dealing──▶ Dealing ──bind──▶ Idle ◀──deactivate── Active
//!     ▲                                         │ ──────activate──────▶ │
//!     │                                         ▼                       ▼
//!     └──────finish_placed────────────── Releasing ◀──begin_release─────┘
//!                                         │
//!                        finish_returned ─┴──▶ Idle
//! ```
//!
//! Card-bearing states own their `CardInstance`, so a slot can never be
//! active without a card.

use crate::cards::CardInstance;
use crate::core::{HandError, Result, SlotId};

/// State of a hand slot.
#[derive(Clone, Debug, Default)]
pub enum CardSlotState {
    /// No card and nothing on the way.
    #[default]
    Empty,
    /// A drawn card is waiting to be promoted into this slot.
    Dealing,
    /// Holding a card, not being placed.
    Idle(CardInstance),
    /// Holding the card currently being placed (owns the drag token).
    Active(CardInstance),
    /// The card's release is being resolved.
    Releasing(CardInstance),
}

impl CardSlotState {
    /// Short state name for logs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CardSlotState::Empty => "Empty",
            CardSlotState::Dealing => "Dealing",
            CardSlotState::Idle(_) => "Idle",
            CardSlotState::Active(_) => "Active",
            CardSlotState::Releasing(_) => "Releasing",
        }
    }

    /// The bound card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&CardInstance> {
        match self {
            CardSlotState::Idle(card)
            | CardSlotState::Active(card)
            | CardSlotState::Releasing(card) => Some(card),
            CardSlotState::Empty | CardSlotState::Dealing => None,
        }
    }

    fn card_mut(&mut self) -> Option<&mut CardInstance> {
        match self {
            CardSlotState::Idle(card)
            | CardSlotState::Active(card)
            | CardSlotState::Releasing(card) => Some(card),
            CardSlotState::Empty | CardSlotState::Dealing => None,
        }
    }
}

/// A single hand position.
///
/// `subscribed` is the slot's one registration point for input signals:
/// set when a card is bound, cleared when the card leaves or the slot is
/// torn down.
#[derive(Clone, Debug)]
pub struct CardSlot {
    id: SlotId,
    state: CardSlotState,
    subscribed: bool,
}

impl CardSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new(id: SlotId) -> Self {
        Self {
            id,
            state: CardSlotState::Empty,
            subscribed: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> SlotId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> &CardSlotState {
        &self.state
    }

    /// The bound card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&CardInstance> {
        self.state.card()
    }

    pub(crate) fn card_mut(&mut self) -> Option<&mut CardInstance> {
        self.state.card_mut()
    }

    /// Check if the slot holds a card.
    #[must_use]
    pub fn has_card(&self) -> bool {
        self.state.card().is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, CardSlotState::Empty)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, CardSlotState::Active(_))
    }

    /// Check if input signals for this slot are delivered.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    fn illegal(&self, event: &'static str) -> HandError {
        HandError::IllegalTransition {
            slot: self.id,
            from: self.state.name(),
            event,
        }
    }

    /// `Empty -> Dealing`.
    pub fn begin_dealing(&mut self) -> Result<()> {
        if !matches!(self.state, CardSlotState::Empty) {
            return Err(self.illegal("begin dealing"));
        }
        self.state = CardSlotState::Dealing;
        Ok(())
    }

    /// `Dealing -> Idle`, subscribing the slot to input.
    pub fn bind(&mut self, card: CardInstance) -> Result<()> {
        if !matches!(self.state, CardSlotState::Dealing) {
            return Err(self.illegal("bind"));
        }
        self.state = CardSlotState::Idle(card);
        self.subscribed = true;
        Ok(())
    }

    /// `Idle -> Active`.
    pub fn activate(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            CardSlotState::Idle(mut card) => {
                card.active = true;
                self.state = CardSlotState::Active(card);
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.illegal("activate"))
            }
        }
    }

    /// `Active -> Idle`.
    pub fn deactivate(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            CardSlotState::Active(mut card) => {
                card.active = false;
                self.state = CardSlotState::Idle(card);
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.illegal("deactivate"))
            }
        }
    }

    /// `Idle | Active -> Releasing`.
    pub fn begin_release(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            CardSlotState::Idle(card) | CardSlotState::Active(card) => {
                self.state = CardSlotState::Releasing(card);
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.illegal("release"))
            }
        }
    }

    /// `Releasing -> Empty`. Returns the consumed card and unsubscribes.
    pub fn finish_placed(&mut self) -> Result<CardInstance> {
        match std::mem::take(&mut self.state) {
            CardSlotState::Releasing(card) => {
                self.subscribed = false;
                Ok(card)
            }
            other => {
                self.state = other;
                Err(self.illegal("place"))
            }
        }
    }

    /// `Releasing -> Idle`.
    pub fn finish_returned(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            CardSlotState::Releasing(mut card) => {
                card.active = false;
                self.state = CardSlotState::Idle(card);
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.illegal("return"))
            }
        }
    }

    /// Any state `-> Empty`, unsubscribing. Returns the card it held.
    pub fn teardown(&mut self) -> Option<CardInstance> {
        self.subscribed = false;
        match std::mem::take(&mut self.state) {
            CardSlotState::Idle(card)
            | CardSlotState::Active(card)
            | CardSlotState::Releasing(card) => Some(card),
            CardSlotState::Empty | CardSlotState::Dealing => None,
        }
    }
}
