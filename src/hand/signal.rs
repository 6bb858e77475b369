//! Input signals delivered to hand slots.

use serde::{Deserialize, Serialize};

use crate::core::{SlotId, Vec2};

/// A per-slot input message from the visual layer.
///
/// The input layer demultiplexes gestures so each signal names exactly one
/// slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SlotSignal {
    /// Pointer pressed on the slot's card.
    TapDown(SlotId),
    /// Pointer moved by `delta` pixels while holding the card.
    Drag(SlotId, Vec2),
    /// Pointer released.
    TapRelease(SlotId),
}

impl SlotSignal {
    /// The slot this signal is addressed to.
    #[must_use]
    pub fn slot(&self) -> SlotId {
        match *self {
            SlotSignal::TapDown(slot) | SlotSignal::Drag(slot, _) | SlotSignal::TapRelease(slot) => slot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot() {
        assert_eq!(SlotSignal::TapDown(SlotId(1)).slot(), SlotId(1));
        assert_eq!(SlotSignal::Drag(SlotId(2), Vec2::ZERO).slot(), SlotId(2));
        assert_eq!(SlotSignal::TapRelease(SlotId(0)).slot(), SlotId(0));
    }
}
