//! The hand: slots, their input signals and the scheduler that runs them.
//!
//! ## Key Types
//!
//! - `CardSlot` / `CardSlotState`: one hand position and its state machine
//! - `SlotSignal`: tap / drag / release messages from the input layer
//! - `MoveEffect`: injected move-to animation
//! - `HandScheduler`: owns the hand, deals, replaces, arbitrates drags

pub mod motion;
pub mod scheduler;
pub mod signal;
pub mod slot;

pub use motion::{InstantMove, MoveCommand, MoveEffect, MoveLog};
pub use scheduler::{HandAssets, HandScheduler, HandStep, TaskOwner, MAX_SKIPPED_DRAWS};
pub use signal::SlotSignal;
pub use slot::{CardSlot, CardSlotState};
