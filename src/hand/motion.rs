//! Move-to effect: how card movement reaches the rendering layer.
//!
//! The hand records where a card should be; a `MoveEffect` gets it there
//! visually over `duration` seconds.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cards::InstanceId;
use crate::core::Vec2;

/// Animates a card between screen positions.
pub trait MoveEffect {
    fn move_to(&mut self, card: InstanceId, from: Vec2, to: Vec2, duration: f32);
}

/// Moves nothing; positions jump. Useful for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantMove;

impl MoveEffect for InstantMove {
    fn move_to(&mut self, _card: InstanceId, _from: Vec2, _to: Vec2, _duration: f32) {}
}

/// A single requested move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveCommand {
    pub card: InstanceId,
    pub from: Vec2,
    pub to: Vec2,
    pub duration: f32,
}

/// Records every requested move. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct MoveLog(Rc<RefCell<Vec<MoveCommand>>>);

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all moves recorded so far.
    #[must_use]
    pub fn commands(&self) -> Vec<MoveCommand> {
        self.0.borrow().clone()
    }

    /// Most recent move of `card`.
    #[must_use]
    pub fn last_for(&self, card: InstanceId) -> Option<MoveCommand> {
        self.0.borrow().iter().rev().find(|m| m.card == card).copied()
    }
}

impl MoveEffect for MoveLog {
    fn move_to(&mut self, card: InstanceId, from: Vec2, to: Vec2, duration: f32) {
        self.0.borrow_mut().push(MoveCommand {
            card,
            from,
            to,
            duration,
        });
    }
}
