//! Timed sequencing on a single virtual clock.
//!
//! All delays in the hand (draws, promotions, replacements) are entries in
//! a `Timeline`. Only one entry runs at a time and entries are cancelled by
//! owner when the thing they would touch goes away.

pub mod queue;

pub use queue::{ticks, DueTask, TaskId, Timeline, TICKS_PER_SECOND};
