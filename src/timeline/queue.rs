//! Cancellable delayed-action queue on a virtual clock.
//!
//! Actions are scheduled with a delay and an owner key. `pop_due` hands
//! them back one at a time in deadline order (FIFO between equal
//! deadlines), moving the clock to each action's deadline so that work
//! scheduled from inside an action is timed relative to it.
//!
//! The clock counts whole microsecond ticks. Every delay and every frame
//! step is rounded to ticks once, so `0.8 + 0.4` seconds scheduled in two
//! steps lands on the same tick as a single `1.2` second advance.

use serde::{Deserialize, Serialize};

/// Clock resolution.
pub const TICKS_PER_SECOND: u64 = 1_000_000;

/// Convert seconds to clock ticks, rounding to the nearest tick.
///
/// Negative and NaN inputs become zero.
///
/// ```
/// use royale_hand::timeline::{ticks, TICKS_PER_SECOND};
///
/// assert_eq!(ticks(3.6), 3_600_000);
/// assert_eq!(ticks(0.8) + ticks(0.4), ticks(1.2));
/// assert_eq!(ticks(-1.0), 0);
/// assert_eq!(ticks(1.0), TICKS_PER_SECOND);
/// ```
#[must_use]
pub fn ticks(seconds: f32) -> u64 {
    let seconds = f64::from(seconds.max(0.0));
    (seconds * TICKS_PER_SECOND as f64).round() as u64
}

/// Identifier of a scheduled action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// A scheduled action that has come due.
#[derive(Clone, Debug, PartialEq)]
pub struct DueTask<K, A> {
    pub id: TaskId,
    pub owner: K,
    /// Tick the action was due at.
    pub due: u64,
    pub action: A,
}

#[derive(Clone, Debug)]
struct Entry<K, A> {
    id: TaskId,
    owner: K,
    due: u64,
    action: A,
}

/// Single-threaded timeline of delayed actions.
///
/// ## Usage
///
/// ```
/// use royale_hand::timeline::{ticks, Timeline};
///
/// let mut timeline: Timeline<&str, u32> = Timeline::new();
/// timeline.schedule("a", 0.5, 1);
/// timeline.schedule("b", 0.2, 2);
///
/// let first = timeline.pop_due(ticks(1.0)).unwrap();
/// assert_eq!(first.action, 2);
/// assert_eq!(timeline.now_ticks(), ticks(0.2));
/// ```
#[derive(Clone, Debug)]
pub struct Timeline<K, A> {
    now: u64,
    entries: Vec<Entry<K, A>>,
    next_id: u64,
}

impl<K, A> Default for Timeline<K, A> {
    fn default() -> Self {
        Self {
            now: 0,
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: Copy + PartialEq, A> Timeline<K, A> {
    /// Create an empty timeline at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time in ticks.
    #[must_use]
    pub fn now_ticks(&self) -> u64 {
        self.now
    }

    /// Current clock time in seconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now as f64 / TICKS_PER_SECOND as f64
    }

    /// Schedule `action` to run `delay` seconds from now.
    ///
    /// Negative delays are treated as zero.
    pub fn schedule(&mut self, owner: K, delay: f32, action: A) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        self.entries.push(Entry {
            id,
            owner,
            due: self.now.saturating_add(ticks(delay)),
            action,
        });
        id
    }

    /// Cancel every action belonging to `owner`. Returns how many were dropped.
    pub fn cancel_owner(&mut self, owner: K) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.owner != owner);
        before - self.entries.len()
    }

    /// Cancel everything. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pending actions for `owner`.
    #[must_use]
    pub fn pending_for(&self, owner: K) -> usize {
        self.entries.iter().filter(|e| e.owner == owner).count()
    }

    /// Remove and return the earliest action due at or before tick `until`.
    ///
    /// The clock moves to that action's deadline. Returns `None` when
    /// nothing is due; the clock is left unchanged in that case.
    pub fn pop_due(&mut self, until: u64) -> Option<DueTask<K, A>> {
        let index = self.earliest()?;
        if self.entries[index].due > until {
            return None;
        }

        let entry = self.entries.remove(index);
        self.now = self.now.max(entry.due);
        Some(DueTask {
            id: entry.id,
            owner: entry.owner,
            due: entry.due,
            action: entry.action,
        })
    }

    /// Move the clock forward to tick `time`. Never moves it backwards.
    pub fn advance_to(&mut self, time: u64) {
        self.now = self.now.max(time);
    }

    fn earliest(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)
    }
}
