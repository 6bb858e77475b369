//! Sides of a match.

use serde::{Deserialize, Serialize};

/// Which side owns a placed object.
///
/// Cards played from the local hand always belong to `Player`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The local player.
    #[default]
    Player,
    /// The opposing side.
    Opponent,
}

impl Faction {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Faction::Player => Faction::Opponent,
            Faction::Opponent => Faction::Player,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Player => write!(f, "Player"),
            Faction::Opponent => write!(f, "Opponent"),
        }
    }
}
