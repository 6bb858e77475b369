//! Core types: configuration, errors, factions and seeded RNG.
//!
//! Vector and ray types come from `bevy_math` and are re-exported here so the
//! rest of the crate names them through `core`.
//!
//! Everything here is independent of the hand state machine; the
//! `cards`, `deck`, `placement` and `hand` modules build on it.

pub mod config;
pub mod error;
pub mod faction;
pub mod rng;

pub use bevy_math::{Dir3, Ray3d, Vec2, Vec3};
pub use config::{HandConfig, Layer, LayerMask, SlotId};
pub use error::{HandError, Result};
pub use faction::Faction;
pub use rng::GameRng;
