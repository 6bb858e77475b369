//! Card system: definitions, drawn instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Placeables and their offsets
//! - `CardInstance`: A drawn card on the dashboard
//! - `CardRegistry`: Card definition lookup

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId, PlaceableData, PrefabId};
pub use instance::{CardInstance, InstanceId};
pub use registry::CardRegistry;
