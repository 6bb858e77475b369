//! Placement: where on the field a dragged card would land.
//!
//! - `Camera`: screen point to world ray
//! - `PlacementTargetResolver`: ray against field colliders filtered by layer
//! - `PointerService`: injected pointer position
//! - `PreviewProjector`: ghost objects following the pointer
//! - `CardPlaced`: the event a successful drop produces

pub mod camera;
pub mod event;
pub mod preview;
pub mod resolver;

pub use camera::Camera;
pub use event::CardPlaced;
pub use preview::{PreviewObject, PreviewProjector};
pub use resolver::{
    ColliderShape, FieldCollider, PlacementTargetResolver, PointerService, SharedPointer,
};
