//! Placement target resolution: screen point to field point.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use bevy_math::bounding::{Aabb3d, RayCast3d};
use bevy_math::primitives::InfinitePlane3d;

use crate::core::{Dir3, Layer, LayerMask, Ray3d, Vec2, Vec3};

use super::camera::Camera;

/// Source of the current pointer position in screen space.
///
/// The input layer owns the device; the hand only asks where the pointer is.
pub trait PointerService {
    /// Current pointer position in pixels.
    fn pointer_position(&self) -> Vec2;
}

/// Pointer position shared between the input layer and the hand.
///
/// Clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct SharedPointer(Rc<Cell<Vec2>>);

impl SharedPointer {
    /// Create a pointer at `position`.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self(Rc::new(Cell::new(position)))
    }

    /// Move the pointer.
    pub fn set(&self, position: Vec2) {
        self.0.set(position);
    }
}

impl PointerService for SharedPointer {
    fn pointer_position(&self) -> Vec2 {
        self.0.get()
    }
}

/// Collision shape of a piece of field geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Axis-aligned box.
    Box { min: Vec3, max: Vec3 },
    /// Horizontal rectangle at `center.y`, spanning `half_extents` in x and z.
    Quad { center: Vec3, half_extents: Vec2 },
}

/// A tagged piece of field geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldCollider {
    pub shape: ColliderShape,
    pub layer: Layer,
}

impl FieldCollider {
    /// Horizontal rectangle on `layer`.
    #[must_use]
    pub fn quad(center: Vec3, half_extents: Vec2, layer: Layer) -> Self {
        Self {
            shape: ColliderShape::Quad {
                center,
                half_extents,
            },
            layer,
        }
    }

    /// Axis-aligned box on `layer`. Corners may be given in any order.
    #[must_use]
    pub fn aabb(a: Vec3, b: Vec3, layer: Layer) -> Self {
        let min = Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let max = Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));
        Self {
            shape: ColliderShape::Box { min, max },
            layer,
        }
    }

    /// Distance along `ray` to the first intersection, if any.
    #[must_use]
    pub fn raycast(&self, ray: &Ray3d) -> Option<f32> {
        match self.shape {
            ColliderShape::Quad {
                center,
                half_extents,
            } => {
                let t = ray.intersect_plane(center, InfinitePlane3d { normal: Dir3::Y })?;
                let offset = ray.get_point(t) - center;
                let inside = offset.x.abs() <= half_extents.x && offset.z.abs() <= half_extents.y;
                inside.then_some(t)
            }
            ColliderShape::Box { min, max } => {
                let aabb = Aabb3d {
                    min: min.into(),
                    max: max.into(),
                };
                RayCast3d::from_ray(*ray, f32::MAX).aabb_intersection_at(&aabb)
            }
        }
    }
}

/// Resolves pointer positions to points on the playing field.
///
/// Stateless between calls: the same screen point always resolves to the
/// same field point.
#[derive(Clone, Debug)]
pub struct PlacementTargetResolver {
    camera: Camera,
    colliders: Vec<FieldCollider>,
}

impl PlacementTargetResolver {
    /// Create a resolver with no field geometry.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            colliders: Vec::new(),
        }
    }

    /// Add field geometry (builder pattern).
    #[must_use]
    pub fn with_collider(mut self, collider: FieldCollider) -> Self {
        self.colliders.push(collider);
        self
    }

    /// The viewing camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// First hit of `ray` on colliders whose layer is in `mask`.
    #[must_use]
    pub fn raycast(&self, ray: &Ray3d, mask: LayerMask) -> Option<Vec3> {
        self.colliders
            .iter()
            .filter(|c| mask.contains(c.layer))
            .filter_map(|c| c.raycast(ray))
            .min_by(f32::total_cmp)
            .map(|t| ray.get_point(t))
    }

    /// Resolve a screen point to a field point.
    ///
    /// `None` is the normal "not over the field" answer.
    #[must_use]
    pub fn resolve(&self, screen: Vec2, mask: LayerMask) -> Option<Vec3> {
        let ray = self.camera.screen_point_to_ray(screen)?;
        self.raycast(&ray, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::look_at(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::ZERO,
            90.0,
            Vec2::new(100.0, 100.0),
        )
        .unwrap()
    }

    fn field() -> FieldCollider {
        FieldCollider::quad(Vec3::ZERO, Vec2::new(5.0, 5.0), Layer::PLAYING_FIELD)
    }

    #[test]
    fn test_resolve_center() {
        let resolver = PlacementTargetResolver::new(camera()).with_collider(field());
        let hit = resolver
            .resolve(Vec2::new(50.0, 50.0), LayerMask::of(Layer::PLAYING_FIELD))
            .unwrap();
        assert!(hit.abs_diff_eq(Vec3::ZERO, 1e-4));
    }

    #[test]
    fn test_resolve_outside_field() {
        let resolver = PlacementTargetResolver::new(camera()).with_collider(field());
        // Screen edge looks 10 units out on a 10-high camera; the field is 5 wide.
        assert!(resolver
            .resolve(Vec2::new(100.0, 50.0), LayerMask::of(Layer::PLAYING_FIELD))
            .is_none());
    }

    #[test]
    fn test_mask_filters_layers() {
        let resolver = PlacementTargetResolver::new(camera()).with_collider(field());
        assert!(resolver
            .resolve(Vec2::new(50.0, 50.0), LayerMask::of(Layer::new(0)))
            .is_none());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let resolver = PlacementTargetResolver::new(camera())
            .with_collider(field())
            .with_collider(FieldCollider::aabb(
                Vec3::new(-1.0, 0.0, -1.0),
                Vec3::new(1.0, 2.0, 1.0),
                Layer::PLAYING_FIELD,
            ));

        let hit = resolver
            .resolve(Vec2::new(50.0, 50.0), LayerMask::of(Layer::PLAYING_FIELD))
            .unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-4));
    }

    #[test]
    fn test_box_miss_and_parallel() {
        let collider = FieldCollider::aabb(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0), Layer::PLAYING_FIELD);

        let away = Ray3d::new(Vec3::new(0.5, 5.0, 0.5), Dir3::Y);
        assert!(collider.raycast(&away).is_none());

        let beside = Ray3d::new(Vec3::new(3.0, 0.5, 0.5), Dir3::Z);
        assert!(collider.raycast(&beside).is_none());

        let through = Ray3d::new(Vec3::new(-2.0, 0.5, 0.5), Dir3::X);
        assert_eq!(collider.raycast(&through), Some(2.0));
    }

    #[test]
    fn test_shared_pointer() {
        let pointer = SharedPointer::new(Vec2::new(1.0, 2.0));
        let handle = pointer.clone();
        handle.set(Vec2::new(3.0, 4.0));
        assert_eq!(pointer.pointer_position(), Vec2::new(3.0, 4.0));
    }
}
