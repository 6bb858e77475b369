//! Viewing camera: turns screen points into world rays.

use bevy_math::Mat4;
use serde::{Deserialize, Serialize};

use crate::core::{Dir3, Ray3d, Vec2, Vec3};

/// Near clip distance of the projection.
const NEAR: f32 = 0.1;
/// Far clip distance of the projection.
const FAR: f32 = 1000.0;

/// Perspective camera looking at the playing field.
///
/// Right-handed, like the rest of `bevy_math`. Screen coordinates are pixels
/// with the origin at the bottom-left of the viewport; screen `x` maps to the
/// camera's right and screen `y` to its up. A camera looking straight down
/// has world `-z` as its screen up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    position: Vec3,
    world_from_view: Mat4,
    view_from_clip: Mat4,
    viewport: Vec2,
}

impl Camera {
    /// Build a camera at `eye` looking at `target`.
    ///
    /// Returns `None` if `eye == target`.
    #[must_use]
    pub fn look_at(eye: Vec3, target: Vec3, fov_y_degrees: f32, viewport: Vec2) -> Option<Self> {
        let forward = (target - eye).try_normalize()?;
        let up = if forward.dot(Vec3::Y).abs() > 0.999 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };

        let view = Mat4::look_at_rh(eye, target, up);
        let aspect = if viewport.x > 0.0 && viewport.y > 0.0 {
            viewport.x / viewport.y
        } else {
            1.0
        };
        let projection = Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect, NEAR, FAR);

        Some(Self {
            position: eye,
            world_from_view: view.inverse(),
            view_from_clip: projection.inverse(),
            viewport,
        })
    }

    /// Camera position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Screen-space center of the viewport.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    /// Ray from the camera through a screen point.
    ///
    /// Returns `None` for a zero-sized viewport.
    #[must_use]
    pub fn screen_point_to_ray(&self, screen: Vec2) -> Option<Ray3d> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }

        let ndc = screen / self.viewport * 2.0 - Vec2::ONE;
        // Unproject onto the near plane; in view space the eye is the origin.
        let on_near_plane = self.view_from_clip.project_point3(ndc.extend(0.0));
        let direction = Dir3::new(self.world_from_view.transform_vector3(on_near_plane)).ok()?;
        Some(Ray3d::new(self.position, direction))
    }
}
