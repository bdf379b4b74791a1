//! Rays for ray casting and picking

use crate::foundation::math::Vec3;

/// A ray for ray casting and picking
///
/// The direction is stored exactly as given. Hit parameters are measured in
/// multiples of `direction`, so they are Euclidean distances only for unit
/// directions. A zero direction yields degenerate (no hit) results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (not required to be normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray with a unit-length direction
    pub fn normalized(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at parameter t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
