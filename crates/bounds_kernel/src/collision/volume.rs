//! Bounding volume dispatch
//!
//! The set of volume kinds is closed, so pair-wise intersection is a match
//! over both operands. The argument's kind picks the formula, run with the
//! receiver's data, and each pair of kinds has exactly one implementation.

use std::fmt;

use super::bounding_box::BoundingBox;
use super::face::Face;
use super::ray::Ray;
use super::sphere::BoundingSphere;
use crate::foundation::math::Vec3;

/// Kind of a bounding volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeKind {
    /// [`BoundingSphere`]
    Sphere,
    /// [`BoundingBox`]
    Box,
}

impl fmt::Display for VolumeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sphere => f.write_str("sphere"),
            Self::Box => f.write_str("box"),
        }
    }
}

/// Nearest ray hit on any kind of volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRayHit {
    /// Parametric distance of the first hit not behind the ray origin
    pub t: f32,
    /// Face that was hit, for boxes
    pub face: Option<Face>,
}

/// A sphere or axis-aligned box
#[derive(Debug, Clone, Copy)]
pub enum BoundingVolume {
    /// Radius-based volume
    Sphere(BoundingSphere),
    /// Axis-aligned half-extents volume
    Box(BoundingBox),
}

impl BoundingVolume {
    /// Kind of this volume
    pub const fn kind(&self) -> VolumeKind {
        match self {
            Self::Sphere(_) => VolumeKind::Sphere,
            Self::Box(_) => VolumeKind::Box,
        }
    }

    /// Center position
    pub const fn center(&self) -> Vec3 {
        match self {
            Self::Sphere(sphere) => sphere.center,
            Self::Box(bounds) => bounds.center,
        }
    }

    /// Move the center to a new position
    pub fn set_center(&mut self, center: Vec3) {
        match self {
            Self::Sphere(sphere) => sphere.center = center,
            Self::Box(bounds) => bounds.center = center,
        }
    }

    /// Move the center by an offset
    pub fn translate(&mut self, offset: Vec3) {
        let center = self.center() + offset;
        self.set_center(center);
    }

    /// Test if this volume intersects another volume
    pub fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => b.intersects_bounding_sphere(a),
            (Self::Sphere(sphere), Self::Box(bounds)) => bounds.intersects_bounding_sphere(sphere),
            (Self::Box(bounds), Self::Sphere(sphere)) => sphere.intersects_bounding_box(bounds),
            (Self::Box(a), Self::Box(b)) => b.intersects_bounding_box(a),
        }
    }

    /// Test if this volume intersects a sphere
    pub fn intersects_bounding_sphere(&self, sphere: &BoundingSphere) -> bool {
        match self {
            Self::Sphere(own) => own.intersects_bounding_sphere(sphere),
            Self::Box(own) => own.intersects_bounding_sphere(sphere),
        }
    }

    /// Test if this volume intersects a box
    pub fn intersects_bounding_box(&self, bounds: &BoundingBox) -> bool {
        match self {
            Self::Sphere(own) => own.intersects_bounding_box(bounds),
            Self::Box(own) => own.intersects_bounding_box(bounds),
        }
    }

    /// Test if a ray hits this volume
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        match self {
            Self::Sphere(sphere) => sphere.intersects_ray(ray),
            Self::Box(bounds) => bounds.intersects_ray(ray),
        }
    }

    /// Cast a ray, returning the first hit not behind the origin
    pub fn ray_cast(&self, ray: &Ray) -> Option<VolumeRayHit> {
        match self {
            Self::Sphere(sphere) => sphere.ray_cast(ray).map(|hit| VolumeRayHit {
                t: hit.entry(),
                face: None,
            }),
            Self::Box(bounds) => bounds.ray_cast_hit(ray).map(|hit| VolumeRayHit {
                t: hit.t,
                face: Some(hit.face),
            }),
        }
    }

    /// Parametric distance to the first hit, `None` on a miss
    pub fn ray_distance(&self, ray: &Ray) -> Option<f32> {
        self.ray_cast(ray).map(|hit| hit.t)
    }

    /// Lenient point test (see the per-kind boundary rules)
    pub fn intersects_point(&self, point: &Vec3) -> bool {
        match self {
            Self::Sphere(sphere) => sphere.intersects_point(point),
            Self::Box(bounds) => bounds.intersects_point(point),
        }
    }

    /// Membership test (see the per-kind boundary rules)
    pub fn contains(&self, point: &Vec3) -> bool {
        match self {
            Self::Sphere(sphere) => sphere.contains(point),
            Self::Box(bounds) => bounds.contains(point),
        }
    }

    /// Volume of the solid
    pub fn volume(&self) -> f32 {
        match self {
            Self::Sphere(sphere) => sphere.volume(),
            Self::Box(bounds) => bounds.volume(),
        }
    }

    /// Enclosing sphere (the sphere itself for spheres)
    pub fn to_bounding_sphere(&self) -> BoundingSphere {
        match self {
            Self::Sphere(sphere) => *sphere,
            Self::Box(bounds) => BoundingSphere::from_box(bounds),
        }
    }

    /// Enclosing box (the box itself for boxes)
    pub fn to_bounding_box(&self) -> BoundingBox {
        match self {
            Self::Sphere(sphere) => BoundingBox::from_sphere(sphere),
            Self::Box(bounds) => *bounds,
        }
    }
}

/// Volumes compare equal when they are the same kind with the same center
impl PartialEq for BoundingVolume {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.center() == other.center()
    }
}

impl From<BoundingSphere> for BoundingVolume {
    fn from(sphere: BoundingSphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<BoundingBox> for BoundingVolume {
    fn from(bounds: BoundingBox) -> Self {
        Self::Box(bounds)
    }
}
