//! Axis-aligned bounding boxes
//!
//! A box is a center plus three half-extents. Its bounds on axis `c` are
//! `[center.c - extent_c, center.c + extent_c]`.
//!
//! The boundary policies differ between predicates:
//! - box/box: touching on x or y separates, touching on z intersects
//! - [`BoundingBox::intersects_point`]: open on x and y, half-open `(min, max]` on z
//! - [`BoundingBox::contains`]: closed on every axis

use super::error::{check_extent, Axis, VolumeError};
use super::face::{Face, FaceSet};
use super::ray::Ray;
use super::sphere::{sphere_box_overlap, BoundingSphere};
use crate::foundation::math::Vec3;

/// Corner indices of each face quad, in [`Face`] order
///
/// Corners are numbered as in [`BoundingBox::corners`]. Every quad winds
/// counter-clockwise seen from outside, so `(q1 - q0) x (q2 - q1)` points out.
const FACE_QUADS: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // front  (-z)
    [4, 5, 6, 7], // back   (+z)
    [0, 4, 7, 3], // left   (-x)
    [1, 2, 6, 5], // right  (+x)
    [3, 7, 6, 2], // top    (+y)
    [0, 1, 5, 4], // bottom (-y)
];

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// The center position of the box in world space
    pub center: Vec3,
    x_extent: f32,
    y_extent: f32,
    z_extent: f32,
}

/// Nearest face hit by a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxRayHit {
    /// Face that was hit
    pub face: Face,
    /// Parametric distance along the ray direction
    pub t: f32,
}

impl BoxRayHit {
    /// Point of intersection in world space
    pub fn point(&self, ray: &Ray) -> Vec3 {
        ray.point_at(self.t)
    }
}

impl BoundingBox {
    /// Create a box from its center and half-extents
    ///
    /// Fails if any extent is negative or NaN.
    pub fn new(center: Vec3, x_extent: f32, y_extent: f32, z_extent: f32) -> Result<Self, VolumeError> {
        Ok(Self {
            center,
            x_extent: check_extent(Axis::X, x_extent)?,
            y_extent: check_extent(Axis::Y, y_extent)?,
            z_extent: check_extent(Axis::Z, z_extent)?,
        })
    }

    /// Create a box from its center and a vector of half-extents
    pub fn from_extents(center: Vec3, extents: Vec3) -> Result<Self, VolumeError> {
        Self::new(center, extents.x, extents.y, extents.z)
    }

    /// Smallest box centered on the sphere that encloses it
    pub fn from_sphere(sphere: &BoundingSphere) -> Self {
        let radius = sphere.radius();
        Self {
            center: sphere.center,
            x_extent: radius,
            y_extent: radius,
            z_extent: radius,
        }
    }

    /// Half-width along x
    pub const fn x_extent(&self) -> f32 {
        self.x_extent
    }

    /// Half-width along y
    pub const fn y_extent(&self) -> f32 {
        self.y_extent
    }

    /// Half-width along z
    pub const fn z_extent(&self) -> f32 {
        self.z_extent
    }

    /// Half-widths as a vector
    pub fn extents(&self) -> Vec3 {
        Vec3::new(self.x_extent, self.y_extent, self.z_extent)
    }

    /// Change the x half-width
    pub fn set_x_extent(&mut self, value: f32) -> Result<(), VolumeError> {
        self.x_extent = check_extent(Axis::X, value)?;
        Ok(())
    }

    /// Change the y half-width
    pub fn set_y_extent(&mut self, value: f32) -> Result<(), VolumeError> {
        self.y_extent = check_extent(Axis::Y, value)?;
        Ok(())
    }

    /// Change the z half-width
    pub fn set_z_extent(&mut self, value: f32) -> Result<(), VolumeError> {
        self.z_extent = check_extent(Axis::Z, value)?;
        Ok(())
    }

    /// Change all half-widths at once; nothing changes if any is rejected
    pub fn set_extents(&mut self, extents: Vec3) -> Result<(), VolumeError> {
        let resized = Self::from_extents(self.center, extents)?;
        *self = resized;
        Ok(())
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        self.center - self.extents()
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        self.center + self.extents()
    }

    /// The eight corners
    ///
    /// Corners 0-3 lie on the min-z plane and 4-7 on the max-z plane, each
    /// ring ordered (min x, min y), (max x, min y), (max x, max y), (min x, max y).
    pub fn corners(&self) -> [Vec3; 8] {
        let min = self.min();
        let max = self.max();
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ]
    }

    /// Check if this box intersects another box
    ///
    /// Boxes touching along x or y do not intersect; boxes touching along z do.
    pub fn intersects_bounding_box(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        if a_max.x <= b_min.x || a_min.x >= b_max.x {
            return false;
        }
        if a_max.y <= b_min.y || a_min.y >= b_max.y {
            return false;
        }
        if a_max.z < b_min.z || a_min.z > b_max.z {
            return false;
        }
        true
    }

    /// Check if this box intersects a sphere (same test as the sphere side)
    pub fn intersects_bounding_sphere(&self, sphere: &BoundingSphere) -> bool {
        sphere_box_overlap(sphere, self)
    }

    /// Point test, exclusive on the x and y bounds and on the lower z bound
    pub fn intersects_point(&self, point: &Vec3) -> bool {
        let (min, max) = (self.min(), self.max());
        min.x < point.x
            && point.x < max.x
            && min.y < point.y
            && point.y < max.y
            && min.z < point.z
            && point.z <= max.z
    }

    /// Point test, inclusive on every bound
    pub fn contains(&self, point: &Vec3) -> bool {
        let (min, max) = (self.min(), self.max());
        min.x <= point.x
            && point.x <= max.x
            && min.y <= point.y
            && point.y <= max.y
            && min.z <= point.z
            && point.z <= max.z
    }

    /// Volume of the solid box
    pub fn volume(&self) -> f32 {
        (2.0 * self.x_extent) * (2.0 * self.y_extent) * (2.0 * self.z_extent)
    }

    /// Faces of this box whose plane has not moved past the opposite bound of `other`
    ///
    /// A cheap pre-filter before per-face work, not a contact manifold.
    pub fn intersecting_sides(&self, other: &Self) -> FaceSet {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        let mut sides = FaceSet::empty();
        sides.set(FaceSet::FRONT, a_min.z < b_max.z);
        sides.set(FaceSet::BACK, a_max.z > b_min.z);
        sides.set(FaceSet::LEFT, a_min.x < b_max.x);
        sides.set(FaceSet::RIGHT, a_max.x > b_min.x);
        sides.set(FaceSet::TOP, a_max.y > b_min.y);
        sides.set(FaceSet::BOTTOM, a_min.y < b_max.y);
        sides
    }

    /// Cast a ray against the six faces and return the nearest hit
    ///
    /// Each face is tested as a finite quad. A face is skipped when the ray
    /// is parallel to it, when the hit lies behind the origin, or when the ray
    /// passes outside (or exactly along an edge of) the quad. Equal distances
    /// resolve to the face that comes first in [`Face::ALL`].
    pub fn ray_cast_hit(&self, ray: &Ray) -> Option<BoxRayHit> {
        let corners = self.corners();

        let mut nearest: Option<BoxRayHit> = None;
        for face in Face::ALL {
            let quad = FACE_QUADS[face.index()].map(|i| corners[i]);
            let Some(t) = face_hit(&quad, ray) else {
                continue;
            };
            if nearest.map_or(true, |hit| t < hit.t) {
                nearest = Some(BoxRayHit { face, t });
            }
        }

        log::trace!("Box ray cast at {:?}: {:?}", self.center, nearest);
        nearest
    }

    /// Face hit first by the ray, `None` when the ray misses
    pub fn ray_cast(&self, ray: &Ray) -> Option<Face> {
        self.ray_cast_hit(ray).map(|hit| hit.face)
    }

    /// Whether the ray hits any face
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        self.ray_cast_hit(ray).is_some()
    }
}

/// Two boxes compare equal when their centers match
impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
    }
}

/// Parametric distance to a quad face, or `None` if the ray misses it
fn face_hit(quad: &[Vec3; 4], ray: &Ray) -> Option<f32> {
    // Zero-area faces have no usable normal
    let normal = (quad[1] - quad[0]).cross(&(quad[2] - quad[1])).try_normalize(0.0)?;

    let denom = ray.direction.dot(&normal);
    if denom == 0.0 {
        return None;
    }

    let t = (quad[0] - ray.origin).dot(&normal) / denom;
    if t.is_nan() || t < 0.0 {
        return None;
    }

    if !ray_passes_through(quad, ray) {
        return None;
    }
    Some(t)
}

/// Every edge must wind the same way around the ray's line
fn ray_passes_through(quad: &[Vec3; 4], ray: &Ray) -> bool {
    let to_corners = quad.map(|corner| corner - ray.origin);
    let winding = |i: usize| {
        let next = (i + 1) % 4;
        ray.direction.dot(&to_corners[i].cross(&to_corners[next]))
    };

    let first = winding(0);
    if first == 0.0 || first.is_nan() {
        return false;
    }
    (1..4).all(|i| {
        let s = winding(i);
        if first > 0.0 {
            s > 0.0
        } else {
            s < 0.0
        }
    })
}
