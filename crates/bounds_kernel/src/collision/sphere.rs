//! Bounding spheres
//!
//! Point tests are deliberately asymmetric on the surface: a surface point
//! intersects the sphere but is not contained by it.

use super::bounding_box::BoundingBox;
use super::error::{check_radius, VolumeError};
use super::ray::Ray;
use crate::foundation::math::{constants, distance_squared, Vec3};

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    radius: f32,
}

/// Both roots of a ray/sphere hit, in parametric units of the ray direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereRayHit {
    /// Smaller root; negative when the ray starts inside the sphere
    pub near: f32,
    /// Larger root, always non-negative for a reported hit
    pub far: f32,
}

impl SphereRayHit {
    /// First root that is not behind the ray origin
    pub fn entry(&self) -> f32 {
        if self.near >= 0.0 {
            self.near
        } else {
            self.far
        }
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    ///
    /// Fails for a negative or NaN radius.
    pub fn new(center: Vec3, radius: f32) -> Result<Self, VolumeError> {
        Ok(Self {
            center,
            radius: check_radius(radius)?,
        })
    }

    /// Smallest sphere centered on the box that encloses it
    ///
    /// The radius is the box's half diagonal.
    pub fn from_box(bounds: &BoundingBox) -> Self {
        Self {
            center: bounds.center,
            radius: bounds.extents().magnitude(),
        }
    }

    /// Sphere radius
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Change the radius, rejecting negative or NaN values
    pub fn set_radius(&mut self, radius: f32) -> Result<(), VolumeError> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    /// Check if this sphere intersects with another
    ///
    /// Touching spheres intersect.
    pub fn intersects_bounding_sphere(&self, other: &Self) -> bool {
        let radius_sum = self.radius + other.radius;
        distance_squared(&self.center, &other.center) <= radius_sum * radius_sum
    }

    /// Check if this sphere intersects a box
    ///
    /// This is the per-axis test against the box grown by the radius, so it
    /// reports hits near box corners slightly before the true surfaces meet.
    pub fn intersects_bounding_box(&self, bounds: &BoundingBox) -> bool {
        sphere_box_overlap(self, bounds)
    }

    /// Boundary-inclusive point test
    pub fn intersects_point(&self, point: &Vec3) -> bool {
        distance_squared(&self.center, point) <= self.radius * self.radius
    }

    /// Boundary-exclusive point test
    pub fn contains(&self, point: &Vec3) -> bool {
        distance_squared(&self.center, point) < self.radius * self.radius
    }

    /// Volume of the solid sphere
    pub fn volume(&self) -> f32 {
        constants::FOUR_THIRDS_PI * self.radius * self.radius * self.radius
    }

    /// Get the penetration depth if intersecting (0.0 if not intersecting)
    pub fn penetration_depth(&self, other: &Self) -> f32 {
        let distance = (self.center - other.center).magnitude();
        let radius_sum = self.radius + other.radius;
        if distance < radius_sum {
            radius_sum - distance
        } else {
            0.0
        }
    }

    /// Test ray intersection with this sphere
    ///
    /// Returns both roots when the far root is not behind the ray origin.
    /// Degenerate input (zero direction, NaN roots) reports no hit.
    pub fn ray_cast(&self, ray: &Ray) -> Option<SphereRayHit> {
        // Work relative to the sphere center
        let origin = ray.origin - self.center;

        let a = ray.direction.dot(&ray.direction);
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * ray.direction.dot(&origin);
        let c = origin.dot(&origin) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let dist = discriminant.sqrt();
        let q = if b < 0.0 { (-b - dist) / 2.0 } else { (-b + dist) / 2.0 };

        // q / a and c / q are the two roots; q == 0 is left unguarded
        let mut t0 = q / a;
        let mut t1 = c / q;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t1 >= 0.0 {
            Some(SphereRayHit { near: t0, far: t1 })
        } else {
            None
        }
    }

    /// Whether the ray hits the sphere at all
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        self.ray_cast(ray).is_some()
    }
}

/// Two spheres compare equal when their centers match
impl PartialEq for BoundingSphere {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
    }
}

pub(crate) fn sphere_box_overlap(sphere: &BoundingSphere, bounds: &BoundingBox) -> bool {
    let offset = sphere.center - bounds.center;
    let reach = bounds.extents().add_scalar(sphere.radius);
    offset.x.abs() <= reach.x && offset.y.abs() <= reach.y && offset.z.abs() <= reach.z
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sphere(x: f32, y: f32, z: f32, radius: f32) -> BoundingSphere {
        BoundingSphere::new(Vec3::new(x, y, z), radius).unwrap()
    }

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vec3::zeros(), 1.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert_eq!(
            BoundingSphere::new(Vec3::zeros(), -1.0),
            Err(VolumeError::NegativeRadius(-1.0))
        );
        assert!(BoundingSphere::new(Vec3::zeros(), f32::NAN).is_err());
        assert!(BoundingSphere::new(Vec3::zeros(), 0.0).is_ok());
    }

    #[test]
    fn test_set_radius_validates() {
        let mut s = sphere(0.0, 0.0, 0.0, 1.0);
        s.set_radius(4.0).unwrap();
        assert_eq!(s.radius(), 4.0);
        assert!(s.set_radius(-0.5).is_err());
        assert_eq!(s.radius(), 4.0);
    }

    #[test]
    fn test_sphere_sphere_touching_and_symmetric() {
        let a = sphere(0.0, 0.0, 0.0, 1.0);
        let b = sphere(3.0, 0.0, 0.0, 2.0);
        let c = sphere(3.1, 0.0, 0.0, 2.0);
        assert!(a.intersects_bounding_sphere(&b));
        assert!(b.intersects_bounding_sphere(&a));
        assert!(!a.intersects_bounding_sphere(&c));
        assert!(!c.intersects_bounding_sphere(&a));
    }

    #[test]
    fn test_sphere_sphere_symmetry_grid() {
        let spheres: Vec<BoundingSphere> = (0..6)
            .map(|i| {
                let f = i as f32;
                sphere(f * 0.7 - 2.0, f * f * 0.1, 1.0 - f * 0.3, 0.25 + f * 0.2)
            })
            .collect();
        for a in &spheres {
            for b in &spheres {
                assert_eq!(a.intersects_bounding_sphere(b), b.intersects_bounding_sphere(a));
            }
        }
    }

    #[test]
    fn test_sphere_box_corner_is_conservative() {
        let bounds = unit_box();
        // Distance to the corner (1,1,1) is about 0.69, greater than the radius
        let near_corner = sphere(1.4, 1.4, 1.4, 0.5);
        assert!(near_corner.intersects_bounding_box(&bounds));
        assert!(bounds.intersects_bounding_sphere(&near_corner));

        let apart = sphere(1.6, 0.0, 0.0, 0.5);
        assert!(!apart.intersects_bounding_box(&bounds));

        let touching = sphere(1.5, 0.0, 0.0, 0.5);
        assert!(touching.intersects_bounding_box(&bounds));
    }

    #[test]
    fn test_point_surface_asymmetry() {
        let s = sphere(0.0, 0.0, 0.0, 2.0);
        let surface = Vec3::new(0.0, 2.0, 0.0);
        assert!(s.intersects_point(&surface));
        assert!(!s.contains(&surface));

        let inside = Vec3::new(0.5, 0.5, 0.5);
        assert!(s.contains(&inside));
        assert!(s.intersects_point(&inside));

        let outside = Vec3::new(2.0, 2.0, 0.0);
        assert!(!s.contains(&outside));
        assert!(!s.intersects_point(&outside));
    }

    #[test]
    fn test_contains_implies_intersects() {
        let s = sphere(1.0, -1.0, 0.5, 1.5);
        for i in -8..=8 {
            for j in -8..=8 {
                let p = Vec3::new(1.0 + i as f32 * 0.25, -1.0 + j as f32 * 0.25, 0.5);
                if s.contains(&p) {
                    assert!(s.intersects_point(&p));
                }
            }
        }
    }

    #[test]
    fn test_volume() {
        for r in [0.0_f32, 1.0, 1000.0] {
            let expected = 4.0 / 3.0 * std::f32::consts::PI * r * r * r;
            assert_relative_eq!(sphere(0.0, 0.0, 0.0, r).volume(), expected, max_relative = 1e-4);
        }
    }

    #[test]
    fn test_ray_hits_from_outside() {
        let s = sphere(0.0, 0.0, 0.0, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = s.ray_cast(&ray).unwrap();
        assert_relative_eq!(hit.near, 4.0, epsilon = 1e-5);
        assert_relative_eq!(hit.far, 6.0, epsilon = 1e-5);
        assert_relative_eq!(hit.entry(), 4.0, epsilon = 1e-5);
        assert!(s.intersects_ray(&ray));
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let s = sphere(0.0, 0.0, 0.0, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(s.ray_cast(&ray).is_none());
        assert!(!s.intersects_ray(&ray));
    }

    #[test]
    fn test_ray_from_inside_hits_far_root() {
        let s = sphere(0.0, 0.0, 0.0, 1.0);
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        let hit = s.ray_cast(&ray).unwrap();
        assert!(hit.near < 0.0);
        assert_relative_eq!(hit.entry(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_unnormalized_direction_scales_parameter() {
        let s = sphere(0.0, 0.0, 10.0, 1.0);
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 2.0));
        let hit = s.ray_cast(&ray).unwrap();
        assert_relative_eq!(hit.near, 4.5, epsilon = 1e-5);
        assert_relative_eq!(hit.far, 5.5, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_misses_offset_sphere() {
        let s = sphere(0.0, 3.0, 0.0, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!s.intersects_ray(&ray));
    }

    #[test]
    fn test_zero_direction_is_no_hit() {
        let s = sphere(0.0, 0.0, 0.0, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::zeros());
        assert_eq!(s.ray_cast(&ray), None);
        assert!(!s.intersects_ray(&ray));

        // Origin inside the sphere must not turn a zero direction into a hit either
        let inside = Ray::new(Vec3::new(0.0, 0.0, 0.5), Vec3::zeros());
        assert_eq!(s.ray_cast(&inside), None);
    }

    #[test]
    fn test_penetration_depth() {
        let a = sphere(0.0, 0.0, 0.0, 1.0);
        let b = sphere(1.5, 0.0, 0.0, 1.0);
        assert_relative_eq!(a.penetration_depth(&b), 0.5);
        let c = sphere(5.0, 0.0, 0.0, 1.0);
        assert_eq!(a.penetration_depth(&c), 0.0);
    }

    #[test]
    fn test_from_box_encloses_corners() {
        let bounds = BoundingBox::new(Vec3::new(1.0, 2.0, 3.0), 1.0, 2.0, 2.0).unwrap();
        let s = BoundingSphere::from_box(&bounds);
        assert_eq!(s.center, bounds.center);
        assert_relative_eq!(s.radius(), 3.0);
        for corner in bounds.corners() {
            assert!(s.intersects_point(&corner));
        }
    }

    #[test]
    fn test_equality_compares_center_only() {
        assert_eq!(sphere(1.0, 2.0, 3.0, 1.0), sphere(1.0, 2.0, 3.0, 5.0));
        assert_ne!(sphere(1.0, 2.0, 3.0, 1.0), sphere(1.0, 2.0, 3.5, 1.0));
    }
}
