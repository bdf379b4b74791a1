//! Brute-force queries over a slice of volumes
//!
//! Every query visits each volume (or pair of volumes) once. There is no
//! spatial index; callers with many volumes should cull beforehand.

use super::face::Face;
use super::ray::Ray;
use super::volume::BoundingVolume;
use crate::foundation::math::Vec3;

/// Nearest volume hit by a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeHit {
    /// Index of the volume in the queried slice
    pub index: usize,
    /// Parametric distance along the ray direction
    pub t: f32,
    /// Face that was hit, for boxes
    pub face: Option<Face>,
}

/// Pair of intersecting volumes, stored as `(smaller index, larger index)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumePair {
    /// Smaller index
    pub a: usize,
    /// Larger index
    pub b: usize,
}

impl VolumePair {
    /// Create a pair (always stores the smaller index first for consistency)
    pub const fn new(a: usize, b: usize) -> Self {
        if a < b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }
}

/// Find the volume whose first hit is nearest the ray origin
///
/// Equal distances resolve to the lower index.
pub fn raycast_nearest(volumes: &[BoundingVolume], ray: &Ray) -> Option<VolumeHit> {
    let mut nearest: Option<VolumeHit> = None;
    for (index, volume) in volumes.iter().enumerate() {
        let Some(hit) = volume.ray_cast(ray) else {
            continue;
        };
        if nearest.map_or(true, |best| hit.t < best.t) {
            nearest = Some(VolumeHit {
                index,
                t: hit.t,
                face: hit.face,
            });
        }
    }
    nearest
}

/// All pairs `i < j` where `volumes[i]` intersects `volumes[j]`
pub fn overlapping_pairs(volumes: &[BoundingVolume]) -> Vec<VolumePair> {
    let mut pairs = Vec::new();
    for (i, a) in volumes.iter().enumerate() {
        for (j, b) in volumes.iter().enumerate().skip(i + 1) {
            if a.intersects(b) {
                pairs.push(VolumePair::new(i, j));
            }
        }
    }
    log::trace!("{} overlapping pairs among {} volumes", pairs.len(), volumes.len());
    pairs
}

/// Indices of the volumes that contain the point
pub fn volumes_containing(volumes: &[BoundingVolume], point: &Vec3) -> Vec<usize> {
    volumes
        .iter()
        .enumerate()
        .filter(|(_, volume)| volume.contains(point))
        .map(|(index, _)| index)
        .collect()
}
