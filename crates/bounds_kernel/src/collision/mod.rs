//! Bounding volumes and their intersection queries
//!
//! # Module Organization
//!
//! - [`ray`] - Rays with unnormalized directions
//! - [`sphere`] - Bounding spheres and the ray/sphere root solver
//! - [`bounding_box`] - Axis-aligned boxes and the six-face ray cast
//! - [`volume`] - The closed set of volume kinds and pair-wise dispatch
//! - [`face`] - Box face labels and face sets
//! - [`query`] - Brute-force queries over many volumes
//! - [`error`] - Construction errors
//!
//! Degenerate geometry is never an error: parallel rays, zero directions and
//! degenerate roots all read as "no hit".

pub mod bounding_box;
pub mod error;
pub mod face;
pub mod query;
pub mod ray;
pub mod sphere;
pub mod volume;

// Re-export commonly used types
pub use bounding_box::{BoundingBox, BoxRayHit};
pub use error::{Axis, VolumeError};
pub use face::{Face, FaceSet};
pub use query::{overlapping_pairs, raycast_nearest, volumes_containing, VolumeHit, VolumePair};
pub use ray::Ray;
pub use sphere::{BoundingSphere, SphereRayHit};
pub use volume::{BoundingVolume, VolumeKind, VolumeRayHit};
