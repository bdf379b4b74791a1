//! # Bounds Kernel
//!
//! Bounding volume queries for a 3D game engine: ray casts, overlap tests,
//! point containment and volumes for spheres and axis-aligned boxes.
//!
//! ## Features
//!
//! - **Ray casting**: nearest-face ray casts against boxes, root solving for spheres
//! - **Pair-wise overlap**: every sphere/box pairing through one dispatch point
//! - **Point tests**: lenient `intersects_point` and strict-or-inclusive `contains`
//! - **Scene files**: TOML or RON scene descriptions for batch probing
//!
//! ## Quick Start
//!
//! ```rust
//! use bounds_kernel::prelude::*;
//!
//! let bounds = BoundingBox::new(Vec3::zeros(), 1.0, 1.0, 1.0)?;
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
//! assert_eq!(bounds.ray_cast(&ray), Some(Face::Front));
//!
//! let sphere = BoundingSphere::new(Vec3::new(0.0, 0.0, 1.5), 1.0)?;
//! assert!(BoundingVolume::from(bounds).intersects(&sphere.into()));
//! # Ok::<(), VolumeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod collision;
pub mod config;
pub mod foundation;
pub mod scene;

/// Common imports for kernel users
pub mod prelude {
    pub use crate::{
        collision::{
            BoundingBox, BoundingSphere, BoundingVolume, BoxRayHit, Face, FaceSet, Ray, SphereRayHit,
            VolumeError, VolumeHit, VolumeKind,
        },
        config::{Config, ConfigError},
        foundation::math::Vec3,
        scene::{Scene, SceneDescription, SceneError},
    };
}
