//! Scene descriptions
//!
//! A scene is a list of volumes plus the rays and points to probe them
//! with. Descriptions are plain serde data loaded through [`Config`]; building
//! a [`Scene`] validates every volume through the checked constructors.

use serde::{Deserialize, Serialize};

use crate::collision::{
    overlapping_pairs, raycast_nearest, volumes_containing, BoundingBox, BoundingSphere, BoundingVolume, Ray,
    VolumeError, VolumeHit, VolumePair,
};
use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec3;

/// Serialized form of a single volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VolumeDescription {
    /// Sphere with a center and radius
    Sphere {
        /// Center position
        center: [f32; 3],
        /// Radius, must be non-negative
        radius: f32,
    },
    /// Axis-aligned box with a center and half-extents
    Box {
        /// Center position
        center: [f32; 3],
        /// Half-widths along x, y and z, each non-negative
        extents: [f32; 3],
    },
}

impl VolumeDescription {
    /// Build the volume, validating its size
    pub fn build(&self) -> Result<BoundingVolume, VolumeError> {
        match self {
            Self::Sphere { center, radius } => {
                Ok(BoundingSphere::new(Vec3::from(*center), *radius)?.into())
            }
            Self::Box { center, extents } => {
                Ok(BoundingBox::from_extents(Vec3::from(*center), Vec3::from(*extents))?.into())
            }
        }
    }
}

/// Serialized form of a ray
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayDescription {
    /// Ray origin
    pub origin: [f32; 3],
    /// Ray direction, used as given
    pub direction: [f32; 3],
}

impl RayDescription {
    /// Build the ray
    pub fn build(&self) -> Ray {
        Ray::new(Vec3::from(self.origin), Vec3::from(self.direction))
    }
}

/// A scene file: volumes plus the rays and points to probe them with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Volumes in the scene
    #[serde(default)]
    pub volumes: Vec<VolumeDescription>,
    /// Rays to cast
    #[serde(default)]
    pub rays: Vec<RayDescription>,
    /// Points to test for containment
    #[serde(default)]
    pub points: Vec<[f32; 3]>,
}

impl Config for SceneDescription {}

impl SceneDescription {
    /// Validate every volume and build the scene
    pub fn build(&self) -> Result<Scene, SceneError> {
        let volumes = self
            .volumes
            .iter()
            .enumerate()
            .map(|(index, description)| {
                description.build().map_err(|source| {
                    log::warn!("Rejected volume #{index}: {source}");
                    SceneError::InvalidVolume { index, source }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            volumes,
            rays: self.rays.iter().map(RayDescription::build).collect(),
            points: self.points.iter().copied().map(Vec3::from).collect(),
        })
    }
}

/// Validated scene ready for queries
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Volumes in the scene
    pub volumes: Vec<BoundingVolume>,
    /// Rays to cast
    pub rays: Vec<Ray>,
    /// Points to test for containment
    pub points: Vec<Vec3>,
}

impl Scene {
    /// Load and build a scene from a `.toml` or `.ron` file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, SceneError> {
        SceneDescription::load_from_file(path)?.build()
    }

    /// Nearest hit for every ray, in ray order
    pub fn cast_rays(&self) -> Vec<Option<VolumeHit>> {
        self.rays.iter().map(|ray| raycast_nearest(&self.volumes, ray)).collect()
    }

    /// All intersecting volume pairs
    pub fn overlapping_pairs(&self) -> Vec<VolumePair> {
        overlapping_pairs(&self.volumes)
    }

    /// Indices of the containing volumes for every point, in point order
    pub fn point_memberships(&self) -> Vec<Vec<usize>> {
        self.points
            .iter()
            .map(|point| volumes_containing(&self.volumes, point))
            .collect()
    }
}

/// Scene loading errors
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Scene file could not be read or parsed
    #[error("Scene config error: {0}")]
    Config(#[from] ConfigError),

    /// A volume failed validation
    #[error("Volume #{index} is invalid: {source}")]
    InvalidVolume {
        /// Position of the volume in the description
        index: usize,
        /// Validation failure
        source: VolumeError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{Axis, Face};
    use crate::config::ConfigFormat;

    const SCENE_RON: &str = r#"(
        volumes: [
            Box(center: (0.0, 0.0, 0.0), extents: (1.0, 1.0, 1.0)),
            Sphere(center: (0.0, 0.0, 1.5), radius: 1.0),
        ],
        rays: [
            (origin: (0.0, 0.0, -5.0), direction: (0.0, 0.0, 1.0)),
            (origin: (0.0, 0.0, -5.0), direction: (0.0, 1.0, 0.0)),
        ],
        points: [(0.0, 0.0, 0.75), (9.0, 9.0, 9.0)],
    )"#;

    const SCENE_TOML: &str = r#"
        volumes = [
            { Sphere = { center = [0.0, 0.0, 0.0], radius = 2.0 } },
        ]

        [[rays]]
        origin = [0.0, 0.0, -5.0]
        direction = [0.0, 0.0, -1.0]
    "#;

    #[test]
    fn test_ron_scene_queries() {
        let scene = SceneDescription::from_str_as(SCENE_RON, ConfigFormat::Ron)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(scene.volumes.len(), 2);

        let hits = scene.cast_rays();
        let first = hits[0].unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.face, Some(Face::Front));
        assert_eq!(hits[1], None);

        assert_eq!(scene.overlapping_pairs(), vec![VolumePair::new(0, 1)]);
        assert_eq!(scene.point_memberships(), vec![vec![0, 1], vec![]]);
    }

    #[test]
    fn test_toml_scene_defaults() {
        let description = SceneDescription::from_str_as(SCENE_TOML, ConfigFormat::Toml).unwrap();
        assert!(description.points.is_empty());
        let scene = description.build().unwrap();
        assert_eq!(scene.cast_rays(), vec![None]);
    }

    #[test]
    fn test_invalid_volume_reports_index() {
        let description = SceneDescription {
            volumes: vec![
                VolumeDescription::Sphere { center: [0.0; 3], radius: 1.0 },
                VolumeDescription::Box { center: [0.0; 3], extents: [1.0, 1.0, -2.0] },
            ],
            ..Default::default()
        };
        match description.build() {
            Err(SceneError::InvalidVolume { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, VolumeError::NegativeExtent { axis: Axis::Z, value: -2.0 });
            }
            other => panic!("expected invalid volume, got {other:?}"),
        }
    }

    #[test]
    fn test_save_and_reload_description() {
        let description = SceneDescription::from_str_as(SCENE_RON, ConfigFormat::Ron).unwrap();
        let text = description.to_string_as(ConfigFormat::Ron).unwrap();
        let reloaded = SceneDescription::from_str_as(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(reloaded, description);
    }

    #[test]
    fn test_load_unsupported_extension() {
        assert!(matches!(
            Scene::load("scene.json"),
            Err(SceneError::Config(ConfigError::UnsupportedFormat(_)))
        ));
    }
}
