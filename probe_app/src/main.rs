//! Scene probe
//!
//! Loads a scene description and logs the nearest hit for every ray, every
//! overlapping pair of volumes and the volumes containing every point.
//!
//! ```text
//! probe scenes/unit_box.ron
//! RUST_LOG=trace probe scenes/stacked.toml
//! ```

use bounds_kernel::foundation::logging;
use bounds_kernel::scene::{Scene, SceneError};

#[derive(thiserror::Error, Debug)]
enum ProbeError {
    #[error("usage: probe <scene.toml|scene.ron>")]
    Usage,

    #[error(transparent)]
    Scene(#[from] SceneError),
}

fn main() {
    logging::init("info");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ProbeError> {
    let path = std::env::args().nth(1).ok_or(ProbeError::Usage)?;
    let scene = Scene::load(&path)?;
    log::info!(
        "Loaded {}: {} volumes, {} rays, {} points",
        path,
        scene.volumes.len(),
        scene.rays.len(),
        scene.points.len()
    );

    for (volume_index, volume) in scene.volumes.iter().enumerate() {
        log::info!(
            "Volume #{volume_index}: {} at {:?}, volume {:.3}",
            volume.kind(),
            volume.center(),
            volume.volume()
        );
    }

    for (ray, hit) in scene.rays.iter().zip(scene.cast_rays()) {
        match hit {
            Some(hit) => log::info!(
                "Ray {:?} -> {:?}: volume #{} at t = {:.3}, face {:?}, point {:?}",
                ray.origin,
                ray.direction,
                hit.index,
                hit.t,
                hit.face,
                ray.point_at(hit.t)
            ),
            None => log::info!("Ray {:?} -> {:?}: no hit", ray.origin, ray.direction),
        }
    }

    let pairs = scene.overlapping_pairs();
    if pairs.is_empty() {
        log::info!("No overlapping volumes");
    }
    for pair in pairs {
        log::info!("Volumes #{} and #{} overlap", pair.a, pair.b);
    }

    for (point, members) in scene.points.iter().zip(scene.point_memberships()) {
        log::info!("Point {:?} is contained by {:?}", point, members);
    }

    Ok(())
}
