//! Math utilities and types
//!
//! The kernel works in single precision. [`Vec3`] is the nalgebra vector type
//! and supplies every vector operation the bounding volumes rely on.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 4/3 * Pi, the sphere volume factor
    pub const FOUR_THIRDS_PI: f32 = 4.0 / 3.0 * PI;
}

/// Squared Euclidean distance between two points
#[inline]
pub fn distance_squared(a: &Vec3, b: &Vec3) -> f32 {
    (a - b).magnitude_squared()
}
