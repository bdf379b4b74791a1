//! Construction errors for bounding volumes

use std::fmt;

/// Coordinate axis, used to report which extent was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// Contract violations raised when building or resizing a volume
///
/// Degenerate geometry during queries is never an error; only sizes are
/// validated. Sizes are rejected rather than clamped.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum VolumeError {
    /// Sphere radius was negative or NaN
    #[error("bounding sphere radius must be non-negative, got {0}")]
    NegativeRadius(f32),

    /// Box half-extent was negative or NaN
    #[error("bounding box {axis} extent must be non-negative, got {value}")]
    NegativeExtent {
        /// Axis of the rejected extent
        axis: Axis,
        /// Rejected value
        value: f32,
    },
}

pub(crate) fn check_radius(radius: f32) -> Result<f32, VolumeError> {
    if radius.is_nan() || radius < 0.0 {
        return Err(VolumeError::NegativeRadius(radius));
    }
    Ok(radius)
}

pub(crate) fn check_extent(axis: Axis, value: f32) -> Result<f32, VolumeError> {
    if value.is_nan() || value < 0.0 {
        return Err(VolumeError::NegativeExtent { axis, value });
    }
    Ok(value)
}
