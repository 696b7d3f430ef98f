//! Error types for world construction and parameter updates.

use core::fmt;

/// Errors that can occur when building entities or updating world parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// Radius must be positive and finite.
    InvalidRadius,
    /// Mass must be positive and finite.
    InvalidMass,
    /// Restitution must be in (0, 1].
    InvalidBounce,
    /// Obstacle extents must be positive and finite.
    InvalidExtents,
    /// Rotation must be finite.
    InvalidRotation,
    /// Position components must be finite.
    InvalidPosition,
    /// Gravity magnitude must be finite.
    InvalidGravity,
    /// World bounds must be positive and finite.
    InvalidBounds,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidRadius => write!(f, "radius must be positive and finite"),
            SimError::InvalidMass => write!(f, "mass must be positive and finite"),
            SimError::InvalidBounce => write!(f, "bounce factor must be in (0, 1]"),
            SimError::InvalidExtents => write!(f, "extents must be positive and finite"),
            SimError::InvalidRotation => write!(f, "rotation must be finite"),
            SimError::InvalidPosition => write!(f, "position must be finite"),
            SimError::InvalidGravity => write!(f, "gravity must be finite"),
            SimError::InvalidBounds => write!(f, "world bounds must be positive and finite"),
        }
    }
}

impl std::error::Error for SimError {}
