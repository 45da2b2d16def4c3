//! Error types for soft-body construction.

use thiserror::Error;

/// Errors raised while building or assembling a soft body.
///
/// Stepping never fails; only construction does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Every lattice axis needs at least one particle.
    #[error("grid dimensions must be at least 1 on every axis (got {nx}x{ny}x{nz})")]
    InvalidGridDimensions { nx: usize, ny: usize, nz: usize },
    /// Lattice spacing must be positive and finite.
    #[error("spacing must be positive and finite")]
    InvalidSpacing,
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Cube resolution must be at least 1.
    #[error("cube resolution must be at least 1")]
    InvalidResolution,
    /// Particle index is out of bounds.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
    /// The particle slice does not match the lattice it is wired as.
    #[error("lattice expects {expected} particles (got {actual})")]
    ParticleCountMismatch { expected: usize, actual: usize },
    /// A spring cannot join a particle to itself.
    #[error("spring endpoints must differ (both are {index})")]
    SelfSpring { index: usize },
}
