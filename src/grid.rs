//! Particle lattice layout: dimensions, flat indexing and anchor faces.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Lattice resolution along each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl GridDims {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        GridDims { nx, ny, nz }
    }

    pub fn cube(n: usize) -> Self {
        GridDims { nx: n, ny: n, nz: n }
    }

    /// Flat index of lattice coordinate (i, j, k): `i + nx * (j + ny * k)`.
    ///
    /// Both the particle layout and the spring builder go through this, so
    /// the two always agree.
    #[inline]
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.nx * (j + self.ny * k)
    }

    /// Inverse of [`GridDims::index`]. `None` when `index` is outside the
    /// lattice, which covers every index of a lattice with a zero axis.
    pub fn coords(&self, index: usize) -> Option<(usize, usize, usize)> {
        if index >= self.count() {
            return None;
        }
        let i = index % self.nx;
        let rest = index / self.nx;
        Some((i, rest % self.ny, rest / self.ny))
    }

    pub fn count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.nx == 0 || self.ny == 0 || self.nz == 0 {
            return Err(PhysicsError::InvalidGridDimensions {
                nx: self.nx,
                ny: self.ny,
                nz: self.nz,
            });
        }
        Ok(())
    }
}

/// The lattice face whose particles become anchors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnchorFace {
    /// Fully dynamic body.
    None,
    /// `j == ny - 1`.
    #[default]
    Top,
    /// `j == 0`.
    Bottom,
    /// `i == 0`.
    Left,
    /// `i == nx - 1`.
    Right,
    /// `k == 0`.
    Front,
    /// `k == nz - 1`.
    Back,
}

impl AnchorFace {
    pub fn contains(&self, dims: &GridDims, i: usize, j: usize, k: usize) -> bool {
        match self {
            AnchorFace::None => false,
            AnchorFace::Top => j == dims.ny - 1,
            AnchorFace::Bottom => j == 0,
            AnchorFace::Left => i == 0,
            AnchorFace::Right => i == dims.nx - 1,
            AnchorFace::Front => k == 0,
            AnchorFace::Back => k == dims.nz - 1,
        }
    }
}

/// Configuration for a particle lattice.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<F: Float> {
    pub dims: GridDims,
    pub spacing: F,
    pub mass_per_point: F,
    pub anchor_face: AnchorFace,
}

impl<F: Float> GridConfig<F> {
    pub fn new(dims: GridDims, spacing: F, mass_per_point: F) -> Self {
        GridConfig {
            dims,
            spacing,
            mass_per_point,
            anchor_face: AnchorFace::default(),
        }
    }

    pub fn with_anchor_face(mut self, face: AnchorFace) -> Self {
        self.anchor_face = face;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.dims.validate()?;
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return Err(PhysicsError::InvalidSpacing);
        }
        if !self.mass_per_point.is_finite() || self.mass_per_point <= F::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        Ok(())
    }
}

/// Lay out `nx * ny * nz` particles around `origin`.
///
/// The lattice is centered in X and Z and grows upward in Y from
/// `origin.y + spacing * (ny - 1) / 2`. Particles on the configured anchor
/// face are pinned where they are created.
pub fn build_particles<F: Float>(
    origin: Vec3<F>,
    config: &GridConfig<F>,
) -> Result<AllocVec<Particle<F>>, PhysicsError> {
    config.validate()?;

    let dims = config.dims;
    let s = config.spacing;
    let half = F::half();
    let corner = origin + Vec3::new(
        -half * s * (F::from_usize(dims.nx) - F::one()),
        half * s * (F::from_usize(dims.ny) - F::one()),
        -half * s * (F::from_usize(dims.nz) - F::one()),
    );

    let mut particles = AllocVec::with_capacity(dims.count());
    for k in 0..dims.nz {
        for j in 0..dims.ny {
            for i in 0..dims.nx {
                debug_assert_eq!(particles.len(), dims.index(i, j, k));
                let pos = corner + Vec3::new(
                    s * F::from_usize(i),
                    s * F::from_usize(j),
                    s * F::from_usize(k),
                );
                let particle = if config.anchor_face.contains(&dims, i, j, k) {
                    Particle::anchor(pos)
                } else {
                    Particle::new(pos, config.mass_per_point)
                };
                particles.push(particle);
            }
        }
    }

    Ok(particles)
}
