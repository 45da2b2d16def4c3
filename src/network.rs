//! Spring network over a particle lattice: structural, shear and bend springs.
//!
//! Every spring links a lattice cell only to neighbours in the "+1"
//! direction of each axis it spans. Back-edges are never generated, which is
//! what keeps each unordered pair from being connected twice.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::grid::GridDims;
use crate::particle::Particle;
use crate::spring::{Spring, SpringKind};
use alloc::vec::Vec as AllocVec;

/// Number of springs of each kind a lattice of given dimensions produces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SpringCounts {
    pub structural: usize,
    pub shear: usize,
    pub bend: usize,
}

impl SpringCounts {
    pub fn total(&self) -> usize {
        self.structural + self.shear + self.bend
    }
}

/// Closed-form spring counts for `dims`.
pub fn expected_spring_counts(dims: GridDims) -> SpringCounts {
    let (nx, ny, nz) = (dims.nx, dims.ny, dims.nz);
    if nx == 0 || ny == 0 || nz == 0 {
        return SpringCounts::default();
    }
    let (ex, ey, ez) = (nx - 1, ny - 1, nz - 1);
    SpringCounts {
        structural: ex * ny * nz + nx * ey * nz + nx * ny * ez,
        shear: 2 * (ex * ey * nz + ex * ny * ez + nx * ey * ez),
        bend: 4 * ex * ey * ez,
    }
}

/// Connect the lattice `particles` (laid out by `grid::build_particles` with
/// the same `dims`).
///
/// Rest lengths come from the particles' current positions; `stiffness` and
/// `damping` are copied into every spring. Fails if `particles` does not hold
/// exactly `dims.count()` entries.
pub fn build_springs<F: Float>(
    dims: GridDims,
    particles: &[Particle<F>],
    stiffness: F,
    damping: F,
) -> Result<AllocVec<Spring<F>>, PhysicsError> {
    if particles.len() != dims.count() {
        return Err(PhysicsError::ParticleCountMismatch {
            expected: dims.count(),
            actual: particles.len(),
        });
    }

    let mut springs = AllocVec::with_capacity(expected_spring_counts(dims).total());
    let mut link = |a: usize, b: usize, kind: SpringKind| {
        springs.push(Spring::between(
            a,
            b,
            particles[a].position,
            particles[b].position,
            stiffness,
            damping,
            kind,
        ));
    };
    let idx = |i, j, k| dims.index(i, j, k);

    for k in 0..dims.nz {
        for j in 0..dims.ny {
            for i in 0..dims.nx {
                let has_x = i + 1 < dims.nx;
                let has_y = j + 1 < dims.ny;
                let has_z = k + 1 < dims.nz;

                // Structural
                if has_x {
                    link(idx(i, j, k), idx(i + 1, j, k), SpringKind::Structural);
                }
                if has_y {
                    link(idx(i, j, k), idx(i, j + 1, k), SpringKind::Structural);
                }
                if has_z {
                    link(idx(i, j, k), idx(i, j, k + 1), SpringKind::Structural);
                }

                // Shear: both diagonals of each face square anchored at (i, j, k)
                if has_x && has_y {
                    link(idx(i, j, k), idx(i + 1, j + 1, k), SpringKind::Shear);
                    link(idx(i + 1, j, k), idx(i, j + 1, k), SpringKind::Shear);
                }
                if has_x && has_z {
                    link(idx(i, j, k), idx(i + 1, j, k + 1), SpringKind::Shear);
                    link(idx(i + 1, j, k), idx(i, j, k + 1), SpringKind::Shear);
                }
                if has_y && has_z {
                    link(idx(i, j, k), idx(i, j + 1, k + 1), SpringKind::Shear);
                    link(idx(i, j + 1, k), idx(i, j, k + 1), SpringKind::Shear);
                }

                // Bend: the four space diagonals of the 2x2x2 cell
                if has_x && has_y && has_z {
                    link(idx(i, j, k), idx(i + 1, j + 1, k + 1), SpringKind::Bend);
                    link(idx(i + 1, j, k), idx(i, j + 1, k + 1), SpringKind::Bend);
                    link(idx(i, j + 1, k), idx(i + 1, j, k + 1), SpringKind::Bend);
                    link(idx(i, j, k + 1), idx(i + 1, j + 1, k), SpringKind::Bend);
                }
            }
        }
    }

    Ok(springs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{build_particles, GridConfig};
    use crate::vec::Vec3;

    fn lattice(nx: usize, ny: usize, nz: usize) -> AllocVec<Spring<f32>> {
        let dims = GridDims::new(nx, ny, nz);
        let particles = build_particles(Vec3::zero(), &GridConfig::new(dims, 1.0, 1.0)).unwrap();
        build_springs(dims, &particles, 100.0, 8.0).unwrap()
    }

    #[test]
    fn unit_cell_connects_every_pair() {
        // 8 corners, C(8, 2) = 28 pairs: 12 edges, 12 face diagonals, 4 body diagonals
        let springs = lattice(2, 2, 2);
        assert_eq!(springs.len(), 28);
        assert_eq!(expected_spring_counts(GridDims::cube(2)),
            SpringCounts { structural: 12, shear: 12, bend: 4 });
    }

    #[test]
    fn single_particle_has_no_springs() {
        assert!(lattice(1, 1, 1).is_empty());
    }

    #[test]
    fn line_has_only_structural() {
        let springs = lattice(5, 1, 1);
        assert_eq!(springs.len(), 4);
        assert!(springs.iter().all(|s| s.kind == SpringKind::Structural));
    }

    #[test]
    fn rest_lengths_by_kind() {
        let sqrt2 = 2.0f32.sqrt();
        let sqrt3 = 3.0f32.sqrt();
        for s in lattice(3, 3, 3) {
            let expected = match s.kind {
                SpringKind::Structural => 1.0,
                SpringKind::Shear => sqrt2,
                SpringKind::Bend => sqrt3,
                SpringKind::Custom => unreachable!(),
            };
            assert!((s.rest_length - expected).abs() < 1e-5, "{:?}", s);
        }
    }

    #[test]
    fn short_particle_slice_rejected() {
        let dims = GridDims::cube(3);
        let particles = build_particles(Vec3::zero(), &GridConfig::new(GridDims::cube(2), 1.0f32, 1.0)).unwrap();
        assert_eq!(
            build_springs(dims, &particles, 100.0, 8.0),
            Err(PhysicsError::ParticleCountMismatch { expected: 27, actual: 8 }),
        );
    }

    #[test]
    fn globals_copied_into_springs() {
        for s in lattice(2, 3, 2) {
            assert_eq!(s.stiffness, 100.0);
            assert_eq!(s.damping, 8.0);
        }
    }
}
