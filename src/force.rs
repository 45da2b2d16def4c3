//! Force evaluation: gravity plus damped Hookean springs.
//!
//! The evaluator only reads the body's topology and parameters. Positions and
//! velocities come in as explicit snapshots, so the integrator can sample the
//! derivative at any RK4 stage without touching live particle state.

use crate::float::Float;
use crate::softbody::SoftBody;
use crate::vec::Vec3;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Springs shorter than this have no usable direction and are skipped.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Write one acceleration per particle into `out`.
///
/// All three slices must hold exactly `body.particle_count()` entries.
/// Pinned particles always receive zero.
pub fn compute_accelerations_into<F: Float>(
    body: &SoftBody<F>,
    positions: &[Vec3<F>],
    velocities: &[Vec3<F>],
    out: &mut [Vec3<F>],
) {
    let particles = body.particles();
    debug_assert_eq!(positions.len(), particles.len());
    debug_assert_eq!(velocities.len(), particles.len());
    debug_assert_eq!(out.len(), particles.len());

    for (acc, p) in out.iter_mut().zip(particles) {
        *acc = if p.is_pinned() { Vec3::zero() } else { body.gravity };
    }

    let min_len = F::from_f32(DEGENERATE_LENGTH);
    for spring in body.springs() {
        let (a, b) = (spring.a, spring.b);
        let delta = positions[b] - positions[a];
        let len = delta.length();
        if len < min_len {
            continue;
        }

        let dir = delta.scale(F::one() / len);
        let stretch = len - spring.rest_length;
        let rel_speed = (velocities[b] - velocities[a]).dot(dir);
        let force = dir.scale(-spring.stiffness * stretch - spring.damping * rel_speed);

        let pb = &particles[b];
        if !pb.is_pinned() {
            out[b] += force.scale(pb.inv_mass);
        }
        let pa = &particles[a];
        if !pa.is_pinned() {
            out[a] -= force.scale(pa.inv_mass);
        }
    }
}

/// Allocating form of [`compute_accelerations_into`].
pub fn compute_accelerations<F: Float>(
    body: &SoftBody<F>,
    positions: &[Vec3<F>],
    velocities: &[Vec3<F>],
) -> AllocVec<Vec3<F>> {
    let mut out = vec![Vec3::zero(); body.particle_count()];
    compute_accelerations_into(body, positions, velocities, &mut out);
    out
}
