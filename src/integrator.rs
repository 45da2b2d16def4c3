//! Classic 4th-order Runge-Kutta over joint (position, velocity) state.
//!
//! The state derivative is `(x', v') = (v, a(x, v))` where `a` is the force
//! evaluator. Pinned particles sit at their anchor with zero velocity in every
//! stage and are snapped back there after the update, so round-off can never
//! move an anchor.

use crate::float::Float;
use crate::force::compute_accelerations_into;
use crate::softbody::SoftBody;
use crate::vec::Vec3;
use crate::workspace::IntegrationWorkspace;

/// Advance `body` by one step of length `dt`.
///
/// Scratch state lives in `workspace`, which grows to fit the body on first
/// use and is reused afterwards. A non-positive or non-finite `dt`, or an
/// empty body, is a no-op.
pub fn integrate_rk4<F: Float>(body: &mut SoftBody<F>, dt: F, workspace: &mut IntegrationWorkspace<F>) {
    let count = body.particle_count();
    if count == 0 || !dt.is_finite() || dt <= F::zero() {
        return;
    }
    workspace.ensure_capacity(count);

    let IntegrationWorkspace { x0, v0, xs, vs, kx, kv } = workspace;
    let x0 = &mut x0[..count];
    let v0 = &mut v0[..count];
    let xs = &mut xs[..count];
    let vs = &mut vs[..count];

    // Stage 0
    for (i, p) in body.particles().iter().enumerate() {
        if p.is_pinned() {
            x0[i] = p.anchor_position;
            v0[i] = Vec3::zero();
        } else {
            x0[i] = p.position;
            v0[i] = p.velocity;
        }
    }

    // k1 = f(x0, v0)
    kx[0][..count].copy_from_slice(v0);
    compute_accelerations_into(body, x0, v0, &mut kv[0][..count]);

    // k2, k3 from the half step along the previous slope, k4 from the full step
    let half = dt * F::half();
    for (stage, h) in [(1, half), (2, half), (3, dt)] {
        let prev_kx = &kx[stage - 1][..count];
        let prev_kv = &kv[stage - 1][..count];
        for (i, p) in body.particles().iter().enumerate() {
            if p.is_pinned() {
                xs[i] = p.anchor_position;
                vs[i] = Vec3::zero();
            } else {
                xs[i] = x0[i].mul_add(prev_kx[i], h);
                vs[i] = v0[i].mul_add(prev_kv[i], h);
            }
        }
        kx[stage][..count].copy_from_slice(vs);
        compute_accelerations_into(body, xs, vs, &mut kv[stage][..count]);
    }

    // Weighted update
    let w = dt / F::six();
    let two = F::two();
    for (i, p) in body.particles_mut().iter_mut().enumerate() {
        if p.is_pinned() {
            p.hold();
            continue;
        }
        let dx = kx[0][i] + kx[1][i].scale(two) + kx[2][i].scale(two) + kx[3][i];
        let dv = kv[0][i] + kv[1][i].scale(two) + kv[2][i].scale(two) + kv[3][i];
        p.position = x0[i].mul_add(dx, w);
        p.velocity = v0[i].mul_add(dv, w);
    }
}
