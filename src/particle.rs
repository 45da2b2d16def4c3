//! Lattice particles with explicit position/velocity state.

use crate::float::Float;
use crate::vec::Vec3;

/// A point mass in the lattice.
///
/// Unlike a Verlet particle the velocity is stored explicitly, since RK4
/// integrates position and velocity as one joint state.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
    /// Zero means immovable.
    pub inv_mass: F,
    pub is_anchor: bool,
    /// Pin target for anchors. For free particles it only tracks rigid shifts
    /// applied by the transform sync.
    pub anchor_position: Vec3<F>,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest. A near-zero `mass` yields an immovable one.
    pub fn new(position: Vec3<F>, mass: F) -> Self {
        let inv_mass = if mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
        Particle {
            position,
            velocity: Vec3::zero(),
            inv_mass,
            is_anchor: false,
            anchor_position: position,
        }
    }

    /// An anchor pinned at `position`.
    pub fn anchor(position: Vec3<F>) -> Self {
        Particle {
            position,
            velocity: Vec3::zero(),
            inv_mass: F::zero(),
            is_anchor: true,
            anchor_position: position,
        }
    }

    /// Pinned particles are held at `anchor_position` and never integrated.
    pub fn is_pinned(&self) -> bool {
        self.is_anchor || self.inv_mass == F::zero()
    }

    /// Turn into an anchor at the current position.
    pub fn pin(&mut self) {
        self.is_anchor = true;
        self.inv_mass = F::zero();
        self.velocity = Vec3::zero();
        self.anchor_position = self.position;
    }

    pub fn unpin(&mut self, mass: F) {
        self.is_anchor = false;
        self.inv_mass = if mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
    }

    /// Snap a pinned particle onto its anchor with zero velocity.
    pub fn hold(&mut self) {
        self.position = self.anchor_position;
        self.velocity = Vec3::zero();
    }

    /// Rigidly move the particle and its anchor target by `delta`.
    pub fn translate(&mut self, delta: Vec3<F>) {
        self.position += delta;
        self.anchor_position += delta;
    }

    pub fn speed(&self) -> F {
        self.velocity.length()
    }
}
