//! 3D particle-spring soft body.

use crate::config::{CubeConfig, SoftBodyConfig};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::grid::{build_particles, GridConfig, GridDims};
use crate::network::build_springs;
use crate::particle::Particle;
use crate::spring::{Spring, SpringKind};
use crate::vec::Vec3;
use alloc::string::String;
use alloc::vec::Vec as AllocVec;

/// Squared distance below which a transform move is ignored.
const SYNC_EPSILON_SQ: f32 = 1e-10;

/// A lattice of particles held together by damped springs.
///
/// The body owns its particle and spring arrays outright. It is stepped with
/// [`crate::integrator::integrate_rk4`] and follows its owner's transform
/// through [`SoftBody::sync_with_transform`].
#[derive(Clone, Debug)]
pub struct SoftBody<F: Float> {
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<Spring<F>>,
    pub gravity: Vec3<F>,
    /// Copied into springs created after this is set.
    pub global_stiffness: F,
    /// Copied into springs created after this is set.
    pub global_damping: F,
    dims: Option<GridDims>,
    last_sync_position: Vec3<F>,
    name: Option<String>,
}

impl<F: Float> SoftBody<F> {
    /// Create an empty body for hand assembly.
    pub fn new(config: &SoftBodyConfig<F>) -> Self {
        SoftBody {
            particles: AllocVec::new(),
            springs: AllocVec::new(),
            gravity: config.gravity,
            global_stiffness: config.stiffness,
            global_damping: config.damping,
            dims: None,
            last_sync_position: Vec3::zero(),
            name: None,
        }
    }

    /// Build a lattice body around `origin` in a single pass.
    ///
    /// `origin` is taken as the owner's transform position, so the first
    /// sync against an unmoved transform is a no-op.
    pub fn lattice(
        origin: Vec3<F>,
        grid: &GridConfig<F>,
        config: &SoftBodyConfig<F>,
    ) -> Result<Self, PhysicsError> {
        let particles = build_particles(origin, grid)?;
        let springs = build_springs(grid.dims, &particles, config.stiffness, config.damping)?;
        Ok(SoftBody {
            particles,
            springs,
            gravity: config.gravity,
            global_stiffness: config.stiffness,
            global_damping: config.damping,
            dims: Some(grid.dims),
            last_sync_position: origin,
            name: None,
        })
    }

    /// Build an `n x n x n` cube.
    pub fn cube(config: &CubeConfig<F>) -> Result<Self, PhysicsError> {
        if config.resolution == 0 {
            return Err(PhysicsError::InvalidResolution);
        }
        let grid = GridConfig::new(
            GridDims::cube(config.resolution),
            config.spacing,
            config.mass_per_point(),
        )
        .with_anchor_face(config.anchor_face);
        let mut body = Self::lattice(config.position, &grid, &config.body)?;
        body.name = config.name.clone();
        Ok(body)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Append a particle and return its index.
    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Connect `a` and `b` with a spring at their current distance, using the
    /// body's current global stiffness and damping.
    pub fn add_spring(&mut self, a: usize, b: usize) -> Result<usize, PhysicsError> {
        let count = self.particles.len();
        for index in [a, b] {
            if index >= count {
                return Err(PhysicsError::ParticleOutOfBounds { index, count });
            }
        }
        if a == b {
            return Err(PhysicsError::SelfSpring { index: a });
        }
        let spring = Spring::between(
            a,
            b,
            self.particles[a].position,
            self.particles[b].position,
            self.global_stiffness,
            self.global_damping,
            SpringKind::Custom,
        );
        self.springs.push(spring);
        Ok(self.springs.len() - 1)
    }

    /// Pin or release particle `index`. Released particles get `mass`.
    pub fn set_anchor(&mut self, index: usize, anchored: bool, mass: F) -> Result<(), PhysicsError> {
        let count = self.particles.len();
        let p = self
            .particles
            .get_mut(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })?;
        if anchored {
            p.pin();
        } else {
            p.unpin(mass);
        }
        Ok(())
    }

    /// Rigidly follow the owner's transform.
    ///
    /// Every particle (anchored or not) and its anchor target is shifted by
    /// the distance the transform moved since the last sync. Returns whether
    /// anything moved.
    pub fn sync_with_transform(&mut self, transform_position: Vec3<F>) -> bool {
        let delta = transform_position - self.last_sync_position;
        if delta.length_sq() < F::from_f32(SYNC_EPSILON_SQ) {
            return false;
        }
        for p in self.particles.iter_mut() {
            p.translate(delta);
        }
        self.last_sync_position = transform_position;
        true
    }

    /// Reset the sync reference without moving any particle.
    pub fn set_last_sync_position(&mut self, position: Vec3<F>) {
        self.last_sync_position = position;
    }

    pub fn last_sync_position(&self) -> Vec3<F> { self.last_sync_position }
    pub fn dims(&self) -> Option<GridDims> { self.dims }
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn particles_mut(&mut self) -> &mut [Particle<F>] { &mut self.particles }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> { &mut self.particles[index] }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }

    /// Particle at lattice coordinate (i, j, k), for lattice bodies.
    pub fn particle_at(&self, i: usize, j: usize, k: usize) -> Option<&Particle<F>> {
        let dims = self.dims?;
        if i >= dims.nx || j >= dims.ny || k >= dims.nz {
            return None;
        }
        self.particles.get(dims.index(i, j, k))
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn velocities(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.velocity).collect()
    }

    /// Current signed strain of spring `index`.
    pub fn spring_strain(&self, index: usize) -> F {
        let s = &self.springs[index];
        s.strain_between(self.particles[s.a].position, self.particles[s.b].position)
    }

    /// Average particle position.
    pub fn centroid(&self) -> Vec3<F> {
        if self.particles.is_empty() {
            return Vec3::zero();
        }
        let sum = self.particles.iter().fold(Vec3::zero(), |acc, p| acc + p.position);
        sum.scale(F::one() / F::from_usize(self.particles.len()))
    }
}
