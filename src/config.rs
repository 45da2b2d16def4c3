//! Configuration types for soft bodies and the fixed-step scheduler.

use crate::float::Float;
use crate::grid::AnchorFace;
use crate::vec::Vec3;
use alloc::string::String;

/// Body-wide physical parameters.
///
/// # Builder Pattern
/// ```
/// use softlattice::config::SoftBodyConfig;
/// use softlattice::vec::Vec3;
///
/// let config: SoftBodyConfig<f32> = SoftBodyConfig::new()
///     .with_gravity(Vec3::new(0.0, -10.0, 0.0))
///     .with_stiffness(250.0)
///     .with_damping(4.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SoftBodyConfig<F: Float> {
    /// Gravity acceleration. Default: (0, -9.81, 0).
    pub gravity: Vec3<F>,
    /// Hooke stiffness copied into each spring at construction. Default: 100.
    pub stiffness: F,
    /// Spring damping copied into each spring at construction. Default: 8.
    pub damping: F,
}

impl<F: Float> SoftBodyConfig<F> {
    pub fn new() -> Self {
        SoftBodyConfig {
            gravity: Vec3::new(F::zero(), F::from_f32(-9.81), F::zero()),
            stiffness: F::from_f32(100.0),
            damping: F::from_f32(8.0),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }
}

impl<F: Float> Default for SoftBodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for the convenience "n x n x n cube" constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeConfig<F: Float> {
    /// Particles per axis.
    pub resolution: usize,
    /// World position of the owning transform.
    pub position: Vec3<F>,
    pub name: Option<String>,
    pub body: SoftBodyConfig<F>,
    /// Default: 0.15.
    pub spacing: F,
    /// Total mass spread evenly over all particles. `None` means `12.5 * n^2`.
    pub total_mass: Option<F>,
    pub anchor_face: AnchorFace,
}

impl<F: Float> CubeConfig<F> {
    pub fn new(resolution: usize) -> Self {
        CubeConfig {
            resolution,
            position: Vec3::zero(),
            name: None,
            body: SoftBodyConfig::new(),
            spacing: F::from_f32(0.15),
            total_mass: None,
            anchor_face: AnchorFace::Top,
        }
    }

    pub fn with_position(mut self, position: Vec3<F>) -> Self {
        self.position = position;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_body(mut self, body: SoftBodyConfig<F>) -> Self {
        self.body = body;
        self
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_total_mass(mut self, total_mass: F) -> Self {
        self.total_mass = Some(total_mass);
        self
    }

    pub fn with_anchor_face(mut self, face: AnchorFace) -> Self {
        self.anchor_face = face;
        self
    }

    /// Mass of each particle: total mass divided by `n^3`.
    pub fn mass_per_point(&self) -> F {
        let n = F::from_usize(self.resolution);
        let total = self
            .total_mass
            .unwrap_or_else(|| F::from_f32(12.5) * n * n);
        total / (n * n * n)
    }
}

/// Smallest fixed step a scheduler will run with, in seconds.
pub const MIN_FIXED_STEP: f32 = 1e-6;

/// Fixed-step scheduling parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SchedulerConfig<F: Float> {
    /// Length of one integration sub-step. Default: 1/120 s.
    pub fixed_step: F,
    /// Frame deltas above this are clamped. Default: 0.1 s.
    pub max_frame_dt: F,
}

impl<F: Float> SchedulerConfig<F> {
    pub fn new() -> Self {
        SchedulerConfig {
            fixed_step: F::one() / F::from_f32(120.0),
            max_frame_dt: F::from_f32(0.1),
        }
    }

    /// Set the sub-step length. Non-finite values keep the default and
    /// anything below [`MIN_FIXED_STEP`] is raised to it.
    pub fn with_fixed_step(mut self, fixed_step: F) -> Self {
        self.fixed_step = Self::usable_step(fixed_step);
        self
    }

    /// Set the frame cap. Non-finite values keep the default, negative ones
    /// become zero.
    pub fn with_max_frame_dt(mut self, max_frame_dt: F) -> Self {
        self.max_frame_dt = Self::usable_frame_cap(max_frame_dt);
        self
    }

    /// This config with both fields forced into range, for values set
    /// directly on the public fields.
    pub fn sanitized(self) -> Self {
        SchedulerConfig {
            fixed_step: Self::usable_step(self.fixed_step),
            max_frame_dt: Self::usable_frame_cap(self.max_frame_dt),
        }
    }

    pub fn is_valid(&self) -> bool {
        *self == self.sanitized()
    }

    fn usable_step(fixed_step: F) -> F {
        if fixed_step.is_finite() {
            fixed_step.max(F::from_f32(MIN_FIXED_STEP))
        } else {
            Self::new().fixed_step
        }
    }

    fn usable_frame_cap(max_frame_dt: F) -> F {
        if max_frame_dt.is_finite() {
            max_frame_dt.max(F::zero())
        } else {
            Self::new().max_frame_dt
        }
    }
}

impl<F: Float> Default for SchedulerConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
