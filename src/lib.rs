//! Particle-spring lattice soft bodies, integrated with RK4 on a fixed timestep.
//!
//! `softlattice` builds `nx x ny x nz` particle lattices wired with structural,
//! shear and bend springs, and advances them with classic 4th-order
//! Runge-Kutta. One face of the lattice can be anchored to an owner transform
//! that the body rigidly follows.
//!
//! # Features
//!
//! - **Lattice builder**: flat `i + nx * (j + ny * k)` indexing, selectable anchor face
//! - **Spring network**: forward-only ("+1") connectivity, never a duplicate pair
//! - **Pure force evaluator**: gravity + damped Hooke springs over explicit snapshots
//! - **RK4 integrator**: scratch buffers in an explicit, grow-only workspace
//! - **Fixed-step scheduler**: accumulator with frame-hitch clamping
//! - **Debug-draw contract**: strain-colored springs and speed-colored particles
//! - **`no_std` compatible**: only `alloc` is required
//!
//! ```
//! use softlattice::{CubeConfig, NoOpStepObserver, SoftBodyWorld, Vec3};
//!
//! let mut world = SoftBodyWorld::<f32>::default();
//! let cube = world.spawn_cube(&CubeConfig::new(4).with_name("jelly")).unwrap();
//!
//! world.set_transform(cube, Vec3::new(0.0, 0.5, 0.0));
//! world.update(1.0 / 60.0, &mut NoOpStepObserver);
//!
//! let body = world.body(cube).unwrap();
//! assert!(body.particles().iter().filter(|p| p.is_anchor).all(|p| p.velocity == Vec3::zero()));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod grid;
pub mod network;
pub mod softbody;
pub mod force;
pub mod workspace;
pub mod integrator;
pub mod scheduler;
pub mod world;
pub mod debug_draw;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::Particle;
pub use spring::{Spring, SpringKind};
pub use grid::{build_particles, AnchorFace, GridConfig, GridDims};
pub use network::{build_springs, expected_spring_counts, SpringCounts};
pub use softbody::SoftBody;
pub use force::{compute_accelerations, compute_accelerations_into};
pub use workspace::IntegrationWorkspace;
pub use integrator::integrate_rk4;
pub use scheduler::FixedStepScheduler;
pub use world::{SoftBodyEntry, SoftBodyHandle, SoftBodyWorld};
pub use debug_draw::{draw_soft_body, Color, DebugDrawSink, DebugDrawStyle};
pub use observer::{StepObserver, NoOpStepObserver};
pub use config::{CubeConfig, SchedulerConfig, SoftBodyConfig};
pub use error::PhysicsError;
