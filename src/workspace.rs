//! Scratch arena for RK4 stage buffers.

use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Per-slot scratch arrays reused across every integration call.
///
/// Capacity only ever grows, to the largest particle count seen so far, so
/// stepping a body never allocates once the arena has warmed up. Bodies that
/// share a workspace must be stepped one after another; give each body its
/// own workspace to step them in parallel.
#[derive(Clone, Debug, Default)]
pub struct IntegrationWorkspace<F: Float> {
    pub(crate) x0: AllocVec<Vec3<F>>,
    pub(crate) v0: AllocVec<Vec3<F>>,
    /// Intermediate stage state fed to the force evaluator.
    pub(crate) xs: AllocVec<Vec3<F>>,
    pub(crate) vs: AllocVec<Vec3<F>>,
    /// Stage derivatives: position slope (a velocity) and velocity slope
    /// (an acceleration) for k1..k4.
    pub(crate) kx: [AllocVec<Vec3<F>>; 4],
    pub(crate) kv: [AllocVec<Vec3<F>>; 4],
}

impl<F: Float> IntegrationWorkspace<F> {
    pub fn new() -> Self {
        IntegrationWorkspace {
            x0: AllocVec::new(),
            v0: AllocVec::new(),
            xs: AllocVec::new(),
            vs: AllocVec::new(),
            kx: Default::default(),
            kv: Default::default(),
        }
    }

    /// Pre-size for `count` particles.
    pub fn with_capacity(count: usize) -> Self {
        let mut ws = Self::new();
        ws.ensure_capacity(count);
        ws
    }

    /// Number of particle slots currently available.
    pub fn capacity(&self) -> usize {
        self.x0.len()
    }

    /// Grow every buffer to at least `count` slots. Never shrinks.
    ///
    /// Allocation failure aborts the process through the global allocator.
    pub fn ensure_capacity(&mut self, count: usize) {
        if self.x0.len() >= count {
            return;
        }
        log::debug!(
            "growing integration workspace from {} to {} particles",
            self.x0.len(),
            count
        );
        let buffers = [&mut self.x0, &mut self.v0, &mut self.xs, &mut self.vs]
            .into_iter()
            .chain(self.kx.iter_mut())
            .chain(self.kv.iter_mut());
        for buf in buffers {
            buf.resize(count, Vec3::zero());
        }
    }
}
