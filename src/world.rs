//! Per-frame driver for a set of soft bodies.

use crate::config::{CubeConfig, SchedulerConfig};
use crate::debug_draw::{draw_soft_body, DebugDrawSink, DebugDrawStyle};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::integrator::integrate_rk4;
use crate::observer::StepObserver;
use crate::scheduler::FixedStepScheduler;
use crate::softbody::SoftBody;
use crate::vec::Vec3;
use crate::workspace::IntegrationWorkspace;
use alloc::vec::Vec as AllocVec;

/// Identifier of a body spawned into a [`SoftBodyWorld`].
///
/// A handle stops resolving once its body is despawned, even after the slot
/// is reused by a later spawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SoftBodyHandle {
    index: usize,
    generation: u32,
}

impl SoftBodyHandle {
    pub fn index(&self) -> usize { self.index }
    pub fn generation(&self) -> u32 { self.generation }
}

/// A soft body together with the position of the transform that owns it.
#[derive(Clone, Debug)]
pub struct SoftBodyEntry<F: Float> {
    pub body: SoftBody<F>,
    pub transform: Vec3<F>,
}

#[derive(Clone, Debug)]
struct Slot<F: Float> {
    generation: u32,
    entry: Option<SoftBodyEntry<F>>,
}

/// Owns soft bodies and steps them on a fixed timestep.
///
/// All bodies share one [`IntegrationWorkspace`], sized to the largest body.
/// Freed slots are reused under a new generation.
pub struct SoftBodyWorld<F: Float> {
    slots: AllocVec<Slot<F>>,
    workspace: IntegrationWorkspace<F>,
    scheduler: FixedStepScheduler<F>,
}

impl<F: Float> SoftBodyWorld<F> {
    pub fn new(config: SchedulerConfig<F>) -> Self {
        SoftBodyWorld {
            slots: AllocVec::new(),
            workspace: IntegrationWorkspace::new(),
            scheduler: FixedStepScheduler::new(config),
        }
    }

    /// Add a body. Its owner transform starts at the body's last sync
    /// position, so it does not jump on the next update.
    pub fn spawn(&mut self, body: SoftBody<F>) -> SoftBodyHandle {
        let transform = body.last_sync_position();
        log::debug!(
            "spawning soft body {:?} ({} particles, {} springs)",
            body.name(),
            body.particle_count(),
            body.spring_count()
        );
        let entry = Some(SoftBodyEntry { body, transform });
        match self.slots.iter().position(|s| s.entry.is_none()) {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.entry = entry;
                SoftBodyHandle { index, generation: slot.generation }
            }
            None => {
                self.slots.push(Slot { generation: 0, entry });
                SoftBodyHandle { index: self.slots.len() - 1, generation: 0 }
            }
        }
    }

    /// Build an `n x n x n` cube and spawn it.
    pub fn spawn_cube(&mut self, config: &CubeConfig<F>) -> Result<SoftBodyHandle, PhysicsError> {
        let body = SoftBody::cube(config)?;
        Ok(self.spawn(body))
    }

    pub fn despawn(&mut self, handle: SoftBodyHandle) -> Option<SoftBody<F>> {
        let slot = self.slot_mut(handle)?;
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        log::debug!("despawned soft body {:?}", entry.body.name());
        Some(entry.body)
    }

    pub fn body(&self, handle: SoftBodyHandle) -> Option<&SoftBody<F>> {
        self.entry(handle).map(|e| &e.body)
    }

    pub fn body_mut(&mut self, handle: SoftBodyHandle) -> Option<&mut SoftBody<F>> {
        self.slot_mut(handle)?.entry.as_mut().map(|e| &mut e.body)
    }

    pub fn entry(&self, handle: SoftBodyHandle) -> Option<&SoftBodyEntry<F>> {
        self.slots
            .get(handle.index)
            .filter(|s| s.generation == handle.generation)?
            .entry
            .as_ref()
    }

    fn slot_mut(&mut self, handle: SoftBodyHandle) -> Option<&mut Slot<F>> {
        self.slots
            .get_mut(handle.index)
            .filter(|s| s.generation == handle.generation)
    }

    /// Move the owner transform. Takes effect on the next [`update`](Self::update).
    pub fn set_transform(&mut self, handle: SoftBodyHandle, position: Vec3<F>) -> bool {
        match self.slot_mut(handle).and_then(|s| s.entry.as_mut()) {
            Some(entry) => {
                entry.transform = position;
                true
            }
            None => false,
        }
    }

    /// Run one frame: sync every body to its transform once, then advance
    /// all bodies by however many fixed sub-steps `dt` pays for.
    ///
    /// Returns the number of sub-steps taken.
    pub fn update<O: StepObserver>(&mut self, dt: F, observer: &mut O) -> usize {
        let substeps = self.scheduler.advance(dt);

        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(entry) = &mut slot.entry {
                let moved = entry.body.sync_with_transform(entry.transform);
                observer.on_anchor_sync(index, moved);
            }
        }

        let step = self.scheduler.fixed_step();
        for sub in 0..substeps {
            for entry in self.slots.iter_mut().filter_map(|s| s.entry.as_mut()) {
                integrate_rk4(&mut entry.body, step, &mut self.workspace);
            }
            observer.on_substep(sub);
        }

        log::trace!("frame dt {:?}: {} sub-steps over {} bodies", dt, substeps, self.len());
        observer.on_frame_complete(substeps);
        substeps
    }

    /// Emit debug primitives for every body.
    pub fn debug_draw<S: DebugDrawSink<F>>(&self, style: &DebugDrawStyle<F>, sink: &mut S) {
        for entry in self.iter() {
            draw_soft_body(&entry.body, style, sink);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SoftBodyEntry<F>> {
        self.slots.iter().filter_map(|s| s.entry.as_ref())
    }

    pub fn handles(&self) -> impl Iterator<Item = SoftBodyHandle> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.entry.is_some())
            .map(|(index, s)| SoftBodyHandle { index, generation: s.generation })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn scheduler(&self) -> &FixedStepScheduler<F> { &self.scheduler }
    pub fn scheduler_mut(&mut self) -> &mut FixedStepScheduler<F> { &mut self.scheduler }
    pub fn workspace(&self) -> &IntegrationWorkspace<F> { &self.workspace }
}

impl<F: Float> Default for SoftBodyWorld<F> {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
