//! Step observer trait for monitoring the per-frame simulation pipeline.

/// Hooks into [`crate::world::SoftBodyWorld::update`].
///
/// Implement this to monitor the pipeline (debug overlays, profiling, test
/// probes). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after a body followed its owner's transform. `body` is the
    /// handle's slot index; `moved` is false when the transform had not
    /// changed.
    fn on_anchor_sync(&mut self, _body: usize, _moved: bool) {}

    /// Called after every body was advanced by sub-step `index`.
    fn on_substep(&mut self, _index: usize) {}

    /// Called when the frame is complete, with the number of sub-steps run.
    fn on_frame_complete(&mut self, _substeps: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
