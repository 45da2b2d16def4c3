//! Fixed-timestep accumulator turning variable frame times into sub-steps.

use crate::config::SchedulerConfig;
use crate::float::Float;

/// Accumulates frame time and pays it out in whole fixed steps.
///
/// ```
/// use softlattice::scheduler::FixedStepScheduler;
///
/// let mut scheduler = FixedStepScheduler::<f32>::default();
/// // 30 ms at 120 Hz owes three sub-steps, the remainder carries over
/// assert_eq!(scheduler.advance(0.03), 3);
/// assert!(scheduler.accumulator() < scheduler.fixed_step());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStepScheduler<F: Float> {
    accumulator: F,
    config: SchedulerConfig<F>,
}

impl<F: Float> FixedStepScheduler<F> {
    /// Out-of-range config values are replaced, see
    /// [`SchedulerConfig::sanitized`].
    pub fn new(config: SchedulerConfig<F>) -> Self {
        if !config.is_valid() {
            log::warn!("scheduler config {:?} out of range, sanitizing", config);
        }
        FixedStepScheduler {
            accumulator: F::zero(),
            config: config.sanitized(),
        }
    }

    /// Feed one frame's `dt` and return how many fixed steps are now due.
    ///
    /// `dt` is clamped to `max_frame_dt` so a long hitch cannot trigger a
    /// runaway catch-up; negative and non-finite values count as zero. A step
    /// is only paid out while the accumulator strictly exceeds the fixed
    /// step, so a frame of exactly one fixed step leaves it pending.
    pub fn advance(&mut self, dt: F) -> usize {
        let mut frame_dt = if dt.is_finite() { dt.max(F::zero()) } else { F::zero() };
        if frame_dt > self.config.max_frame_dt {
            log::warn!(
                "frame dt {:?} exceeds {:?}, clamping",
                dt,
                self.config.max_frame_dt
            );
            frame_dt = self.config.max_frame_dt;
        }

        self.accumulator = self.accumulator + frame_dt;
        let mut steps = 0;
        while self.accumulator > self.config.fixed_step {
            let next = self.accumulator - self.config.fixed_step;
            // Step lost below the accumulator's precision
            if next >= self.accumulator {
                break;
            }
            self.accumulator = next;
            steps += 1;
        }
        steps
    }

    /// Leftover time as a fraction of one fixed step, for render blending.
    pub fn alpha(&self) -> F {
        self.accumulator / self.config.fixed_step
    }

    pub fn reset(&mut self) {
        self.accumulator = F::zero();
    }

    pub fn accumulator(&self) -> F { self.accumulator }
    pub fn fixed_step(&self) -> F { self.config.fixed_step }
    pub fn max_frame_dt(&self) -> F { self.config.max_frame_dt }
    pub fn config(&self) -> &SchedulerConfig<F> { &self.config }
}

impl<F: Float> Default for FixedStepScheduler<F> {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
