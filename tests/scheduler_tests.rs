use softlattice::{CubeConfig, FixedStepScheduler, NoOpStepObserver, SchedulerConfig, SoftBodyWorld};

#[test]
fn remainder_carries_between_frames() {
    let mut s = FixedStepScheduler::<f64>::default();
    let mut total = 0;
    for _ in 0..60 {
        total += s.advance(1.0 / 60.0);
    }
    // One second at 120 Hz; the strict comparison can hold back the last step
    assert!(total == 119 || total == 120, "total {}", total);
    assert!(s.accumulator() <= s.fixed_step() + 1e-12);
}

#[test]
fn long_frame_is_capped() {
    let mut world = SoftBodyWorld::<f32>::default();
    world.spawn_cube(&CubeConfig::new(2)).unwrap();
    let steps = world.update(3.0, &mut NoOpStepObserver);
    assert!((11..=12).contains(&steps), "steps {}", steps);
}

#[test]
fn custom_step_rate() {
    let config = SchedulerConfig::new().with_fixed_step(0.5f32).with_max_frame_dt(10.0);
    let mut s = FixedStepScheduler::new(config);
    assert_eq!(s.advance(1.75), 3);
    assert!((s.alpha() - 0.5).abs() < 1e-6);
}

#[test]
fn degenerate_step_rate_is_clamped() {
    let config = SchedulerConfig::new().with_fixed_step(-0.5f32).with_max_frame_dt(-1.0);
    assert!(config.fixed_step > 0.0);
    assert_eq!(config.max_frame_dt, 0.0);

    let mut world = SoftBodyWorld::new(SchedulerConfig { fixed_step: 0.0f32, max_frame_dt: 0.001 });
    let steps = world.update(1.0 / 60.0, &mut NoOpStepObserver);
    assert!(steps > 0);
    assert!(world.scheduler().accumulator() <= world.scheduler().fixed_step());
}
