use softlattice::{
    integrate_rk4, AnchorFace, GridConfig, GridDims, IntegrationWorkspace, Particle, SoftBody,
    SoftBodyConfig, Vec3,
};

const FIXED_STEP: f32 = 1.0 / 120.0;

#[test]
fn free_fall_matches_constant_acceleration() {
    let grid = GridConfig::new(GridDims::cube(2), 1.0f32, 1.0).with_anchor_face(AnchorFace::None);
    let config = SoftBodyConfig::new()
        .with_gravity(Vec3::new(0.0, -10.0, 0.0))
        .with_stiffness(0.0)
        .with_damping(0.0);
    let mut body = SoftBody::lattice(Vec3::zero(), &grid, &config).unwrap();
    let start = body.positions();

    let mut ws = IntegrationWorkspace::new();
    integrate_rk4(&mut body, FIXED_STEP, &mut ws);

    for (p, x0) in body.particles().iter().zip(&start) {
        assert!((p.velocity.y - (-10.0 / 120.0)).abs() < 1e-4, "vy = {}", p.velocity.y);
        assert_eq!(p.velocity.x, 0.0);
        assert_eq!(p.velocity.z, 0.0);
        // x = x0 - g t^2 / 2, exact for RK4 under constant acceleration
        let expected_y = x0.y - 0.5 * 10.0 * FIXED_STEP * FIXED_STEP;
        assert!((p.position.y - expected_y).abs() < 1e-6);
    }
}

#[test]
fn anchors_hold_for_a_thousand_steps() {
    let grid = GridConfig::new(GridDims::cube(2), 1.0f32, 1.0);
    let mut body = SoftBody::lattice(Vec3::zero(), &grid, &SoftBodyConfig::new()).unwrap();
    let anchors: Vec<(usize, Vec3<f32>)> = body
        .particles()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_anchor)
        .map(|(i, p)| (i, p.anchor_position))
        .collect();
    assert_eq!(anchors.len(), 4);

    let mut ws = IntegrationWorkspace::new();
    for step in 0..1000 {
        integrate_rk4(&mut body, FIXED_STEP, &mut ws);
        for &(i, pinned_at) in &anchors {
            let p = body.particle(i);
            assert_eq!(p.position, pinned_at, "anchor {} drifted at step {}", i, step);
            assert_eq!(p.anchor_position, pinned_at);
            assert_eq!(p.velocity, Vec3::zero());
            assert_eq!(p.inv_mass, 0.0);
        }
    }

    // The hanging layer sagged but stayed finite
    for p in body.particles().iter().filter(|p| !p.is_anchor) {
        assert!(p.position.is_finite() && p.velocity.is_finite());
        assert!(p.position.y < 1.0);
    }
}

#[test]
fn anchor_position_wins_over_stale_position() {
    let config = SoftBodyConfig::new();
    let mut body: SoftBody<f32> = SoftBody::new(&config);
    let i = body.add_particle(Particle::anchor(Vec3::new(0.0, 1.0, 0.0)));
    body.particle_mut(i).position = Vec3::new(5.0, 5.0, 5.0);
    body.particle_mut(i).velocity = Vec3::new(1.0, 0.0, 0.0);

    let mut ws = IntegrationWorkspace::new();
    integrate_rk4(&mut body, FIXED_STEP, &mut ws);
    assert_eq!(body.particle(i).position, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(body.particle(i).velocity, Vec3::zero());
}

/// Mass on a spring from a fixed anchor: x(t) = rest + A cos(w t).
#[test]
fn harmonic_oscillator_tracks_analytic_solution() {
    let k = 4.0f64;
    let amplitude = 0.1f64;
    let config = SoftBodyConfig::new()
        .with_gravity(Vec3::zero())
        .with_stiffness(k)
        .with_damping(0.0);
    let mut body = SoftBody::new(&config);
    body.add_particle(Particle::anchor(Vec3::zero()));
    body.add_particle(Particle::new(Vec3::new(1.0, 0.0, 0.0), 1.0));
    body.add_spring(0, 1).unwrap();
    body.particle_mut(1).position.x = 1.0 + amplitude;

    let dt = 1.0 / 120.0;
    let omega = k.sqrt();
    let mut ws = IntegrationWorkspace::new();
    for step in 1..=240 {
        integrate_rk4(&mut body, dt, &mut ws);
        let t = step as f64 * dt;
        let expected = 1.0 + amplitude * (omega * t).cos();
        let x = body.particle(1).position.x;
        assert!((x - expected).abs() < 1e-7, "t = {}: {} vs {}", t, x, expected);
    }
}

#[test]
fn damping_drains_energy() {
    let config = SoftBodyConfig::new()
        .with_gravity(Vec3::zero())
        .with_stiffness(50.0f32)
        .with_damping(2.0);
    let mut body = SoftBody::new(&config);
    body.add_particle(Particle::anchor(Vec3::zero()));
    body.add_particle(Particle::new(Vec3::new(1.0, 0.0, 0.0), 1.0));
    body.add_spring(0, 1).unwrap();
    body.particle_mut(1).position.x = 1.3;

    let mut ws = IntegrationWorkspace::new();
    for _ in 0..600 {
        integrate_rk4(&mut body, FIXED_STEP, &mut ws);
    }
    let p = body.particle(1);
    assert!((p.position.x - 1.0).abs() < 0.01, "x = {}", p.position.x);
    assert!(p.velocity.length() < 0.05);
}

#[test]
fn non_positive_dt_is_noop() {
    let grid = GridConfig::new(GridDims::cube(2), 1.0f32, 1.0).with_anchor_face(AnchorFace::None);
    let mut body = SoftBody::lattice(Vec3::zero(), &grid, &SoftBodyConfig::new()).unwrap();
    let before = body.particles().to_vec();
    let mut ws = IntegrationWorkspace::new();
    integrate_rk4(&mut body, 0.0, &mut ws);
    integrate_rk4(&mut body, -1.0, &mut ws);
    integrate_rk4(&mut body, f32::NAN, &mut ws);
    assert_eq!(body.particles(), &before[..]);
    assert_eq!(ws.capacity(), 0);
}

#[test]
fn empty_body_is_noop() {
    let mut body: SoftBody<f32> = SoftBody::new(&SoftBodyConfig::new());
    let mut ws = IntegrationWorkspace::new();
    integrate_rk4(&mut body, FIXED_STEP, &mut ws);
    assert!(body.is_empty());
    assert_eq!(ws.capacity(), 0);
}

#[test]
fn shared_workspace_matches_private_workspace() {
    let big_grid = GridConfig::new(GridDims::cube(4), 0.15f32, 0.5);
    let small_grid = GridConfig::new(GridDims::new(2, 3, 2), 0.2f32, 1.0);
    let mut big = SoftBody::lattice(Vec3::zero(), &big_grid, &SoftBodyConfig::new()).unwrap();
    let mut small = SoftBody::lattice(Vec3::zero(), &small_grid, &SoftBodyConfig::new()).unwrap();
    let mut small_alone = small.clone();

    let mut shared = IntegrationWorkspace::new();
    let mut private = IntegrationWorkspace::new();
    for _ in 0..50 {
        integrate_rk4(&mut big, FIXED_STEP, &mut shared);
        integrate_rk4(&mut small, FIXED_STEP, &mut shared);
        integrate_rk4(&mut small_alone, FIXED_STEP, &mut private);
    }
    assert_eq!(shared.capacity(), 64);
    assert_eq!(private.capacity(), 12);
    assert_eq!(small.particles(), small_alone.particles());
}
