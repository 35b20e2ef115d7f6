use steadystate::{
    break_complex, elastic_collision, form_complex, NVec2, Command, Parameters, Particle,
    ParticleId, Population, Simulation, Species, SweepDetector,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build a free-standing particle for pure-function tests
fn particle(id: u64, species: Species, m: f64, radius: f64, x: [f64; 2], v: [f64; 2]) -> Particle {
    Particle {
        id: ParticleId(id),
        x: NVec2::new(x[0], x[1]),
        v: NVec2::new(v[0], v[1]),
        m,
        radius,
        species,
    }
}

/// Default parameters for tests: decay off, gravity off, empty setup
fn test_params() -> Parameters {
    Parameters {
        decay_constant: 0.0,
        target_x: 0,
        target_y: 0,
        ..Parameters::default()
    }
}

/// Seeded running simulation with an empty population
fn test_sim(params: Parameters) -> Simulation {
    let mut sim = Simulation::new(params, Some(42));
    sim.set_running(true);
    sim
}

/// Spawn a particle with species-derived mass and radius
fn add(sim: &mut Simulation, species: Species, x: [f64; 2], v: [f64; 2]) -> ParticleId {
    let m = sim.params.mass_of(species);
    let r = sim.params.radius_of(species);
    sim.population
        .spawn(species, NVec2::new(x[0], x[1]), NVec2::new(v[0], v[1]), m, r)
}

fn momentum(p: &Particle) -> NVec2 {
    p.v * p.m
}

// ==================================================================================
// Elastic collision tests
// ==================================================================================

#[test]
fn elastic_conserves_momentum() {
    let mut p1 = particle(0, Species::X, 1.0, 10.0, [0.0, 0.0], [3.0, 1.0]);
    let mut p2 = particle(1, Species::X, 2.5, 10.0, [8.0, 6.0], [-2.0, -4.0]);

    let before = momentum(&p1) + momentum(&p2);
    elastic_collision(&mut p1, &mut p2);
    let after = momentum(&p1) + momentum(&p2);

    assert!((before - after).norm() < 1e-12, "momentum drifted: {:?}", before - after);
    // The pair was approaching, so velocities must actually change
    assert!((p1.v - NVec2::new(3.0, 1.0)).norm() > 1e-9);
}

#[test]
fn elastic_separating_pair_untouched() {
    // p2 sits up-right of p1 and both move apart along the normal
    let mut p1 = particle(0, Species::X, 1.0, 10.0, [0.0, 0.0], [-1.0, -1.0]);
    let mut p2 = particle(1, Species::Y, 1.5, 15.0, [5.0, 5.0], [1.0, 1.0]);

    elastic_collision(&mut p1, &mut p2);

    assert_eq!(p1.v, NVec2::new(-1.0, -1.0));
    assert_eq!(p2.v, NVec2::new(1.0, 1.0));
}

#[test]
fn elastic_pair_at_rest_untouched() {
    // velocity along the normal is exactly zero
    let mut p1 = particle(0, Species::X, 1.0, 10.0, [0.0, 0.0], [0.0, 0.0]);
    let mut p2 = particle(1, Species::X, 1.0, 10.0, [5.0, 0.0], [0.0, 0.0]);

    elastic_collision(&mut p1, &mut p2);

    assert_eq!(p1.v, NVec2::new(0.0, 0.0));
    assert_eq!(p2.v, NVec2::new(0.0, 0.0));
}

#[test]
fn elastic_zero_distance_noop() {
    let mut p1 = particle(0, Species::X, 1.0, 10.0, [7.0, 7.0], [2.0, 0.0]);
    let mut p2 = particle(1, Species::Y, 1.5, 15.0, [7.0, 7.0], [-2.0, 0.0]);

    elastic_collision(&mut p1, &mut p2);

    assert_eq!(p1.v, NVec2::new(2.0, 0.0));
    assert_eq!(p2.v, NVec2::new(-2.0, 0.0));
}

#[test]
fn elastic_equal_mass_head_on_swaps_velocities() {
    let mut p1 = particle(0, Species::X, 1.0, 10.0, [0.0, 0.0], [2.0, 0.0]);
    let mut p2 = particle(1, Species::X, 1.0, 10.0, [10.0, 0.0], [-2.0, 0.0]);

    elastic_collision(&mut p1, &mut p2);

    assert!((p1.v - NVec2::new(-2.0, 0.0)).norm() < 1e-12);
    assert!((p2.v - NVec2::new(2.0, 0.0)).norm() < 1e-12);
}

// ==================================================================================
// Formation tests
// ==================================================================================

#[test]
fn formation_merges_momentum_and_mass() {
    let params = test_params();
    let mut pop = Population::new();
    let x_id = pop.spawn(Species::X, NVec2::new(100.0, 100.0), NVec2::new(4.0, 0.0), params.mass_x(), params.radius_x);
    let y_id = pop.spawn(Species::Y, NVec2::new(110.0, 100.0), NVec2::new(-2.0, 2.0), params.mass_y(), params.radius_y);

    form_complex(&mut pop, x_id, y_id, &params);

    let counts = pop.counts();
    assert_eq!((counts.x, counts.y, counts.complexes), (0, 0, 1));

    let c = pop.complexes().next().unwrap();
    assert_eq!(c.m, params.mass_x() + params.mass_y());
    assert!((c.x - NVec2::new(105.0, 100.0)).norm() < 1e-12);

    // Mass-weighted velocity: (1.0 * (4,0) + 1.5 * (-2,2)) / 2.5
    let expected = NVec2::new((4.0 - 3.0) / 2.5, 3.0 / 2.5);
    assert!((c.v - expected).norm() < 1e-12);
}

#[test]
fn formation_with_stale_handle_is_noop() {
    let params = test_params();
    let mut pop = Population::new();
    let x_id = pop.spawn(Species::X, NVec2::new(100.0, 100.0), NVec2::zeros(), params.mass_x(), params.radius_x);
    let y_id = pop.spawn(Species::Y, NVec2::new(105.0, 100.0), NVec2::zeros(), params.mass_y(), params.radius_y);

    pop.remove(x_id);
    form_complex(&mut pop, x_id, y_id, &params);

    let counts = pop.counts();
    assert_eq!((counts.x, counts.y, counts.complexes), (0, 1, 0));
}

#[test]
fn formation_rejects_wrong_species() {
    let params = test_params();
    let mut pop = Population::new();
    let a = pop.spawn(Species::X, NVec2::new(100.0, 100.0), NVec2::zeros(), params.mass_x(), params.radius_x);
    let b = pop.spawn(Species::X, NVec2::new(105.0, 100.0), NVec2::zeros(), params.mass_x(), params.radius_x);

    form_complex(&mut pop, a, b, &params);

    assert_eq!(pop.counts().x, 2);
    assert_eq!(pop.counts().complexes, 0);
}

// ==================================================================================
// Breakup tests
// ==================================================================================

#[test]
fn breakup_product_velocities_average_to_complex_velocity() {
    let params = test_params();
    let mut pop = Population::new();
    let id = pop.spawn(
        Species::Complex,
        NVec2::new(600.0, 300.0),
        NVec2::new(3.0, -2.0),
        params.mass_complex(),
        params.radius_complex(),
    );

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    break_complex(&mut pop, id, &params, &mut rng);

    let counts = pop.counts();
    assert_eq!((counts.x, counts.y, counts.complexes), (1, 1, 0));

    let x = pop.xs().next().unwrap();
    let y = pop.ys().next().unwrap();

    // Kicks cancel in the mean by construction
    let mean = (x.v + y.v) / 2.0;
    assert!((mean - NVec2::new(3.0, -2.0)).norm() < 1e-12);

    // Products spawn clear of each other, diagonally around the center
    let offset = (params.radius_x + params.radius_y) / 2.0;
    assert!((x.x - NVec2::new(600.0 - offset, 300.0 - offset)).norm() < 1e-12);
    assert!((y.x - NVec2::new(600.0 + offset, 300.0 + offset)).norm() < 1e-12);
    assert!((x.x - y.x).norm() > x.radius + y.radius);
}

#[test]
fn breakup_with_stale_handle_is_noop() {
    let params = test_params();
    let mut pop = Population::new();
    let id = pop.spawn(
        Species::Complex,
        NVec2::new(600.0, 300.0),
        NVec2::zeros(),
        params.mass_complex(),
        params.radius_complex(),
    );
    pop.remove(id);

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    break_complex(&mut pop, id, &params, &mut rng);

    assert!(pop.is_empty());
}

#[test]
fn breakup_rejects_non_complex() {
    let params = test_params();
    let mut pop = Population::new();
    let id = pop.spawn(Species::X, NVec2::new(600.0, 300.0), NVec2::zeros(), params.mass_x(), params.radius_x);

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    break_complex(&mut pop, id, &params, &mut rng);

    assert_eq!(pop.counts().x, 1);
    assert_eq!(pop.len(), 1);
}

// ==================================================================================
// Decay process tests
// ==================================================================================

#[test]
fn decay_accumulator_fires_exactly_once_per_unit() {
    // 32 Hz makes the tick duration exact in binary floating point, so
    // one complex at rate 1.0/s pushes the accumulator to exactly 1.0
    // on tick 32
    let mut params = test_params();
    params.hertz = 32.0;
    params.decay_constant = 1.0;

    let mut sim = test_sim(params);
    add(&mut sim, Species::Complex, [600.0, 300.0], [0.0, 0.0]);

    let detector = SweepDetector;
    for _ in 0..31 {
        sim.step(&detector);
    }
    assert_eq!(sim.counts().complexes, 1);
    assert!(sim.pending_breakups() < 1.0);

    sim.step(&detector);
    let counts = sim.counts();
    assert_eq!((counts.x, counts.y, counts.complexes), (1, 1, 0));
    assert_eq!(sim.pending_breakups(), 0.0);
}

#[test]
fn decay_accumulator_monotone_between_breakups() {
    let mut params = test_params();
    params.decay_constant = 0.5;

    let mut sim = test_sim(params);
    add(&mut sim, Species::Complex, [600.0, 300.0], [0.0, 0.0]);

    let detector = SweepDetector;
    let mut last = sim.pending_breakups();
    for _ in 0..20 {
        sim.step(&detector);
        let now = sim.pending_breakups();
        assert!(now >= last, "accumulator decreased without a breakup");
        last = now;
    }
}

#[test]
fn decay_zero_rate_never_fires() {
    let mut sim = test_sim(test_params());
    add(&mut sim, Species::Complex, [600.0, 300.0], [0.0, 0.0]);

    let detector = SweepDetector;
    for _ in 0..100 {
        sim.step(&detector);
    }
    assert_eq!(sim.counts().complexes, 1);
    assert_eq!(sim.pending_breakups(), 0.0);
}

// ==================================================================================
// Integrator / boundary tests
// ==================================================================================

#[test]
fn gravity_accumulates_linearly() {
    let mut params = test_params();
    params.gravity_on = true;

    let mut sim = test_sim(params);
    let id = add(&mut sim, Species::X, [600.0, 500.0], [0.0, 0.0]);

    let detector = SweepDetector;
    for _ in 0..10 {
        sim.step(&detector);
    }

    let p = sim.population.get(id).unwrap();
    assert!((p.v.y + 10.0 * sim.params.gravity).abs() < 1e-9, "v.y = {}", p.v.y);
}

#[test]
fn walls_reflect_and_contain() {
    let mut sim = test_sim(test_params());
    // Aim one fast particle at each wall
    add(&mut sim, Species::X, [30.0, 300.0], [-20.0, 0.0]);
    add(&mut sim, Species::X, [1170.0, 300.0], [20.0, 0.0]);
    add(&mut sim, Species::X, [600.0, 30.0], [0.0, -20.0]);
    add(&mut sim, Species::X, [600.0, 570.0], [0.0, 20.0]);

    let detector = SweepDetector;
    for _ in 0..50 {
        sim.step(&detector);
        for p in sim.population.iter() {
            let r = p.radius;
            assert!(p.x.x >= r && p.x.x <= sim.params.arena_width - r, "x out of bounds: {}", p.x.x);
            assert!(p.x.y >= r && p.x.y <= sim.params.ceiling() - r, "y out of bounds: {}", p.x.y);
        }
    }
}

#[test]
fn left_wall_forces_outbound_velocity() {
    let mut sim = test_sim(test_params());
    let id = add(&mut sim, Species::X, [12.0, 300.0], [-5.0, 0.0]);

    let detector = SweepDetector;
    sim.step(&detector);

    let p = sim.population.get(id).unwrap();
    assert_eq!(p.x.x, p.radius);
    assert!(p.v.x > 0.0);
}

// ==================================================================================
// End-to-end scenarios
// ==================================================================================

#[test]
fn single_overlapping_pair_forms_one_complex() {
    let mut sim = test_sim(test_params());
    // One overlapping X/Y pair plus one far-away atom of each species
    add(&mut sim, Species::X, [100.0, 100.0], [0.0, 0.0]);
    add(&mut sim, Species::X, [600.0, 300.0], [0.0, 0.0]);
    add(&mut sim, Species::Y, [105.0, 105.0], [0.0, 0.0]);
    add(&mut sim, Species::Y, [900.0, 500.0], [0.0, 0.0]);

    let detector = SweepDetector;
    sim.step(&detector);

    let counts = sim.counts();
    assert_eq!((counts.x, counts.y, counts.complexes), (1, 1, 1));

    let c = sim.population.complexes().next().unwrap();
    assert!((c.x - NVec2::new(102.5, 102.5)).norm() < 1e-12);
    assert_eq!(c.m, sim.params.mass_complex());
}

#[test]
fn population_views_stay_disjoint_union() {
    let mut params = test_params();
    params.decay_constant = 0.2;
    params.target_x = 20;
    params.target_y = 20;

    let mut sim = test_sim(params);
    sim.setup();
    sim.set_running(true);

    let detector = SweepDetector;
    for tick in 0..200 {
        sim.step(&detector);
        if tick % 20 == 0 {
            let counts = sim.counts();
            assert_eq!(
                counts.x + counts.y + counts.complexes,
                sim.population.len(),
                "views no longer partition the population"
            );
        }
    }
}

#[test]
fn atoms_are_conserved_across_transitions() {
    // Every X atom is free or bound in exactly one complex, so
    // X + complexes (and Y + complexes) are invariant over any mix of
    // formations and breakups
    let mut params = test_params();
    params.decay_constant = 0.3;
    params.target_x = 50;
    params.target_y = 50;

    let mut sim = test_sim(params);
    sim.setup();
    sim.set_running(true);

    let detector = SweepDetector;
    for _ in 0..500 {
        sim.step(&detector);
    }

    let counts = sim.counts();
    assert_eq!(counts.x + counts.complexes, 50);
    assert_eq!(counts.y + counts.complexes, 50);
}

#[test]
fn paused_simulation_does_not_advance() {
    let mut params = test_params();
    params.target_x = 10;

    let mut sim = test_sim(params);
    sim.setup();
    sim.set_running(false);

    let detector = SweepDetector;
    let before: Vec<NVec2> = sim.population.iter().map(|p| p.x).collect();
    sim.advance(1.0, &detector);
    let after: Vec<NVec2> = sim.population.iter().map(|p| p.x).collect();

    assert_eq!(before, after);
    assert_eq!(sim.t, 0.0);
}

#[test]
fn advance_runs_whole_ticks_only() {
    // 32 Hz keeps every duration below exact in binary floating point
    let mut params = test_params();
    params.hertz = 32.0;
    let mut sim = test_sim(params);
    let detector = SweepDetector;

    // 2.5 ticks worth of wall time -> exactly 2 steps
    sim.advance(2.5 / 32.0, &detector);
    assert_eq!(sim.t, 2.0 / 32.0);

    // The leftover half tick completes on the next call
    sim.advance(0.5 / 32.0, &detector);
    assert_eq!(sim.t, 3.0 / 32.0);
}

// ==================================================================================
// Command tests
// ==================================================================================

#[test]
fn hertz_saturates_at_floor() {
    let mut sim = test_sim(test_params());
    sim.apply(Command::LowerHertz);
    sim.apply(Command::LowerHertz);
    sim.apply(Command::LowerHertz);
    assert_eq!(sim.params.hertz, 10.0);
    sim.apply(Command::RaiseHertz);
    assert_eq!(sim.params.hertz, 20.0);
}

#[test]
fn decay_constant_saturates_at_zero() {
    let mut params = test_params();
    params.decay_constant = 0.1;
    let mut sim = test_sim(params);

    sim.apply(Command::LowerDecay);
    sim.apply(Command::LowerDecay);
    sim.apply(Command::LowerDecay);
    assert_eq!(sim.params.decay_constant, 0.0);
}

#[test]
fn radius_commands_clamp_and_rebuild() {
    let mut params = test_params();
    params.target_x = 5;
    let mut sim = test_sim(params);
    sim.setup();

    for _ in 0..30 {
        sim.apply(Command::GrowRadiusX);
    }
    assert_eq!(sim.params.radius_x, 100.0);
    assert!(!sim.is_running(), "rebuild should pause the run");
    assert_eq!(sim.population.len(), 5);
    for p in sim.population.xs() {
        assert_eq!(p.radius, 100.0);
        assert_eq!(p.m, 10.0);
    }

    for _ in 0..30 {
        sim.apply(Command::ShrinkRadiusX);
    }
    assert_eq!(sim.params.radius_x, 10.0);
}

#[test]
fn target_commands_rebuild_population() {
    let mut params = test_params();
    params.target_x = 10;
    let mut sim = test_sim(params);
    sim.setup();
    assert_eq!(sim.population.len(), 10);

    sim.apply(Command::RaiseTargetX);
    assert_eq!(sim.params.target_x, 20);
    assert_eq!(sim.counts().x, 20);

    sim.apply(Command::LowerTargetX);
    sim.apply(Command::LowerTargetX);
    sim.apply(Command::LowerTargetX);
    assert_eq!(sim.params.target_x, 0, "target count saturates at zero");
    assert!(sim.population.is_empty());
}

#[test]
fn toggle_commands_flip_state() {
    let mut sim = test_sim(test_params());
    assert!(!sim.params.gravity_on);
    sim.apply(Command::ToggleGravity);
    assert!(sim.params.gravity_on);

    assert!(sim.is_running());
    sim.apply(Command::ToggleRun);
    assert!(!sim.is_running());
}

#[test]
fn setup_places_population_inside_arena() {
    let mut params = test_params();
    params.target_x = 40;
    params.target_y = 40;
    let mut sim = test_sim(params);
    sim.setup();

    assert_eq!(sim.counts().x, 40);
    assert_eq!(sim.counts().y, 40);
    for p in sim.population.iter() {
        let r = p.radius;
        assert!(p.x.x >= r && p.x.x <= sim.params.arena_width - r);
        assert!(p.x.y >= r && p.x.y <= sim.params.ceiling() - r);
    }
}
