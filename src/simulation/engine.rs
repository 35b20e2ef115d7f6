//! The simulation core
//!
//! `Simulation` owns the population, the runtime parameters, the random
//! source, the fixed-timestep clock, and the decay accumulator. The
//! presentation layer only reads from it and feeds it [`Command`]s; no
//! physics state is reachable any other way.
//!
//! Per fixed tick, in order:
//! 1. integrate motion, gravity, and walls
//! 2. advance the decay accumulator and fire breakups
//! 3. resolve collisions (elastic response or formation)

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::collision::resolve_collisions;
use super::detection::OverlapDetector;
use super::integrator::integrate_motion;
use super::params::{Parameters, HERTZ_STEP, COUNT_STEP, DECAY_STEP, HUD_STRIP, MOTION_RANGE, RADIUS_STEP};
use super::reactions::break_complex;
use super::states::{NVec2, ParticleId, Population, Species, SpeciesCounts};

/// Discrete input commands, mapped to parameter mutations.
///
/// Commands that change a radius or a target count rebuild the whole
/// population (and leave the run paused); the rest apply in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RaiseTargetX,
    LowerTargetX,
    RaiseTargetY,
    LowerTargetY,
    RaiseDecay,
    LowerDecay,
    RaiseHertz,
    LowerHertz,
    GrowRadiusX,
    ShrinkRadiusX,
    GrowRadiusY,
    ShrinkRadiusY,
    ToggleGravity,
    ToggleRun,
}

/// Fixed-timestep particle simulation.
pub struct Simulation {
    pub params: Parameters,
    pub population: Population,
    /// Simulated time, seconds.
    pub t: f64,
    running: bool,
    /// Wall-clock time not yet consumed by fixed ticks.
    timer: f64,
    /// Fractional expected-breakup accumulator; fires one breakup per
    /// whole unit.
    pending_breakups: f64,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Build a simulation with an empty population. Pass a seed for a
    /// reproducible run; the default is entropy-seeded.
    pub fn new(params: Parameters, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            params,
            population: Population::new(),
            t: 0.0,
            running: false,
            timer: 0.0,
            pending_breakups: 0.0,
            rng,
        }
    }

    /// Discard the population and regenerate it from the current target
    /// counts: X then Y atoms, uniformly placed clear of the walls and
    /// the HUD strip, with random velocities.
    pub fn setup(&mut self) {
        self.population.clear();
        self.timer = 0.0;
        self.pending_breakups = 0.0;

        for _ in 0..self.params.target_x {
            let x = self.place_particle(self.params.radius_x);
            let v = self.random_motion();
            self.population
                .spawn(Species::X, x, v, self.params.mass_x(), self.params.radius_x);
        }
        for _ in 0..self.params.target_y {
            let x = self.place_particle(self.params.radius_y);
            let v = self.random_motion();
            self.population
                .spawn(Species::Y, x, v, self.params.mass_y(), self.params.radius_y);
        }
    }

    /// Uniform position with the whole circle inside the walls and below
    /// the HUD strip.
    fn place_particle(&mut self, radius: f64) -> NVec2 {
        let w = self.params.arena_width;
        let h = self.params.arena_height - HUD_STRIP;
        NVec2::new(
            self.rng.gen_range(radius..w - radius),
            self.rng.gen_range(radius..h - radius),
        )
    }

    fn random_motion(&mut self) -> NVec2 {
        NVec2::new(
            self.rng.gen_range(-MOTION_RANGE..MOTION_RANGE),
            self.rng.gen_range(-MOTION_RANGE..MOTION_RANGE),
        )
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Current value of the decay accumulator.
    pub fn pending_breakups(&self) -> f64 {
        self.pending_breakups
    }

    pub fn counts(&self) -> SpeciesCounts {
        self.population.counts()
    }

    /// Feed elapsed render time into the fixed-step clock and run zero
    /// or more simulation steps. While paused nothing advances, not even
    /// the accumulator.
    pub fn advance(&mut self, delta: f64, detector: &dyn OverlapDetector) {
        if !self.running {
            return;
        }
        self.timer += delta;
        let dt = self.params.tick_duration();
        while self.timer >= dt {
            self.timer -= dt;
            self.step(detector);
        }
    }

    /// Execute exactly one fixed tick.
    pub fn step(&mut self, detector: &dyn OverlapDetector) {
        let dt = self.params.tick_duration();

        integrate_motion(&mut self.population, &self.params);
        self.decay_step(dt);
        resolve_collisions(&mut self.population, detector, &self.params);

        self.t += dt;
    }

    /// Euler discretization of the Poisson breakup process: accumulate
    /// the expected number of decays this tick, then fire one breakup on
    /// a uniformly chosen complex per whole unit.
    fn decay_step(&mut self, dt: f64) {
        let complexes = self.population.count(Species::Complex);
        self.pending_breakups += self.params.decay_constant * dt * complexes as f64;

        while self.pending_breakups >= 1.0 {
            self.pending_breakups -= 1.0;
            let ids: Vec<ParticleId> = self.population.complexes().map(|p| p.id).collect();
            if let Some(&id) = ids.choose(&mut self.rng) {
                break_complex(&mut self.population, id, &self.params, &mut self.rng);
            }
        }
    }

    /// Apply one input command. Population-shape commands pause the run
    /// and rebuild the population from the new parameters.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::RaiseTargetX => {
                self.params.change_target_x(COUNT_STEP as isize);
                self.rebuild();
            }
            Command::LowerTargetX => {
                self.params.change_target_x(-(COUNT_STEP as isize));
                self.rebuild();
            }
            Command::RaiseTargetY => {
                self.params.change_target_y(COUNT_STEP as isize);
                self.rebuild();
            }
            Command::LowerTargetY => {
                self.params.change_target_y(-(COUNT_STEP as isize));
                self.rebuild();
            }
            Command::RaiseDecay => self.params.change_decay(DECAY_STEP),
            Command::LowerDecay => self.params.change_decay(-DECAY_STEP),
            Command::RaiseHertz => self.params.change_hertz(HERTZ_STEP),
            Command::LowerHertz => self.params.change_hertz(-HERTZ_STEP),
            Command::GrowRadiusX => {
                self.params.change_radius_x(RADIUS_STEP);
                self.rebuild();
            }
            Command::ShrinkRadiusX => {
                self.params.change_radius_x(-RADIUS_STEP);
                self.rebuild();
            }
            Command::GrowRadiusY => {
                self.params.change_radius_y(RADIUS_STEP);
                self.rebuild();
            }
            Command::ShrinkRadiusY => {
                self.params.change_radius_y(-RADIUS_STEP);
                self.rebuild();
            }
            Command::ToggleGravity => self.params.gravity_on = !self.params.gravity_on,
            Command::ToggleRun => self.running = !self.running,
        }
    }

    fn rebuild(&mut self) {
        self.running = false;
        self.setup();
    }
}
