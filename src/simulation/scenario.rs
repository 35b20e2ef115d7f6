//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the viewer and the headless runner:
//! - the [`Simulation`] core with its population already generated
//! - the overlap detector the resolver queries
//!
//! The bundle is inserted into Bevy as a `Resource` and read/stepped by
//! the visualization systems.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::detection::SweepDetector;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;

/// Runtime bundle for one simulation run.
#[derive(Resource)]
pub struct Scenario {
    pub sim: Simulation,
    pub detector: SweepDetector,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from the YAML-facing config
        let params = Parameters {
            arena_width: cfg.arena.width,
            arena_height: cfg.arena.height,
            hertz: cfg.parameters.hertz,
            decay_constant: cfg.parameters.decay_constant,
            gravity: cfg.parameters.gravity,
            gravity_on: cfg.parameters.gravity_on,
            radius_x: cfg.parameters.radius_x,
            radius_y: cfg.parameters.radius_y,
            target_x: cfg.population.x,
            target_y: cfg.population.y,
        };

        // Initial population at t = 0; starts paused until the user (or
        // the headless runner) resumes
        let mut sim = Simulation::new(params, cfg.seed);
        sim.setup();

        Self {
            sim,
            detector: SweepDetector,
        }
    }
}
