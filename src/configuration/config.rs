//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`ArenaConfig`]      – arena dimensions
//! - [`ParametersConfig`] – tick rate, decay constant, gravity, radii
//! - [`PopulationConfig`] – initial X/Y atom counts
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//!
//! # YAML format
//! A scenario YAML matching these types:
//!
//! ```yaml
//! arena:
//!   width: 1200.0
//!   height: 800.0
//!
//! parameters:
//!   hertz: 30.0           # fixed ticks per second (min 10)
//!   decay_constant: 0.1   # per-second breakup rate per complex
//!   gravity: 0.2          # per-tick downward velocity change
//!   gravity_on: false
//!   radius_x: 10.0        # X atom radius; mass is radius / 10
//!   radius_y: 15.0        # Y atom radius
//!
//! population:
//!   x: 100                # X atoms at setup
//!   y: 0                  # Y atoms at setup
//!
//! seed: 42                # omit for an entropy-seeded run
//! ```
//!
//! The engine maps this configuration into its internal runtime
//! `Parameters`; defaults and clamping live there, not here.

use serde::Deserialize;

/// Arena dimensions in simulation units.
#[derive(Deserialize, Debug)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

/// Physical and timing parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub hertz: f64,          // fixed tick rate
    pub decay_constant: f64, // complex breakup rate, 1/s
    pub gravity: f64,        // per-tick downward velocity change
    pub gravity_on: bool,
    pub radius_x: f64,       // per-species radii; masses derive from them
    pub radius_y: f64,
}

/// Initial population counts.
#[derive(Deserialize, Debug)]
pub struct PopulationConfig {
    pub x: usize,
    pub y: usize,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub arena: ArenaConfig,
    pub parameters: ParametersConfig,
    pub population: PopulationConfig,
    pub seed: Option<u64>, // reproducible runs when set
}
