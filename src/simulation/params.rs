//! Runtime parameters for the simulation
//!
//! `Parameters` holds the process-wide settings that input commands
//! mutate at runtime:
//! - arena size and tick rate,
//! - decay rate constant for complex breakup,
//! - gravity flag and per-tick acceleration,
//! - per-species radii (masses are derived from them),
//! - target X/Y populations used at setup.
//!
//! All mutators saturate at their floors/ceilings instead of failing.

use super::states::Species;

/// Height of the strip reserved at the top of the arena for HUD text.
/// While gravity is off it acts as a ceiling; with gravity on there is
/// no ceiling and particles may rise into it.
pub const HUD_STRIP: f64 = 200.0;

/// Lowest allowed tick rate, Hz.
pub const MIN_HERTZ: f64 = 10.0;
/// Tick rate adjustment step, Hz.
pub const HERTZ_STEP: f64 = 10.0;
/// Decay constant adjustment step, 1/s.
pub const DECAY_STEP: f64 = 0.05;
/// Radius adjustment step and clamp range.
pub const RADIUS_STEP: f64 = 5.0;
pub const RADIUS_MIN: f64 = 10.0;
pub const RADIUS_MAX: f64 = 100.0;
/// Target population adjustment step.
pub const COUNT_STEP: usize = 10;
/// Initial speed range at setup: each velocity component is drawn
/// uniformly from [-MOTION_RANGE, MOTION_RANGE].
pub const MOTION_RANGE: f64 = 5.0;
/// A complex is drawn/collided slightly smaller than the sum of its
/// constituent radii.
pub const COMPLEX_RADIUS_OVERLAP: f64 = 5.0;
/// Breakup velocity perturbation range: delta components are drawn
/// uniformly from [-BREAKUP_KICK, BREAKUP_KICK].
pub const BREAKUP_KICK: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub arena_width: f64,
    pub arena_height: f64,
    pub hertz: f64, // fixed ticks per second
    pub decay_constant: f64, // per-second breakup rate per complex
    pub gravity: f64, // per-tick downward velocity change
    pub gravity_on: bool,
    pub radius_x: f64,
    pub radius_y: f64,
    pub target_x: usize, // X atoms spawned at setup
    pub target_y: usize, // Y atoms spawned at setup
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            arena_width: 1200.0,
            arena_height: 800.0,
            hertz: 30.0,
            decay_constant: 0.1,
            gravity: 0.2,
            gravity_on: false,
            radius_x: 10.0,
            radius_y: 15.0,
            target_x: 100,
            target_y: 0,
        }
    }
}

impl Parameters {
    /// Duration of one fixed tick, seconds.
    pub fn tick_duration(&self) -> f64 {
        1.0 / self.hertz
    }

    pub fn mass_x(&self) -> f64 {
        self.radius_x / 10.0
    }

    pub fn mass_y(&self) -> f64 {
        self.radius_y / 10.0
    }

    /// Complex mass is the sum of its constituents' masses.
    pub fn mass_complex(&self) -> f64 {
        self.mass_x() + self.mass_y()
    }

    /// Complex radius is derived from both constituent radii minus a
    /// fixed overlap.
    pub fn radius_complex(&self) -> f64 {
        self.radius_x + self.radius_y - COMPLEX_RADIUS_OVERLAP
    }

    pub fn mass_of(&self, species: Species) -> f64 {
        match species {
            Species::X => self.mass_x(),
            Species::Y => self.mass_y(),
            Species::Complex => self.mass_complex(),
        }
    }

    pub fn radius_of(&self, species: Species) -> f64 {
        match species {
            Species::X => self.radius_x,
            Species::Y => self.radius_y,
            Species::Complex => self.radius_complex(),
        }
    }

    /// Top of the usable arena: below the HUD strip while gravity is
    /// off, the full height otherwise (no ceiling under gravity).
    pub fn ceiling(&self) -> f64 {
        self.arena_height - HUD_STRIP
    }

    // ---- clamped mutators, driven by input commands ----

    pub fn change_hertz(&mut self, delta: f64) {
        self.hertz += delta;
        if self.hertz < MIN_HERTZ {
            self.hertz = MIN_HERTZ;
        }
    }

    pub fn change_decay(&mut self, delta: f64) {
        self.decay_constant += delta;
        if self.decay_constant < 0.0 {
            self.decay_constant = 0.0;
        }
    }

    pub fn change_radius_x(&mut self, delta: f64) {
        self.radius_x = (self.radius_x + delta).clamp(RADIUS_MIN, RADIUS_MAX);
    }

    pub fn change_radius_y(&mut self, delta: f64) {
        self.radius_y = (self.radius_y + delta).clamp(RADIUS_MIN, RADIUS_MAX);
    }

    pub fn change_target_x(&mut self, delta: isize) {
        self.target_x = self.target_x.saturating_add_signed(delta);
    }

    pub fn change_target_y(&mut self, delta: isize) {
        self.target_y = self.target_y.saturating_add_signed(delta);
    }
}
