//! Per-tick motion, gravity, and wall handling
//!
//! Advances every particle by one fixed tick:
//! - position += velocity (velocities are in arena units per tick)
//! - optional constant downward acceleration (simple Euler, no terminal
//!   velocity)
//! - clamp-and-reflect at the left/right walls and the floor
//!
//! While gravity is off the HUD strip at the top acts as a ceiling that
//! reflects downward. With gravity on there is no ceiling at all, so
//! fast particles may rise into the HUD strip before falling back.

use super::params::Parameters;
use super::states::Population;

/// Advance all particles by one tick and resolve wall contacts.
///
/// Each axis is handled independently: the leading edge (center ±
/// radius) is clamped to the boundary and the velocity component is
/// forced back inbound, rather than merely negated, so a particle pinned
/// against a wall cannot jitter through it.
pub fn integrate_motion(population: &mut Population, params: &Parameters) {
    let ceiling = params.ceiling();

    for p in population.iter_mut() {
        // Drift
        p.x += p.v;

        if params.gravity_on {
            p.v.y -= params.gravity;
        }

        let r = p.radius;

        // Left wall
        if p.x.x - r < 0.0 {
            p.x.x = r;
            p.v.x = p.v.x.abs();
        }
        // Right wall
        if p.x.x + r > params.arena_width {
            p.x.x = params.arena_width - r;
            p.v.x = -p.v.x.abs();
        }
        // Floor
        if p.x.y - r < 0.0 {
            p.x.y = r;
            p.v.y = p.v.y.abs();
        }
        // Ceiling below the HUD strip, only without gravity
        if !params.gravity_on && p.x.y + r > ceiling {
            p.x.y = ceiling - r;
            p.v.y = -p.v.y.abs();
        }
    }
}
