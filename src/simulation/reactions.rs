//! Formation and breakup transitions
//!
//! The two event-driven state transitions of the system:
//! - `form_complex` – consumes one X and one Y atom, produces one complex
//! - `break_complex` – consumes one complex, produces one X and one Y atom
//!
//! Both no-op silently when invoked against a handle that was already
//! consumed earlier in the same tick.

use rand::Rng;

use super::params::{Parameters, BREAKUP_KICK};
use super::states::{NVec2, ParticleId, Population, Species};

/// Fuse an X atom and a Y atom into one complex.
///
/// The complex appears at the arithmetic midpoint of the two positions
/// with the mass-weighted average velocity, so linear momentum is
/// conserved exactly. No-op if either handle is stale or tagged with the
/// wrong species.
pub fn form_complex(population: &mut Population, x_id: ParticleId, y_id: ParticleId, params: &Parameters) {
    let (Some(xa), Some(ya)) = (population.get(x_id), population.get(y_id)) else {
        return;
    };
    if xa.species != Species::X || ya.species != Species::Y {
        return;
    }

    let mid = (xa.x + ya.x) / 2.0;
    // Mass-weighted velocity: m_x v_x + m_y v_y = m_c v_c
    let v = (xa.v * xa.m + ya.v * ya.m) / (xa.m + ya.m);

    population.remove(x_id);
    population.remove(y_id);
    population.spawn(Species::Complex, mid, v, params.mass_complex(), params.radius_complex());
}

/// Split a complex back into one X and one Y atom.
///
/// Velocity split: a random kick delta (uniform per component in
/// [-BREAKUP_KICK, BREAKUP_KICK]) is added to the X product and
/// subtracted from the Y product, so the component-wise mean of the two
/// product velocities equals the complex velocity. Momentum is conserved
/// in expectation only, since the products' masses differ.
///
/// Position split: the products are placed symmetrically along the
/// down-left/up-right diagonal, half the combined atom radius away from
/// the complex center per axis, so they do not spawn overlapping.
///
/// No-op if the handle is stale or does not refer to a complex.
pub fn break_complex(population: &mut Population, id: ParticleId, params: &Parameters, rng: &mut impl Rng) {
    let Some(complex) = population.get(id) else {
        return;
    };
    if complex.species != Species::Complex {
        return;
    }

    let center = complex.x;
    let v = complex.v;

    let kick = NVec2::new(
        rng.gen_range(-BREAKUP_KICK..BREAKUP_KICK),
        rng.gen_range(-BREAKUP_KICK..BREAKUP_KICK),
    );
    let vx = v + kick;
    let vy = v - kick;

    // Half the combined radius per axis puts the product circles just
    // clear of each other, so the pair does not re-fuse on the next
    // collision pass.
    let offset = (params.radius_x + params.radius_y) / 2.0;
    let px = center - NVec2::new(offset, offset);
    let py = center + NVec2::new(offset, offset);

    population.remove(id);
    population.spawn(Species::X, px, vx, params.mass_x(), params.radius_x);
    population.spawn(Species::Y, py, vy, params.mass_y(), params.radius_y);
}
