//! Elastic collision response and the per-tick collision resolver
//!
//! `elastic_collision` is the impulse computation for a perfectly elastic
//! 2-D collision between two unequal masses. `resolve_collisions` walks
//! the population once per tick, asks the overlap detector for partners,
//! and dispatches each contact to either the elastic response or complex
//! formation depending on the species pairing.

use super::detection::OverlapDetector;
use super::params::Parameters;
use super::reactions::form_complex;
use super::states::{Particle, Population, Species};

/// Compute post-collision velocities for a perfectly elastic collision
/// along the line connecting the two centers.
///
/// Guards:
/// - zero center distance: no-op (degenerate normal, avoids a division
///   by zero)
/// - separating pair (`velocity_along_normal >= 0`): no-op, so a pair
///   that stays in contact across several ticks receives one impulse,
///   not one per tick
///
/// Tangential velocity components are left untouched (no friction or
/// rotation).
pub fn elastic_collision(p1: &mut Particle, p2: &mut Particle) {
    // Center-to-center displacement, pointing from p2 toward p1
    let d = p1.x - p2.x;
    let distance = d.norm();

    if distance == 0.0 {
        return;
    }

    // Collision normal
    let n = d / distance;

    // Relative velocity projected onto the normal
    let dv = p1.v - p2.v;
    let velocity_along_normal = dv.dot(&n);

    // Already separating (or at rest relative to each other): nothing to do
    if velocity_along_normal >= 0.0 {
        return;
    }

    let m1 = p1.m;
    let m2 = p2.m;

    // Impulse scalar for unequal masses
    let impulse = 2.0 * velocity_along_normal / (m1 + m2);

    // Equal and opposite, each scaled by the other body's mass
    p1.v -= impulse * m2 * n;
    p2.v += impulse * m1 * n;
}

/// Resolve one tick of contacts.
///
/// For every particle in the insertion-order snapshot, only the first
/// overlap the detector reports is handled; remaining simultaneous
/// contacts are left for later ticks. This deliberately undercounts
/// multi-way collisions and is part of the model, not an optimization.
///
/// X–Y contacts form a complex; every other pairing gets the elastic
/// response. Transitions apply immediately, so later particles in the
/// same tick observe the mutated population (consumed partners are
/// skipped via the stale-handle guards).
pub fn resolve_collisions(population: &mut Population, detector: &dyn OverlapDetector, params: &Parameters) {
    for id in population.ids() {
        // Consumed earlier in this tick
        let Some(subject) = population.get(id) else {
            continue;
        };

        let hits = detector.overlapping(subject, population);
        let Some(&partner) = hits.first() else {
            continue;
        };

        let sa = subject.species;
        let Some(sb) = population.get(partner).map(|p| p.species) else {
            continue;
        };

        match (sa, sb) {
            (Species::X, Species::Y) => form_complex(population, id, partner, params),
            (Species::Y, Species::X) => form_complex(population, partner, id, params),
            _ => {
                if let Some((p1, p2)) = population.get_pair_mut(id, partner) {
                    elastic_collision(p1, p2);
                }
            }
        }
    }
}
