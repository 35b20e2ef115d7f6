//! Overlap detection seam
//!
//! The collision resolver does not compute which particles intersect; it
//! consumes an [`OverlapDetector`]. The shipped [`SweepDetector`] is a
//! direct circle-overlap scan; a spatial hash or grid could be swapped in
//! behind the same trait without touching the resolver.

use super::states::{Particle, ParticleId, Population};

/// Capability that reports which live particles currently intersect a
/// given particle.
pub trait OverlapDetector {
    /// Ids of particles overlapping `subject`, excluding `subject`
    /// itself. The order of the result decides which collision is
    /// handled first; implementations must commit to a stable order.
    fn overlapping(&self, subject: &Particle, population: &Population) -> Vec<ParticleId>;
}

/// Two circles overlap when their center distance is below the sum of
/// their radii. Exact touching does not count.
pub fn circles_overlap(a: &Particle, b: &Particle) -> bool {
    let d = a.x - b.x;
    let reach = a.radius + b.radius;
    d.dot(&d) < reach * reach
}

/// Direct O(n) overlap scan.
///
/// Reports overlaps in population insertion order. That order is the
/// documented tie-break for simultaneous collisions: the earliest-spawned
/// overlapping partner is the one the resolver handles.
pub struct SweepDetector;

impl OverlapDetector for SweepDetector {
    fn overlapping(&self, subject: &Particle, population: &Population) -> Vec<ParticleId> {
        population
            .iter()
            .filter(|p| p.id != subject.id && circles_overlap(subject, p))
            .map(|p| p.id)
            .collect()
    }
}
