//! Core state types for the particle simulation.
//!
//! Defines the particle model and the population store:
//! - `Species` – closed set of particle kinds: X atoms, Y atoms, complexes
//! - `Particle` – position, velocity, mass, radius, species tag
//! - `Population` – the live particle set, kept in insertion order, with
//!   per-species views derived from the species tag
//!
//! Because species is a field of the particle itself, every particle is a
//! member of exactly one species view at any instant and the "all" view is
//! their disjoint union by construction.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Particle kind. X and Y atoms combine into complexes on contact;
/// complexes decay back into one X and one Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    X,
    Y,
    Complex,
}

/// Stable handle to a live particle. Ids are never reused within a run,
/// so a handle held across a transition simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

#[derive(Debug, Clone)]
pub struct Particle {
    pub id: ParticleId,
    pub x: NVec2, // position
    pub v: NVec2, // velocity, arena units per tick
    pub m: f64, // mass
    pub radius: f64, // collision/visual radius
    pub species: Species,
}

/// Per-species population counts, read by the HUD and by tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesCounts {
    pub x: usize,
    pub y: usize,
    pub complexes: usize,
}

/// The live particle set.
///
/// Particles are stored in insertion order; that order is the stable
/// iteration order used by the overlap detector and the collision
/// resolver, so a given layout resolves identically across runs.
#[derive(Debug, Clone, Default)]
pub struct Population {
    particles: Vec<Particle>,
    next_id: u64,
}

impl Population {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            next_id: 0,
        }
    }

    /// Remove every particle. Ids keep counting up across a clear.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Add a particle and return its handle.
    pub fn spawn(&mut self, species: Species, x: NVec2, v: NVec2, m: f64, radius: f64) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.particles.push(Particle {
            id,
            x,
            v,
            m,
            radius,
            species,
        });
        id
    }

    /// Remove a particle by handle. Returns the removed particle, or
    /// `None` if the handle is stale. Insertion order of the remaining
    /// particles is preserved.
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        let idx = self.particles.iter().position(|p| p.id == id)?;
        Some(self.particles.remove(idx))
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.get(id).is_some()
    }

    /// Borrow two distinct particles mutably, for pairwise collision
    /// response. Returns `None` if either handle is stale or `a == b`.
    pub fn get_pair_mut(&mut self, a: ParticleId, b: ParticleId) -> Option<(&mut Particle, &mut Particle)> {
        if a == b {
            return None;
        }
        let ia = self.particles.iter().position(|p| p.id == a)?;
        let ib = self.particles.iter().position(|p| p.id == b)?;
        if ia < ib {
            let (lo, hi) = self.particles.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.particles.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    /// All live particles, insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    /// Snapshot of live ids in insertion order. The resolver iterates
    /// over this snapshot so that transitions mid-tick cannot invalidate
    /// the traversal.
    pub fn ids(&self) -> Vec<ParticleId> {
        self.particles.iter().map(|p| p.id).collect()
    }

    /// X-atom view.
    pub fn xs(&self) -> impl Iterator<Item = &Particle> {
        self.of_species(Species::X)
    }

    /// Y-atom view.
    pub fn ys(&self) -> impl Iterator<Item = &Particle> {
        self.of_species(Species::Y)
    }

    /// Complex view.
    pub fn complexes(&self) -> impl Iterator<Item = &Particle> {
        self.of_species(Species::Complex)
    }

    pub fn of_species(&self, species: Species) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(move |p| p.species == species)
    }

    pub fn count(&self, species: Species) -> usize {
        self.of_species(species).count()
    }

    pub fn counts(&self) -> SpeciesCounts {
        let mut counts = SpeciesCounts {
            x: 0,
            y: 0,
            complexes: 0,
        };
        for p in &self.particles {
            match p.species {
                Species::X => counts.x += 1,
                Species::Y => counts.y += 1,
                Species::Complex => counts.complexes += 1,
            }
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
