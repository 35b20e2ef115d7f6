pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, Particle, ParticleId, Population, Species, SpeciesCounts};
pub use simulation::params::Parameters;
pub use simulation::detection::{circles_overlap, OverlapDetector, SweepDetector};
pub use simulation::collision::{elastic_collision, resolve_collisions};
pub use simulation::reactions::{break_complex, form_complex};
pub use simulation::integrator::integrate_motion;
pub use simulation::engine::{Command, Simulation};
pub use simulation::scenario::Scenario;

pub use configuration::config::ScenarioConfig;

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
