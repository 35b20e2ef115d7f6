pub mod states;
pub mod params;
pub mod engine;
pub mod detection;
pub mod collision;
pub mod reactions;
pub mod integrator;
pub mod scenario;
