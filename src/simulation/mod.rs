pub mod states;
pub mod params;
pub mod pairs;
pub mod integrator;
pub mod scenario;
