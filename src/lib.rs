pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::params::{Parameters, DAYS_PER_YEAR, SOLAR_MASS};
pub use simulation::pairs::{pair_mut, PairIndices};
pub use simulation::scenario::Scenario;

pub use configuration::config::{load_scenario, BodyConfig, ConfigError, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_advance, bench_energy_drift};
