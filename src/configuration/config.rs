//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`ParametersConfig`] – step count and step size
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//!
//! # YAML format
//! A scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   steps: 1000             # fixed integration steps
//!   h0: 0.01                # step size
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 39.47841760435743
//!   - x: [ 4.841431442464721, -1.1603200440274284, -0.10362204447112311 ]
//!     v: [ 0.606326392995832, 2.81198684491626, -0.02521836165988763 ]
//!     m: 0.03769367487038949
//! ```
//!
//! Velocities are given in simulation units (AU/year), already scaled from
//! the AU/day ephemeris values. Body order matters: the first body listed
//! absorbs the momentum normalization.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Numerical parameters of a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub steps: usize, // number of fixed integration steps
    pub h0: f64,      // step size
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 3], // initial position
    pub v: [f64; 3], // initial velocity, in simulation units per time unit
    pub m: f64,      // mass
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // step count and step size
    pub bodies: Vec<BodyConfig>,      // initial state of the system, in order
}

/// Errors that can occur while loading a scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load a scenario configuration from a YAML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}
