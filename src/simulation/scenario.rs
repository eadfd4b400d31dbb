//! Build fully-initialized simulation scenarios.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, momentum normalized)
//!
//! The built-in reference dataset (the sun and the four gas giants) lives
//! here as well, with the literal initial conditions of the classic
//! benchmark.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::params::{Parameters, DAYS_PER_YEAR, SOLAR_MASS};
use crate::simulation::states::{Body, NVec3, System};

/// A fully-initialized simulation scenario: parameters plus the system
/// state, ready to be stepped.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    /// Map a `ScenarioConfig` into the runtime representation. Body order
    /// in the config is preserved; the first body is the dominant member
    /// and absorbs the momentum normalization in `System::new`.
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                Body::new(
                    NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                    NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
                    bc.m,
                )
            })
            .collect();

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            steps: p_cfg.steps,
            h0: p_cfg.h0,
        };

        Self {
            parameters,
            system: System::new(bodies),
        }
    }

    /// The reference benchmark scenario: sun + jupiter + saturn + uranus +
    /// neptune, default parameters (1000 steps of 0.01).
    pub fn solar_system() -> Self {
        Self {
            parameters: Parameters::default(),
            system: System::new(solar_bodies()),
        }
    }
}

/// Initial position, velocity, and mass of the five reference bodies.
/// Positions are AU, masses solar masses; the ephemeris velocities are
/// AU/day and get scaled to AU/year here, before construction.
fn solar_bodies() -> Vec<Body> {
    let sol = Body::new(NVec3::zeros(), NVec3::zeros(), SOLAR_MASS);

    let jupiter = Body::new(
        NVec3::new(
            4.84143144246472090e+00,
            -1.16032004402742839e+00,
            -1.03622044471123109e-01,
        ),
        NVec3::new(
            1.66007664274403694e-03,
            7.69901118419740425e-03,
            -6.90460016972063023e-05,
        ) * DAYS_PER_YEAR,
        9.54791938424326609e-04 * SOLAR_MASS,
    );

    let saturn = Body::new(
        NVec3::new(
            8.34336671824457987e+00,
            4.12479856412430479e+00,
            -4.03523417114321381e-01,
        ),
        NVec3::new(
            -2.76742510726862411e-03,
            4.99852801234917238e-03,
            2.30417297573763929e-05,
        ) * DAYS_PER_YEAR,
        2.85885980666130812e-04 * SOLAR_MASS,
    );

    let uranus = Body::new(
        NVec3::new(
            1.28943695621391310e+01,
            -1.51111514016986312e+01,
            -2.23307578892655734e-01,
        ),
        NVec3::new(
            2.96460137564761618e-03,
            2.37847173959480950e-03,
            -2.96589568540237556e-05,
        ) * DAYS_PER_YEAR,
        4.36624404335156298e-05 * SOLAR_MASS,
    );

    let neptune = Body::new(
        NVec3::new(
            1.53796971148509165e+01,
            -2.59193146099879641e+01,
            1.79258772950371181e-01,
        ),
        NVec3::new(
            2.68067772490389322e-03,
            1.62824170038242295e-03,
            -9.51592254519715870e-05,
        ) * DAYS_PER_YEAR,
        5.15138902046611451e-05 * SOLAR_MASS,
    );

    vec![sol, jupiter, saturn, uranus, neptune]
}
