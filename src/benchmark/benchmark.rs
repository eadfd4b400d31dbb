//! Wall-clock benchmarks for the integration kernel.
//!
//! `bench_advance` times the O(n^2) pairwise step across a range of body
//! counts; `bench_energy_drift` runs the reference scenario and reports how
//! the total energy drifts with step count, as CSV for plotting.

use std::time::Instant;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec3, System};

/// Build a synthetic system of `n` bodies on a deterministic sin/cos
/// lattice, no RNG needed.
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        bodies.push(Body::new(x, NVec3::zeros(), 1.0));
    }

    System::new(bodies)
}

/// Time the advance step for a range of body counts.
pub fn bench_advance() {
    let ns = [5, 10, 20, 40, 80, 160];
    let steps = 1000;
    let dt = 0.01;

    for n in ns {
        let mut sys = make_system(n);

        // Warm up
        sys.advance(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            sys.advance(dt);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, advance = {:10.3e} s/step", per_step);
    }
}

/// Energy drift of the reference scenario vs step count.
/// Paste the CSV output directly into a plotting tool.
pub fn bench_energy_drift() {
    println!("steps,energy,relative_drift");

    let scenario = Scenario::solar_system();
    let dt = scenario.parameters.h0;
    let mut sys = scenario.system;
    let e0 = sys.energy();

    let mut done = 0;
    for checkpoint in (0..=2000).step_by(100) {
        while done < checkpoint {
            sys.advance(dt);
            done += 1;
        }
        let e = sys.energy();
        println!("{},{:.9},{:.3e}", checkpoint, e, ((e - e0) / e0).abs());
    }
}
