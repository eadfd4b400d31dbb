use nbsim::Scenario;

use clap::Parser;
use anyhow::Result;

/// Symplectic n-body energy benchmark: integrate the sun and the four gas
/// giants and print total energy before and after the run.
#[derive(Parser, Debug)]
struct Args {
    /// Number of integration steps
    #[arg(default_value_t = 1000)]
    steps: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario = Scenario::solar_system();
    let dt = scenario.parameters.h0;
    let mut sys = scenario.system;

    println!("{:.9}", sys.energy());
    for _ in 0..args.steps {
        sys.advance(dt);
    }
    println!("{:.9}", sys.energy());

    Ok(())
}
