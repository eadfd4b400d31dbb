use nbsim::{bench_advance, bench_energy_drift};

fn main() {
    bench_advance();
    bench_energy_drift();
}
