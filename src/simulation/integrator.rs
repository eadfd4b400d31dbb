//! Fixed-step symplectic integrator for the n-body system.
//!
//! One step is a kick pass over every unordered pair of bodies followed by
//! a drift pass over every body, both with the same `dt`. Positions are
//! advanced with the velocities the kick pass just produced; that coupling
//! is what makes the scheme leapfrog-like rather than forward Euler.

use super::pairs::{pair_mut, PairIndices};
use super::states::System;

impl System {
    /// Advance the system by one step of size `dt`, in place.
    ///
    /// Pass 1 applies the pairwise velocity correction in the fixed
    /// (0,1), (0,2), ..., (n-2,n-1) order. The order is observable: float
    /// addition does not associate, and reference output is reproduced
    /// bit for bit only with this enumeration.
    /// Pass 2 drifts every position by the updated velocity.
    pub fn advance(&mut self, dt: f64) {
        let n = self.bodies.len();

        for (i, j) in PairIndices::new(n) {
            let (left, right) = pair_mut(&mut self.bodies, i, j);
            left.correct(right, dt);
        }

        for body in self.bodies.iter_mut() {
            body.advance(dt);
        }

        self.t += dt;
    }
}
