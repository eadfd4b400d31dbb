//! Core state types for the n-body simulation.
//!
//! Defines the body/system structs:
//! - `Body`   using `NVec3` (position, velocity, mass)
//! - `System` holding the ordered list of bodies and the current time `t`
//!
//! The first body of a system is the gravitationally dominant member; its
//! velocity is adjusted at construction so the total momentum is zero.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
}

impl Body {
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Self {
        Self { x, v, m }
    }

    /// Drift: advance position by one step, x_n+1 = x_n + dt * v
    pub fn advance(&mut self, dt: f64) {
        self.x += self.v * dt;
    }

    /// Remove `momentum` from this body: v = v - p / m
    /// Used once per system, at construction, to zero the total momentum.
    pub fn adjust_momentum(&mut self, momentum: NVec3) {
        self.v -= momentum / self.m;
    }

    /// Symmetric velocity kick for one unordered pair of bodies.
    ///
    /// Both velocities are updated in the same call with the same `dx` and
    /// magnitude, so the pair's combined momentum is unchanged (Newton's
    /// third law). Coincident bodies make `d2` zero and the division
    /// produces inf/NaN, which propagates like every other float here.
    pub fn correct(&mut self, other: &mut Body, dt: f64) {
        let dx = self.relative_position(other);
        let d2 = dx.norm_squared();
        let mag = dt / (d2 * d2.sqrt()); // dt / distance^3
        self.v -= dx * other.m * mag;
        other.v += dx * self.m * mag;
    }

    pub fn momentum(&self) -> NVec3 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// Pair potential, -(m1 * m2) / r. Already symmetric, so it is summed
    /// once per unordered pair, not once per ordered pair.
    pub fn potential_energy(&self, other: &Body) -> f64 {
        let distance = self.relative_position(other).norm();
        -(self.m * other.m) / distance
    }

    pub fn relative_position(&self, other: &Body) -> NVec3 {
        self.x - other.x
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection, body 0 is the dominant member
    pub t: f64, // time
}

impl System {
    /// Build a system from bodies in order, then zero its total momentum by
    /// adjusting the first body's velocity. This is the only normalization
    /// ever performed; momentum drift accumulated by later correction steps
    /// is accepted.
    pub fn new(bodies: Vec<Body>) -> Self {
        let mut sys = Self { bodies, t: 0.0 };
        let momentum = sys.momentum();
        if let Some(first) = sys.bodies.first_mut() {
            first.adjust_momentum(momentum);
        }
        sys
    }

    pub fn kinetic_energy(&self) -> f64 {
        let mut total = 0.0;
        for body in &self.bodies {
            total += body.kinetic_energy();
        }
        total
    }

    /// Sum of pair potentials over the same unordered-pair enumeration the
    /// integrator uses, each pair exactly once.
    pub fn potential_energy(&self) -> f64 {
        let mut total = 0.0;
        for (i, j) in super::pairs::PairIndices::new(self.bodies.len()) {
            total += self.bodies[i].potential_energy(&self.bodies[j]);
        }
        total
    }

    pub fn energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn momentum(&self) -> NVec3 {
        let mut momentum = NVec3::zeros();
        for body in &self.bodies {
            momentum += body.momentum();
        }
        momentum
    }
}
