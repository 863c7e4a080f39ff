//! The world: owned bodies, the clock, and the per-tick state transition
//!
//! A tick is two phases:
//! 1. net force on every body, computed from an immutable view of the
//!    pre-tick bodies into a separate buffer
//! 2. integration of every body against its buffered force
//!
//! No body moves before every force of the tick is known, so iteration order
//! cannot leak into the result.

use log::{debug, trace, warn};

use crate::error::SimError;
use crate::simulation::forces::GravityField;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::Body;
use crate::simulation::vector::NVec2;

#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    time: f64,
    parameters: Parameters,
    gravity: GravityField,
    non_finite_reported: bool,
}

impl World {
    /// Build a world at `t = 0` with the default gravitational constant
    pub fn new(bodies: Vec<Body>, dt: f64) -> Result<Self, SimError> {
        Ok(Self::with_parameters(bodies, Parameters::new(dt)?))
    }

    pub fn with_parameters(bodies: Vec<Body>, parameters: Parameters) -> Self {
        debug!(
            "world created: {} bodies, dt = {} s, G = {:e}",
            bodies.len(),
            parameters.dt,
            parameters.g
        );
        Self {
            bodies,
            time: 0.0,
            gravity: GravityField::with_constant(parameters.g),
            parameters,
            non_finite_reported: false,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn dt(&self) -> f64 {
        self.parameters.dt
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn gravity(&self) -> &GravityField {
        &self.gravity
    }

    /// Net force currently acting on `bodies[idx]`
    pub fn net_force_on(&self, idx: usize) -> NVec2 {
        self.gravity.net_force_on(idx, &self.bodies)
    }

    /// Advance every body and the clock by one `dt`
    pub fn step(&mut self) {
        let dt = self.parameters.dt;

        // Phase 1: forces from the pre-tick state only
        let mut forces = vec![NVec2::zeros(); self.bodies.len()];
        self.gravity.net_forces(&self.bodies, &mut forces);

        // Phase 2: commit
        for (body, force) in self.bodies.iter_mut().zip(forces.iter()) {
            semi_implicit_euler(body, *force, dt);
        }

        self.time += dt;
        trace!("t = {} s", self.time);

        if !self.non_finite_reported {
            if let Some(body) = self.bodies.iter().find(|b| !b.is_finite()) {
                warn!(
                    "body `{}` has a non-finite state at t = {} s, two bodies likely coincided",
                    body.name(),
                    self.time
                );
                self.non_finite_reported = true;
            }
        }
    }

    /// Run `steps` ticks and return the final time
    pub fn run(&mut self, steps: u64) -> f64 {
        for _ in 0..steps {
            self.step();
        }
        self.time
    }

    /// Total linear momentum `Σ m·v`
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        self.gravity.potential_energy(&self.bodies)
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(Body::is_finite)
    }
}
