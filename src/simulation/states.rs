//! Core state types for the simulation
//!
//! A `Body` is a point mass with a position and a velocity, both `NVec2`,
//! plus an `Identity` the physics never reads. Planets, moons and spacecraft
//! are all just bodies; only their identity differs.

use crate::error::SimError;
use crate::simulation::vector::NVec2;

/// Presentation metadata carried alongside a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub color: [u8; 3], // rgb
}

impl Identity {
    pub fn new(name: impl Into<String>, color: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub identity: Identity,
    pub m: f64,  // mass (kg)
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
}

impl Body {
    /// Build a body, rejecting a non-positive or non-finite mass and
    /// non-finite initial state
    pub fn new(identity: Identity, m: f64, x: NVec2, v: NVec2) -> Result<Self, SimError> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::NonPositiveMass {
                name: identity.name,
                mass: m,
            });
        }
        if !(x.x.is_finite() && x.y.is_finite()) {
            return Err(SimError::NonFiniteState {
                name: identity.name,
                field: "position",
            });
        }
        if !(v.x.is_finite() && v.y.is_finite()) {
            return Err(SimError::NonFiniteState {
                name: identity.name,
                field: "velocity",
            });
        }
        Ok(Self { identity, m, x, v })
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Linear momentum `m·v`
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}
