//! Numerical and physical parameters for a world
//!
//! `Parameters` holds the settings fixed for a world's lifetime:
//! - the integration step `dt` (seconds),
//! - the gravitational constant `g` (m^3 kg^-1 s^-2)

use crate::error::SimError;

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67430e-11;

/// One 60 Hz frame standing for 30 days: 1/60 * 60 * 60 * 24 * 30 seconds
pub const DEFAULT_DT: f64 = 43_200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub dt: f64, // time step
    pub g: f64,  // gravitational constant
}

impl Parameters {
    pub fn new(dt: f64) -> Result<Self, SimError> {
        Self::with_gravity(dt, G)
    }

    pub fn with_gravity(dt: f64, g: f64) -> Result<Self, SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }
        if !(g.is_finite() && g > 0.0) {
            return Err(SimError::InvalidGravitationalConstant(g));
        }
        Ok(Self { dt, g })
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self { dt: DEFAULT_DT, g: G }
    }
}
