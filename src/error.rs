//! Errors raised while building a world
//!
//! Stepping never fails. Everything that can go wrong is caught when bodies,
//! parameters or scenarios are constructed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("body `{name}` has mass {mass} kg, mass must be finite and positive")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body `{name}` has a non-finite {field}")]
    NonFiniteState { name: String, field: &'static str },

    #[error("time step {0} s is invalid, dt must be finite and positive")]
    InvalidTimeStep(f64),

    #[error("gravitational constant {0} is invalid, G must be finite and positive")]
    InvalidGravitationalConstant(f64),

    #[error("body `{name}` {field} has {len} components, expected 2")]
    WrongDimension {
        name: String,
        field: &'static str,
        len: usize,
    },

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}
