//! Build fully-initialized worlds from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) or a preset name and produces a
//! `Scenario`: the world at t = 0 plus what the host needs to drive and
//! report on it (step count, viewport).

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::params::{Parameters, DEFAULT_DT, G};
use crate::simulation::states::{Body, Identity};
use crate::simulation::vector::NVec2;
use crate::simulation::world::World;
use crate::viewport::Viewport;

/// Ticks run when neither the scenario nor the caller says otherwise
pub const DEFAULT_STEPS: u64 = 720;

pub const PRESETS: [&str; 2] = ["earth-moon-spacecraft", "mars-spacecraft"];

const PLANET_NAMES: [&str; 9] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

const WHITE: [u8; 3] = [255, 255, 255];

pub struct Scenario {
    pub world: World,
    pub steps: u64,
    pub viewport: Viewport,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let parameters = Parameters::with_gravity(cfg.parameters.dt, cfg.parameters.g.unwrap_or(G))?;

        // Bodies: map `BodyConfig` -> runtime `Body`, validating as we go
        let bodies = cfg
            .bodies
            .into_iter()
            .map(body_from_config)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            world: World::with_parameters(bodies, parameters),
            steps: cfg.parameters.steps.unwrap_or(DEFAULT_STEPS),
            viewport: cfg.viewport.map(Viewport::from).unwrap_or_default(),
        })
    }

    /// Look up one of the built-in [`PRESETS`]
    pub fn preset(name: &str) -> Result<Self, SimError> {
        let bodies = match name {
            "earth-moon-spacecraft" => vec![
                Body::new(
                    Identity::new("Earth", [255, 0, 0]),
                    5.9722e24,
                    NVec2::new(0.0, 0.0),
                    NVec2::new(0.0, -20.0),
                )?,
                Body::new(
                    Identity::new("Moon", [0, 255, 0]),
                    5.9722e22,
                    NVec2::new(5e9, 0.0),
                    NVec2::new(0.0, -100.0),
                )?,
                Body::new(
                    Identity::new("Spacecraft", [0, 0, 255]),
                    5.9722e22,
                    NVec2::new(-5e9, 1e9),
                    NVec2::new(-10.0, 150.0),
                )?,
            ],
            "mars-spacecraft" => vec![
                Body::new(
                    Identity::new("Mars", [255, 0, 0]),
                    6.417e23,
                    NVec2::new(0.0, 0.0),
                    NVec2::new(0.0, -10.0),
                )?,
                Body::new(
                    Identity::new("Spacecraft", WHITE),
                    815.0,
                    NVec2::new(1e8, 1e8),
                    NVec2::new(0.0, -700.0),
                )?,
            ],
            other => return Err(SimError::UnknownPreset(other.to_string())),
        };

        Ok(Self {
            world: World::new(bodies, DEFAULT_DT)?,
            steps: DEFAULT_STEPS,
            viewport: Viewport::default(),
        })
    }

    /// `count` random bodies drawn from a generator seeded with `seed`
    pub fn random(count: usize, seed: u64, dt: f64) -> Result<Self, SimError> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let bodies = (0..count).map(|_| random_body(&mut rng)).collect();

        Ok(Self {
            world: World::new(bodies, dt)?,
            steps: DEFAULT_STEPS,
            viewport: Viewport::default(),
        })
    }
}

fn body_from_config(bc: BodyConfig) -> Result<Body, SimError> {
    let x = vec2(&bc.name, "position", &bc.x)?;
    let v = vec2(&bc.name, "velocity", &bc.v)?;
    let identity = Identity::new(bc.name, bc.color.unwrap_or(WHITE));
    Body::new(identity, bc.m, x, v)
}

fn vec2(name: &str, field: &'static str, c: &[f64]) -> Result<NVec2, SimError> {
    match c {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::WrongDimension {
            name: name.to_string(),
            field,
            len: c.len(),
        }),
    }
}

/// A planet-like body with a random name, mass, state and color
///
/// - mass in (0, 6.417e25] kg
/// - position in [-1e8, 1e8] m per axis
/// - velocity in [-3500, 3500] m/s per axis
pub fn random_body(rng: &mut fastrand::Rng) -> Body {
    let name = PLANET_NAMES[rng.usize(..PLANET_NAMES.len())];

    // 1 - [0, 1) keeps the mass strictly positive
    let m = (1.0 - rng.f64()) * 6.417e25;

    let x = NVec2::new(rng.f64() * 2e8 - 1e8, rng.f64() * 2e8 - 1e8);
    let v = NVec2::new(rng.f64() * 7000.0 - 3500.0, rng.f64() * 7000.0 - 3500.0);
    let color = [rng.u8(..), rng.u8(..), rng.u8(..)];

    Body {
        identity: Identity::new(name, color),
        m,
        x,
        v,
    }
}
