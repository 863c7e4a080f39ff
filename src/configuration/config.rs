//! Configuration types for loading scenarios from YAML.
//!
//! A thin, `serde`-deserializable description of a scenario:
//!
//! - [`ParametersConfig`] – step size, optional G override and step count
//! - [`BodyConfig`]       – identity and initial state of each body
//! - [`ViewportConfig`]   – optional world-to-screen mapping for reports
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 43200.0             # fixed step, seconds
//!   G: 6.67430e-11          # optional
//!   steps: 720              # optional, ticks to run
//!
//! viewport:                 # optional
//!   scale: 1.0e-7           # pixels per metre
//!   width: 1080.0
//!   height: 720.0
//!
//! bodies:
//!   - name: Earth
//!     color: [255, 0, 0]    # optional, defaults to white
//!     m: 5.9722e24
//!     x: [0.0, 0.0]
//!     v: [0.0, -20.0]
//! ```
//!
//! [`Scenario::build_scenario`](crate::simulation::scenario::Scenario::build_scenario)
//! validates this and turns it into a runtime world.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub dt: f64, // time step size (s)
    #[serde(rename = "G", default)]
    pub g: Option<f64>, // gravitational constant, defaults to the CODATA value
    #[serde(default)]
    pub steps: Option<u64>, // number of ticks the binary runs
}

/// A single body's identity and initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub color: Option<[u8; 3]>,
    pub m: f64,      // mass (kg)
    pub x: Vec<f64>, // initial position (m)
    pub v: Vec<f64>, // initial velocity (m/s)
}

/// World-to-screen mapping used for textual reports
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub viewport: Option<ViewportConfig>,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BODIES: &str = r#"
parameters:
  dt: 86400.0
bodies:
  - name: Earth
    color: [0, 0, 255]
    m: 6.0e24
    x: [0.0, 0.0]
    v: [0.0, 0.0]
  - name: Moon
    m: 7.0e22
    x: [1.0e8, 0.0]
    v: [0.0, 1000.0]
"#;

    #[test]
    fn parses_minimal_scenario() {
        let cfg = ScenarioConfig::from_yaml_str(TWO_BODIES).unwrap();
        assert_eq!(cfg.parameters.dt, 86400.0);
        assert_eq!(cfg.parameters.g, None);
        assert_eq!(cfg.parameters.steps, None);
        assert!(cfg.viewport.is_none());
        assert_eq!(cfg.bodies.len(), 2);
        assert_eq!(cfg.bodies[0].color, Some([0, 0, 255]));
        assert_eq!(cfg.bodies[1].color, None);
        assert_eq!(cfg.bodies[1].v, vec![0.0, 1000.0]);
    }

    #[test]
    fn parses_gravity_override_and_viewport() {
        let yaml = r#"
parameters:
  dt: 1.0
  G: 1.0
  steps: 10
viewport:
  scale: 2.0
  width: 100.0
  height: 50.0
bodies: []
"#;
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.parameters.g, Some(1.0));
        assert_eq!(cfg.parameters.steps, Some(10));
        assert_eq!(
            cfg.viewport,
            Some(ViewportConfig {
                scale: 2.0,
                width: 100.0,
                height: 50.0
            })
        );
    }

    #[test]
    fn rejects_missing_mass() {
        let yaml = r#"
parameters:
  dt: 1.0
bodies:
  - name: Ghost
    x: [0.0, 0.0]
    v: [0.0, 0.0]
"#;
        assert!(ScenarioConfig::from_yaml_str(yaml).is_err());
    }
}
