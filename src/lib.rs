pub mod simulation;
pub mod configuration;
pub mod viewport;
pub mod error;
pub mod logging;

pub use simulation::vector::{NVec2, Vector2D};
pub use simulation::states::{Body, Identity};
pub use simulation::params::{Parameters, DEFAULT_DT, G};
pub use simulation::forces::GravityField;
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::world::World;
pub use simulation::scenario::{random_body, Scenario, PRESETS};

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, ViewportConfig};

pub use viewport::Viewport;
pub use error::SimError;
