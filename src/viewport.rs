//! Mapping from world coordinates (m) to screen coordinates (px)
//!
//! Only reports use this; the physics never sees screen space.

use crate::configuration::config::ViewportConfig;
use crate::simulation::vector::{NVec2, Vector2D};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64, // pixels per metre
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Scale about the world origin, then move the origin to the screen centre
    pub fn to_screen(&self, position: NVec2) -> NVec2 {
        position
            .scale_xy(self.scale, self.scale)
            .translate(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 0.1e-6,
            width: 1080.0,
            height: 720.0,
        }
    }
}

impl From<ViewportConfig> for Viewport {
    fn from(cfg: ViewportConfig) -> Self {
        Self {
            scale: cfg.scale,
            width: cfg.width,
            height: cfg.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_centre() {
        let vp = Viewport::default();
        assert_eq!(vp.to_screen(NVec2::zeros()), NVec2::new(540.0, 360.0));
    }

    #[test]
    fn scales_before_translating() {
        let vp = Viewport {
            scale: 2.0,
            width: 100.0,
            height: 40.0,
        };
        assert_eq!(vp.to_screen(NVec2::new(-10.0, 5.0)), NVec2::new(30.0, 30.0));
    }
}
