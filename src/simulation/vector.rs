//! Planar vector operations used by the physics core
//!
//! Positions, velocities and forces are all `NVec2` (nalgebra `Vector2<f64>`).
//! [`Vector2D`] adds the handful of value-returning operations the simulation
//! and its report need. None of them mutate the receiver.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

pub trait Vector2D: Sized {
    /// Euclidean norm `sqrt(x² + y²)`
    fn length(self) -> f64;

    /// `self / self.length()`
    ///
    /// The zero vector has no direction; the result is NaN in both
    /// components and callers must not rely on it.
    fn unit(self) -> Self;

    /// Component-wise scale, for screen projection
    fn scale_xy(self, sx: f64, sy: f64) -> Self;

    /// Component-wise offset, for screen projection
    fn translate(self, dx: f64, dy: f64) -> Self;

    /// `self - other`, the displacement pointing from `other` to `self`
    fn displacement_from(self, other: Self) -> Self;
}

impl Vector2D for NVec2 {
    fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn unit(self) -> Self {
        let len = self.length();
        NVec2::new(self.x / len, self.y / len)
    }

    fn scale_xy(self, sx: f64, sy: f64) -> Self {
        NVec2::new(self.x * sx, self.y * sy)
    }

    fn translate(self, dx: f64, dy: f64) -> Self {
        NVec2::new(self.x + dx, self.y + dy)
    }

    fn displacement_from(self, other: Self) -> Self {
        NVec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_euclidean() {
        assert_eq!(NVec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(NVec2::zeros().length(), 0.0);
    }

    #[test]
    fn unit_has_length_one_and_same_direction() {
        let v = NVec2::new(-6.0, 8.0);
        let u = v.unit();
        assert!((u.length() - 1.0).abs() < 1e-15);
        assert_eq!(u, NVec2::new(-0.6, 0.8));
        // receiver is untouched
        assert_eq!(v, NVec2::new(-6.0, 8.0));
    }

    #[test]
    fn unit_of_zero_is_nan() {
        let u = NVec2::zeros().unit();
        assert!(u.x.is_nan() && u.y.is_nan());
    }

    #[test]
    fn scale_and_translate_project_to_screen() {
        let p = NVec2::new(5e9, -1e9).scale_xy(0.1e-6, 0.1e-6).translate(540.0, 360.0);
        assert!((p.x - 1040.0).abs() < 1e-9);
        assert!((p.y - 260.0).abs() < 1e-9);
    }

    #[test]
    fn displacement_points_from_other() {
        let a = NVec2::new(1.0, 2.0);
        let b = NVec2::new(4.0, -2.0);
        assert_eq!(a.displacement_from(b), NVec2::new(-3.0, 4.0));
        assert_eq!(a.displacement_from(b), -b.displacement_from(a));
    }
}
