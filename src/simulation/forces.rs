//! Newtonian gravity between point masses
//!
//! Direct pairwise summation: every body feels every other body, O(n^2)
//! force evaluations per step. Forces (not accelerations) are returned so
//! the integrator owns the division by mass.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::simulation::params::G;
use crate::simulation::states::Body;
use crate::simulation::vector::{NVec2, Vector2D};

/// Unsoftened inverse-square gravity
///
/// Coincident bodies have no defined force. `force_on` then returns NaN
/// components and they propagate through later steps; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    pub g: f64, // gravitational constant
}

impl GravityField {
    pub fn new() -> Self {
        Self { g: G }
    }

    pub fn with_constant(g: f64) -> Self {
        Self { g }
    }

    /// Force acting on `a` due to `b`
    pub fn force_on(&self, a: &Body, b: &Body) -> NVec2 {
        // d points from b to a
        let d = a.x.displacement_from(b.x);
        let r = d.length();

        // masses multiplied first so that force_on(a, b) == -force_on(b, a) bit for bit
        let magnitude = self.g * (a.m * b.m) / (r * r);

        // negated so the force points from a toward b
        -magnitude * d.unit()
    }

    /// Sum of the forces every other body exerts on `bodies[idx]`
    ///
    /// Self-pairs are skipped by index, never by distance.
    pub fn net_force_on(&self, idx: usize, bodies: &[Body]) -> NVec2 {
        let target = &bodies[idx];
        bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != idx)
            .fold(NVec2::zeros(), |acc, (_, other)| acc + self.force_on(target, other))
    }

    /// Fill `out[i]` with the net force on `bodies[i]`
    ///
    /// `bodies` is only borrowed immutably, so every entry is computed from
    /// the same set of positions regardless of evaluation order.
    pub fn net_forces(&self, bodies: &[Body], out: &mut [NVec2]) {
        debug_assert_eq!(bodies.len(), out.len());

        #[cfg(feature = "parallel")]
        {
            out.par_iter_mut()
                .enumerate()
                .for_each(|(i, f)| *f = self.net_force_on(i, bodies));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (i, f) in out.iter_mut().enumerate() {
                *f = self.net_force_on(i, bodies);
            }
        }
    }

    /// Gravitational potential energy of the whole set, `-Σ G m_i m_j / r_ij` over pairs
    pub fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let n = bodies.len();
        let mut u = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = bodies[i].x.displacement_from(bodies[j].x).length();
                u -= self.g * (bodies[i].m * bodies[j].m) / r;
            }
        }
        u
    }
}

impl Default for GravityField {
    fn default() -> Self {
        Self::new()
    }
}
