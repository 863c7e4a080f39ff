//! Fixed-step time integration for a single body
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked first and the
//! already-updated velocity drifts the position. Swapping the two updates
//! turns this into explicit Euler and changes long-run energy drift.

use super::states::Body;
use super::vector::NVec2;

/// Advance `body` by `dt` under a constant `force` for the duration of the step
///
/// a = F / m
/// v_n+1 = v_n + a dt
/// x_n+1 = x_n + v_n+1 dt
pub fn semi_implicit_euler(body: &mut Body, force: NVec2, dt: f64) {
    let a = force / body.m;
    body.v += a * dt;
    body.x += body.v * dt;
}
