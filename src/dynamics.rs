pub mod state;

use crate::physics::{drag_force, weight};
use state::Rocket;

// ---------------------------------------------------------------------------
// Equations of motion (1D vertical point mass)
// ---------------------------------------------------------------------------

/// Net vertical acceleration `a = (T - D - m*g) / m` at speed `v`.
///
/// Forces modeled:
///   1. Thrust:  constant, straight up
///   2. Drag:    quadratic, opposing the direction of motion
///   3. Gravity: uniform field `g`
///
/// With no mass left there is nothing for thrust or drag to act on, so the
/// vehicle falls freely at `-g`.
pub fn acceleration(rocket: &Rocket, v: f64, rho: f64, g: f64) -> f64 {
    if rocket.mass <= 0.0 {
        return -g;
    }
    let drag = drag_force(rho, v, rocket.cd, rocket.area) * v.signum();
    (rocket.thrust - drag - weight(rocket.mass, g)) / rocket.mass
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
