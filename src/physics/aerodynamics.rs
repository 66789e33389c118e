/// Aerodynamic drag magnitude, `D = 0.5 * rho * v^2 * Cd * A`.
///
/// Always non-negative and quadratic in speed. The sign of `v` is ignored;
/// the caller decides which way drag acts.
pub fn drag_force(rho: f64, v: f64, cd: f64, area: f64) -> f64 {
    let q_dyn = 0.5 * rho * v * v; // dynamic pressure
    q_dyn * cd * area
}
