/// Weight of a body of `mass` kg in a uniform field `g`, in N.
pub fn weight(mass: f64, g: f64) -> f64 {
    mass * g
}
