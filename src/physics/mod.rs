pub mod aerodynamics;
pub mod gravity;

pub use aerodynamics::drag_force;
pub use gravity::weight;
