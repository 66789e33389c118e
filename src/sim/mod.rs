pub mod integrator;
pub mod record;
pub mod runner;

pub use integrator::{rk4_stages, rk4_step, StageDerivatives};
pub use record::{mach, StepRecord};
pub use runner::{simulate, simulate_with, RunOutcome};
