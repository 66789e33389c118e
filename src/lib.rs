pub mod config;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod sim;

pub use config::{load_config, RunConfig};
pub use error::{Result, SimError};

pub mod types {
    pub use crate::dynamics::state::{
        presets, Kinematics, Rocket, SimConfig, AIR_DENSITY, G0, SPEED_OF_SOUND,
    };
    pub use crate::sim::record::StepRecord;
}

pub mod integrator {
    pub use crate::sim::integrator::{deplete, rk4_stages, rk4_step, StageDerivatives};
    pub use crate::sim::runner::{simulate, simulate_with, RunOutcome};
}
