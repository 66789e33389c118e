use log::{debug, info, warn};

use super::integrator::rk4_step;
use super::record::StepRecord;
use crate::dynamics::state::{Kinematics, Rocket, SimConfig};
use crate::error::Result;
use crate::io::RecordSink;

/// Final state, read once after the last step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutcome {
    pub rocket: Rocket,
    pub kinematics: Kinematics,
    pub steps: usize,
}

// ---------------------------------------------------------------------------
// Fixed-step ascent simulation
// ---------------------------------------------------------------------------

/// Integrate from rest up to `t_max`, handing one record per time point to
/// `sink`: the initial state at `t = 0`, then the state after each step.
pub fn simulate_with(
    rocket: &Rocket,
    config: &SimConfig,
    sink: &mut dyn RecordSink,
) -> Result<RunOutcome> {
    rocket.validate()?;
    config.validate()?;

    let steps = config.step_count();
    info!(
        "Simulating {} steps (dt={} s, t_max={} s, rho={} kg/m^3)",
        steps, config.dt, config.t_max, config.air_density
    );
    debug!("Initial rocket: {:?}", rocket);
    if let Some(t_burnout) = rocket.depletion_time() {
        if t_burnout <= config.t_max {
            info!("Propellant runs out at t={:.2} s", t_burnout);
        } else {
            debug!("Propellant would run out at t={:.2} s", t_burnout);
        }
    }

    let mut rocket = *rocket;
    let mut kin = Kinematics::default();
    let mut depleted = rocket.mass <= 0.0;

    sink.accept(&StepRecord::new(0.0, &rocket, &kin, config.speed_of_sound))?;

    for i in 1..=steps {
        let t = i as f64 * config.dt;
        let (r, k) = rk4_step(&rocket, &kin, config.dt, config.air_density, config.gravity);
        rocket = r;
        kin = k;

        if !depleted && rocket.mass <= 0.0 {
            depleted = true;
            warn!("Mass depleted at t={:.2} s, continuing in free fall", t);
        }

        sink.accept(&StepRecord::new(t, &rocket, &kin, config.speed_of_sound))?;
    }
    sink.finish()?;

    info!(
        "Done: mass={:.2} kg, altitude={:.2} m, velocity={:.2} m/s",
        rocket.mass, kin.altitude, kin.velocity
    );

    Ok(RunOutcome {
        rocket,
        kinematics: kin,
        steps,
    })
}

/// Run a simulation and keep the whole flight log in memory.
pub fn simulate(rocket: &Rocket, config: &SimConfig) -> Result<Vec<StepRecord>> {
    config.validate()?;
    let mut records = Vec::with_capacity(config.record_count().min(1_000_000));
    simulate_with(rocket, config, &mut records)?;
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
