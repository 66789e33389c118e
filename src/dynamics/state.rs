use serde::Deserialize;

use crate::error::{Result, SimError};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.90665; // gravity used by the ascent model, m/s^2
pub const SPEED_OF_SOUND: f64 = 340.29; // sea level, m/s
pub const AIR_DENSITY: f64 = 1.225; // sea level, kg/m^3

/// Upper bound on integrator steps in one run.
pub const MAX_STEPS: f64 = 1e8;

// Absorbs representation error in `t_max / dt` (10.0 / 0.01 and the like).
const STEP_TOLERANCE: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Rocket: physical parameters (only `mass` changes during a run)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rocket {
    pub mass: f64,      // kg, total (never below zero)
    pub burn_rate: f64, // kg/s
    pub thrust: f64,    // N, constant
    pub cd: f64,        // drag coefficient (dimensionless)
    pub area: f64,      // reference area, m^2
}

impl Default for Rocket {
    fn default() -> Self {
        presets::reference_rocket()
    }
}

impl Rocket {
    /// Reject non-finite parameters and the negative values the force model
    /// has no meaning for. Thrust may be any finite value.
    pub fn validate(&self) -> Result<()> {
        finite("rocket.mass", self.mass)?;
        finite("rocket.burn_rate", self.burn_rate)?;
        finite("rocket.thrust", self.thrust)?;
        finite("rocket.cd", self.cd)?;
        finite("rocket.area", self.area)?;

        non_negative("rocket.mass", self.mass)?;
        non_negative("rocket.burn_rate", self.burn_rate)?;
        non_negative("rocket.cd", self.cd)?;
        non_negative("rocket.area", self.area)?;
        Ok(())
    }

    /// Time until the propellant flow would drive mass to zero.
    pub fn depletion_time(&self) -> Option<f64> {
        if self.burn_rate > 0.0 {
            Some(self.mass / self.burn_rate)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Kinematic state, advanced in place by the integrator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kinematics {
    pub velocity: f64, // m/s, positive up
    pub altitude: f64, // m
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub dt: f64,             // s
    pub t_max: f64,          // s
    pub air_density: f64,    // kg/m^3, constant over the flight
    pub speed_of_sound: f64, // m/s
    pub gravity: f64,        // m/s^2
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            t_max: 10.0,
            air_density: AIR_DENSITY,
            speed_of_sound: SPEED_OF_SOUND,
            gravity: G0,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        finite("sim.dt", self.dt)?;
        finite("sim.t_max", self.t_max)?;
        finite("sim.air_density", self.air_density)?;
        finite("sim.speed_of_sound", self.speed_of_sound)?;
        finite("sim.gravity", self.gravity)?;

        if self.dt <= 0.0 {
            return Err(SimError::invalid("sim.dt", self.dt, "must be positive"));
        }
        if self.speed_of_sound <= 0.0 {
            return Err(SimError::invalid(
                "sim.speed_of_sound",
                self.speed_of_sound,
                "must be positive",
            ));
        }
        non_negative("sim.t_max", self.t_max)?;
        non_negative("sim.air_density", self.air_density)?;

        let ratio = self.t_max / self.dt;
        if !ratio.is_finite() || ratio > MAX_STEPS {
            return Err(SimError::invalid(
                "sim.t_max / sim.dt",
                ratio,
                "too many steps",
            ));
        }
        Ok(())
    }

    /// Number of whole steps of `dt` that fit in `t_max`, so the last record
    /// never lies past `t_max`.
    pub fn step_count(&self) -> usize {
        (self.t_max / self.dt + STEP_TOLERANCE).floor() as usize
    }

    /// Number of records for `t = 0, dt, ..., <= t_max`.
    pub fn record_count(&self) -> usize {
        self.step_count().saturating_add(1)
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::invalid(name, value, "must be finite"))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value < 0.0 {
        Err(SimError::invalid(name, value, "must not be negative"))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

pub mod presets {
    use super::Rocket;

    /// 50 kg hobby rocket with a 500 N motor burning 0.5 kg/s.
    pub fn reference_rocket() -> Rocket {
        Rocket {
            mass: 50.0,
            burn_rate: 0.5,
            thrust: 500.0,
            cd: 0.5,
            area: 0.05,
        }
    }
}
