use serde::Serialize;

use crate::dynamics::state::{Kinematics, Rocket};

/// Mach number for speed `v` and local speed of sound `a`.
pub fn mach(v: f64, speed_of_sound: f64) -> f64 {
    v / speed_of_sound
}

/// One row of the flight log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepRecord {
    pub time: f64,     // s
    pub mass: f64,     // kg
    pub altitude: f64, // m
    pub velocity: f64, // m/s
    pub mach: f64,
}

impl StepRecord {
    pub fn new(time: f64, rocket: &Rocket, kin: &Kinematics, speed_of_sound: f64) -> Self {
        Self {
            time,
            mass: rocket.mass,
            altitude: kin.altitude,
            velocity: kin.velocity,
            mach: mach(kin.velocity, speed_of_sound),
        }
    }
}
