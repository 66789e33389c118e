use nalgebra::Vector2;

use crate::dynamics;
use crate::dynamics::state::{Kinematics, Rocket};

// Layout of the integrated state vector.
const ALT: usize = 0;
const VEL: usize = 1;

// ---------------------------------------------------------------------------
// Stage derivatives
// ---------------------------------------------------------------------------

/// The four RK4 increments of one step, each already scaled by `dt`.
/// Every entry is `[dh, dv]`: the velocity sample and the acceleration sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageDerivatives {
    pub k: [Vector2<f64>; 4],
}

impl StageDerivatives {
    /// `(k1 + 2*k2 + 2*k3 + k4) / 6`
    pub fn increment(&self) -> Vector2<f64> {
        let [k1, k2, k3, k4] = self.k;
        (k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0
    }

    pub fn kv(&self, stage: usize) -> f64 {
        self.k[stage][VEL]
    }

    pub fn kh(&self, stage: usize) -> f64 {
        self.k[stage][ALT]
    }
}

/// Evaluate the four stages for `dh/dt = v`, `dv/dt = a(v)`.
/// Mass is held at `rocket.mass` for all of them.
pub fn rk4_stages(
    rocket: &Rocket,
    kin: &Kinematics,
    dt: f64,
    rho: f64,
    g: f64,
) -> StageDerivatives {
    let f = |y: Vector2<f64>| -> Vector2<f64> {
        let v = y[VEL];
        Vector2::new(v, dynamics::acceleration(rocket, v, rho, g)) * dt
    };

    let y0 = Vector2::new(kin.altitude, kin.velocity);
    let k1 = f(y0);
    let k2 = f(y0 + k1 / 2.0);
    let k3 = f(y0 + k2 / 2.0);
    let k4 = f(y0 + k3);

    StageDerivatives {
        k: [k1, k2, k3, k4],
    }
}

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta step
// ---------------------------------------------------------------------------

/// Advance velocity and altitude by `dt`, then burn `burn_rate * dt` of
/// propellant. Mass never drops below zero.
pub fn rk4_step(
    rocket: &Rocket,
    kin: &Kinematics,
    dt: f64,
    rho: f64,
    g: f64,
) -> (Rocket, Kinematics) {
    let stages = rk4_stages(rocket, kin, dt, rho, g);
    let y1 = Vector2::new(kin.altitude, kin.velocity) + stages.increment();

    let next = Kinematics {
        velocity: y1[VEL],
        altitude: y1[ALT],
    };
    (deplete(rocket, dt), next)
}

/// Explicit first-order mass update, clamped at zero.
pub fn deplete(rocket: &Rocket, dt: f64) -> Rocket {
    let mut mass = rocket.mass - rocket.burn_rate * dt;
    if mass < 0.0 {
        mass = 0.0;
    }
    Rocket { mass, ..*rocket }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
