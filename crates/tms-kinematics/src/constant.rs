//! Piecewise-constant acceleration physics.

use serde::{Deserialize, Serialize};

use crate::model::Motion;

/// Fixed traction and braking rates.  The default and simplest model.
///
/// JSON discriminator: `"model": "constant"`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantAcceleration {
    /// Traction acceleration, m/s².
    pub a_acc: f64,
    /// Service braking deceleration, m/s² (positive).
    pub a_dcc: f64,
    /// Maximum speed, m/s.
    pub v_max: f64,
}

impl ConstantAcceleration {
    pub fn braking_distance(&self, v: f64) -> f64 {
        if self.a_dcc <= 0.0 {
            return f64::INFINITY;
        }
        (v * v) / (2.0 * self.a_dcc)
    }

    pub fn braking_distance_to(&self, v: f64, target_v: f64) -> f64 {
        if self.a_dcc <= 0.0 {
            return f64::INFINITY;
        }
        if v <= target_v {
            return 0.0;
        }
        (v * v - target_v * target_v) / (2.0 * self.a_dcc)
    }

    pub fn velocity_after_braking(&self, v0: f64, dist: f64) -> f64 {
        if self.a_dcc <= 0.0 {
            return v0;
        }
        (v0 * v0 - 2.0 * self.a_dcc * dist).max(0.0).sqrt()
    }

    pub fn accelerate_step(&self, v: f64, target_v: f64, dt: f64) -> Motion {
        if self.a_acc <= 0.0 || v >= target_v {
            return Motion { distance: target_v * dt, velocity: target_v };
        }
        let t_to_target = (target_v - v) / self.a_acc;
        if t_to_target <= dt {
            // Reaches target_v mid-step: accelerate, then cruise for the
            // remainder.
            let s1 = v * t_to_target + 0.5 * self.a_acc * t_to_target * t_to_target;
            let s2 = target_v * (dt - t_to_target);
            return Motion { distance: s1 + s2, velocity: target_v };
        }
        Motion {
            distance: v * dt + 0.5 * self.a_acc * dt * dt,
            velocity: v + self.a_acc * dt,
        }
    }

    pub fn decelerate_step(&self, v: f64, target_v: f64, dt: f64) -> Motion {
        if self.a_dcc <= 0.0 || v <= target_v {
            return Motion { distance: target_v * dt, velocity: target_v };
        }
        let t_to_target = (v - target_v) / self.a_dcc;
        if t_to_target <= dt {
            // Reaches target_v mid-step: brake, then cruise for the remainder.
            // The braking segment is clamped at zero in case the closed form
            // goes negative (the vehicle never reverses).
            let s1 = v * t_to_target - 0.5 * self.a_dcc * t_to_target * t_to_target;
            let s2 = target_v * (dt - t_to_target);
            return Motion { distance: s1.max(0.0) + s2, velocity: target_v };
        }
        Motion {
            distance: (v * dt - 0.5 * self.a_dcc * dt * dt).max(0.0),
            velocity: v - self.a_dcc * dt,
        }
    }
}
