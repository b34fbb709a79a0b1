//! The motion-model contract and its dispatching sum type.
//!
//! All distances are in metres, velocities in m/s, and times in seconds.

use serde::{Deserialize, Serialize};

use crate::constant::ConstantAcceleration;

// ── Motion ────────────────────────────────────────────────────────────────────

/// The outcome of integrating one timestep: distance covered and the
/// velocity at the end of the step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion {
    /// Distance travelled over the step, metres.  Never negative.
    pub distance: f64,
    /// Velocity at the end of the step, m/s.
    pub velocity: f64,
}

// ── MotionModel ───────────────────────────────────────────────────────────────

/// Physics implementation for a vehicle, selected by the JSON `"model"`
/// discriminator.
///
/// Every variant answers the same six queries; the engine drives vehicles
/// exclusively through them and stays agnostic of the concrete physics.
/// An unknown discriminator fails deserialization, which is how malformed
/// vehicle definitions are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum MotionModel {
    /// Piecewise-constant acceleration and deceleration.
    Constant(ConstantAcceleration),
}

impl MotionModel {
    /// The vehicle's maximum permissible speed, m/s.
    pub fn v_max(&self) -> f64 {
        match self {
            MotionModel::Constant(m) => m.v_max,
        }
    }

    /// Minimum distance needed to stop from velocity `v` under service
    /// braking.
    pub fn braking_distance(&self, v: f64) -> f64 {
        match self {
            MotionModel::Constant(m) => m.braking_distance(v),
        }
    }

    /// Distance needed to decelerate from `v` to `target_v`.  Zero if the
    /// vehicle is already at or below the target.
    pub fn braking_distance_to(&self, v: f64, target_v: f64) -> f64 {
        match self {
            MotionModel::Constant(m) => m.braking_distance_to(v, target_v),
        }
    }

    /// Velocity reached after braking from `v0` over `dist` metres.
    ///
    /// Used when a Movement Authority grants less distance than the vehicle
    /// proposed: the granted distance is re-expressed as a braking outcome.
    pub fn velocity_after_braking(&self, v0: f64, dist: f64) -> f64 {
        match self {
            MotionModel::Constant(m) => m.velocity_after_braking(v0, dist),
        }
    }

    /// Advance toward `target_v` under traction for `dt` seconds.
    ///
    /// If the target is reached mid-step the vehicle cruises at `target_v`
    /// for the remainder of the step.
    pub fn accelerate_step(&self, v: f64, target_v: f64, dt: f64) -> Motion {
        match self {
            MotionModel::Constant(m) => m.accelerate_step(v, target_v, dt),
        }
    }

    /// Brake toward `target_v` (≥ 0) for `dt` seconds.
    ///
    /// If the target is reached mid-step the vehicle cruises at `target_v`
    /// for the remainder of the step.
    pub fn decelerate_step(&self, v: f64, target_v: f64, dt: f64) -> Motion {
        match self {
            MotionModel::Constant(m) => m.decelerate_step(v, target_v, dt),
        }
    }
}
