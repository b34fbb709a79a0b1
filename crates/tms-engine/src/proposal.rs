//! The kinematic proposal: how far a service wants to move this step.

use tms_service::{ServiceState, SimService};

/// Effective speed-limit context for one service at one timestep.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SpeedLimitInfo {
    /// Effective limit on the current edge: min of the vehicle's maximum
    /// and the edge's limit.
    pub current_max: f64,
    /// Distance remaining on the current edge, where the limit may change.
    pub dist_to_change: f64,
    /// Effective limit on the next edge toward the next stop; 0 when the
    /// next stop ends the current edge (stop braking handles that approach
    /// instead).
    pub next_max: f64,
}

/// The outcome of a proposal: distance the service wants to travel this
/// step, plus the velocity and state it would end the step with.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Proposal {
    pub distance: f64,
    pub velocity: f64,
    pub state: ServiceState,
}

/// Propose unconstrained movement for `svc` over `dt` seconds.
///
/// Priority ladder, highest first:
///
/// 1. Braking to stop at the next stop
/// 2. Braking for an upcoming speed-limit reduction on the next edge
/// 3. Decelerating to the current edge limit (if currently over it)
/// 4. Normal state machine (accelerate / cruise / decelerate)
pub(crate) fn propose_movement(
    svc: &SimService,
    dt: f64,
    dist_to_stop: f64,
    sl: SpeedLimitInfo,
) -> Proposal {
    let v = svc.velocity;
    let m = &svc.vehicle.kinematics;
    let effective_v_max = sl.current_max;

    // 1. Stop braking (highest priority).
    if dist_to_stop <= m.braking_distance(v) {
        let out = m.decelerate_step(v, 0.0, dt);
        if out.velocity <= 0.0 {
            return Proposal {
                distance: out.distance,
                velocity: 0.0,
                state: ServiceState::Dwelling,
            };
        }
        return Proposal {
            distance: out.distance,
            velocity: out.velocity,
            state: ServiceState::Decelerating,
        };
    }

    // 2. Lookahead braking for a lower speed limit on the next edge.
    if sl.next_max > 0.0
        && sl.next_max < effective_v_max
        && v > sl.next_max
        && sl.dist_to_change <= m.braking_distance_to(v, sl.next_max)
    {
        let out = m.decelerate_step(v, sl.next_max, dt);
        return Proposal {
            distance: out.distance,
            velocity: out.velocity,
            state: if out.velocity <= sl.next_max {
                ServiceState::Cruising
            } else {
                ServiceState::Decelerating
            },
        };
    }

    // 3. Decelerate to the current edge limit if currently over it.
    if v > effective_v_max {
        let out = m.decelerate_step(v, effective_v_max, dt);
        return Proposal {
            distance: out.distance,
            velocity: out.velocity,
            state: if out.velocity <= effective_v_max {
                ServiceState::Cruising
            } else {
                ServiceState::Decelerating
            },
        };
    }

    // 4. Normal state machine.
    match svc.state {
        ServiceState::Accelerating => {
            let out = m.accelerate_step(v, effective_v_max, dt);
            if out.velocity >= effective_v_max {
                Proposal {
                    distance: out.distance,
                    velocity: effective_v_max,
                    state: ServiceState::Cruising,
                }
            } else {
                Proposal {
                    distance: out.distance,
                    velocity: out.velocity,
                    state: ServiceState::Accelerating,
                }
            }
        }

        ServiceState::Cruising => Proposal {
            distance: effective_v_max * dt,
            velocity: effective_v_max,
            state: ServiceState::Cruising,
        },

        ServiceState::Decelerating => {
            let out = m.decelerate_step(v, 0.0, dt);
            if out.velocity <= 0.0 {
                Proposal {
                    distance: out.distance,
                    velocity: 0.0,
                    state: ServiceState::Dwelling,
                }
            } else {
                Proposal {
                    distance: out.distance,
                    velocity: out.velocity,
                    state: ServiceState::Decelerating,
                }
            }
        }

        // Stationary and dwelling services never reach the proposal.
        state => Proposal {
            distance: 0.0,
            velocity: v,
            state,
        },
    }
}

/// Re-derive velocity and state when the Movement Authority grants less
/// distance than proposed: the service is treated as braking through the
/// granted distance at its maximum service rate.
///
/// A zero terminal velocity puts the service into `Dwelling` with no dwell
/// time loaded; the next step releases it back into `Accelerating`.  The
/// next-stop pointer is untouched, so an MA standstill never skips a stop.
pub(crate) fn constrained_kinematics(svc: &SimService, granted: f64) -> Proposal {
    let v = svc.vehicle.kinematics.velocity_after_braking(svc.velocity, granted);
    if v <= 0.0 {
        return Proposal {
            distance: granted,
            velocity: 0.0,
            state: ServiceState::Dwelling,
        };
    }
    Proposal {
        distance: granted,
        velocity: v,
        state: ServiceState::Decelerating,
    }
}
